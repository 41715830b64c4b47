//! Core data types for decoding Windows animated cursors into CSS animations.
//!
//! # Modules
//!
//! - **ani**: RIFF/ACON container parsing, `anih` header fields and frame timing
//! - **css**: Identifier derivation and `@keyframes` / `animation` rule text
//!
//! Everything here is synchronous and free of I/O except [`ani::File::open`].
//! Image decoding and the asynchronous load pipeline live in `anicursor_loader`.
//!
//! # Examples
//!
//! ```no_run
//! use anicursor_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ani = AniFile::open("busy.ani")?;
//! let timeline = ani.timeline()?;
//! let scope = style_scope_id("busy.ani");
//!
//! let css = render_keyframes(&animation_name(&scope), &timeline, "auto", |i| format!("frame{i}.png"));
//! println!("{css}");
//! # Ok(())
//! # }
//! ```

pub mod ani;
pub mod css;
mod error;

/// `use anicursor_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::AniError;
