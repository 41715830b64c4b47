#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `anicursor-rs` turns Windows animated cursors (`.ani`) into stepped CSS
//! `@keyframes` animations.
//!
//! Container parsing and CSS text generation live in
//! [`anicursor_types`]; fetching, frame resizing and the load cache live in
//! [`anicursor_loader`].
//!
//! ```no_run
//! use anicursor_rs::prelude::*;
//!
//! # async fn run() -> Result<(), LoadError> {
//! let cache = CursorCache::new(FileFetcher::with_root("assets"));
//! let sheet = MemoryStyleSheet::new();
//!
//! cache.set_cursor(&sheet, "body", "busy.ani", &LoadOptions::new().with_fallback("wait")).await?;
//! println!("{}", sheet.contents());
//! # Ok(())
//! # }
//! ```
//!
pub use anicursor_internal::*;
