//! Prelude module for `anicursor_types`.
//!
//! ```no_run
//! use anicursor_types::prelude::*;
//!
//! let data = std::fs::read("busy.ani").unwrap();
//! let ani = AniFile::from_vec(data).unwrap();
//! let timeline = ani.timeline().unwrap();
//! ```

#[doc(inline)]
pub use crate::ani::{
	Chunk, ChunkIndex, DurationSource, File as AniFile, FourCC, FrameEntry, Header as AniHeader,
	Metadata as AniMetadata, PlayOrder, Timeline, find_chunk, jiffies_to_ms,
};

#[doc(inline)]
pub use crate::css::{
	animation_name, animation_rule, class_selector, render_keyframes, sanitize, style_scope_id,
};

#[doc(inline)]
pub use crate::error::AniError;
