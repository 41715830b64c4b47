//! Prelude module for `anicursor_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use anicursor_internal::prelude::*;
//!
//! let options = LoadOptions::new().with_fallback("wait").with_size(48, 48);
//! assert_eq!(options.render_size(), RenderSize { width: 48, height: 48 });
//!
//! let scope = style_scope_id("/cursors/busy.ani");
//! assert_eq!(animation_name(&scope), "cursor-animation--cursors-busy-ani-keyframes");
//! ```

// Re-export everything from anicursor_types::prelude
#[doc(inline)]
pub use anicursor_types::prelude::*;

#[doc(inline)]
pub use anicursor_loader::{
	AnimationDescriptor, CursorCache, FetchError, Fetcher, FileFetcher, FrameError, FrameResizer, IconResizer,
	ImageReference, LoadError, LoadOptions, MemoryFetcher, MemoryStyleSheet, RenderSize, ResizedFrameImage,
	StyleSink, attach_default, attach_to_selector, attach_to_selectors,
};
