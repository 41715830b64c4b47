//! Asynchronous loading of animated cursors into CSS animations.
//!
//! The pipeline fetches container bytes through a [`Fetcher`], parses them
//! with [`anicursor_types::ani::File`], resizes every referenced frame image
//! on the blocking pool and assembles an [`AnimationDescriptor`] holding the
//! generated `@keyframes` rules. [`CursorCache`] makes the pipeline
//! idempotent per source, and the [`style`] helpers bind a descriptor to
//! selectors through a [`StyleSink`].

pub mod builder;
pub mod cache;
pub mod descriptor;
mod error;
pub mod fetch;
pub mod image;
pub mod options;
pub mod style;

pub use builder::{build_descriptor, resize_frames};
pub use cache::CursorCache;
pub use descriptor::AnimationDescriptor;
pub use error::{FetchError, FrameError, LoadError};
pub use fetch::{Fetcher, FileFetcher, MemoryFetcher};
pub use image::{FrameResizer, IconResizer, ImageReference, ResizedFrameImage};
pub use options::{LoadOptions, RenderSize};
pub use style::{MemoryStyleSheet, StyleSink, attach_default, attach_to_selector, attach_to_selectors};
