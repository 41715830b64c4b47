//! This module is separated into its own crate to keep the facade thin, and should not be used directly.

/// `use anicursor_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use anicursor_loader;
pub use anicursor_types;

// Re-export commonly used types at crate root
pub use anicursor_loader::{AnimationDescriptor, CursorCache, LoadError, LoadOptions};
pub use anicursor_types::{AniError, ani::File as AniFile};
