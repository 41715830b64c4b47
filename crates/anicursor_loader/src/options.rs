//! Per-load configuration.

use std::path::Path;

use config::{Config, FileFormat};
use serde::Deserialize;

use crate::error::LoadError;

/// Default CSS cursor keyword shown when an animation frame cannot be displayed
pub const DEFAULT_CURSOR_FALLBACK: &str = "auto";

/// Default rendered frame edge in pixels
pub const DEFAULT_SIZE: u32 = 32;

/// Target pixel dimensions of every resized frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderSize {
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

/// Options of a single cursor load.
///
/// Can be built in code or read from TOML:
///
/// ```
/// use anicursor_loader::LoadOptions;
///
/// let options = LoadOptions::from_toml_str(
///     r#"
///     cursor_fallback = "pointer"
///     width = 48
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(options.cursor_fallback, "pointer");
/// assert_eq!((options.width, options.height), (48, 32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
	/// CSS cursor keyword listed after every frame image
	pub cursor_fallback: String,
	/// Rendered frame width in pixels
	pub width: u32,
	/// Rendered frame height in pixels
	pub height: u32,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			cursor_fallback: DEFAULT_CURSOR_FALLBACK.to_string(),
			width: DEFAULT_SIZE,
			height: DEFAULT_SIZE,
		}
	}
}

impl LoadOptions {
	/// Creates options with the defaults: `auto` fallback, 32x32 frames.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback cursor keyword.
	pub fn with_fallback(mut self, keyword: impl Into<String>) -> Self {
		self.cursor_fallback = keyword.into();
		self
	}

	/// Sets the rendered frame size.
	pub fn with_size(mut self, width: u32, height: u32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	/// Rendered frame size.
	pub fn render_size(&self) -> RenderSize {
		RenderSize {
			width: self.width,
			height: self.height,
		}
	}

	/// Checks that the options can produce an animation.
	///
	/// # Errors
	///
	/// Returns [`LoadError::InvalidOptions`] for a zero dimension or a blank
	/// fallback keyword.
	pub fn validate(&self) -> Result<(), LoadError> {
		if self.width == 0 || self.height == 0 {
			return Err(LoadError::InvalidOptions(format!(
				"frame size must be non-zero, got {}x{}",
				self.width, self.height
			)));
		}
		if self.cursor_fallback.trim().is_empty() {
			return Err(LoadError::InvalidOptions("cursor fallback keyword is empty".to_string()));
		}
		Ok(())
	}

	/// Reads options from a TOML document; absent keys keep their defaults.
	///
	/// # Errors
	///
	/// Returns [`LoadError::Config`] if the document cannot be parsed.
	pub fn from_toml_str(toml: &str) -> Result<Self, LoadError> {
		let options = Config::builder()
			.add_source(config::File::from_str(toml, FileFormat::Toml))
			.build()?
			.try_deserialize()?;
		Ok(options)
	}

	/// Reads options from a TOML file.
	///
	/// # Errors
	///
	/// Returns [`LoadError::Config`] if the file is missing or cannot be parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
		let options = Config::builder()
			.add_source(config::File::from(path.as_ref()).format(FileFormat::Toml))
			.build()?
			.try_deserialize()?;
		Ok(options)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let options = LoadOptions::new();
		assert_eq!(options.cursor_fallback, "auto");
		assert_eq!(options.render_size(), RenderSize {
			width: 32,
			height: 32,
		});
		assert!(options.validate().is_ok());
	}

	#[test]
	fn test_builder_setters() {
		let options = LoadOptions::new().with_fallback("wait").with_size(64, 48);
		assert_eq!(options.cursor_fallback, "wait");
		assert_eq!((options.width, options.height), (64, 48));
	}

	#[test]
	fn test_validation() {
		assert!(matches!(
			LoadOptions::new().with_size(0, 32).validate(),
			Err(LoadError::InvalidOptions(_))
		));
		assert!(matches!(
			LoadOptions::new().with_fallback("  ").validate(),
			Err(LoadError::InvalidOptions(_))
		));
	}

	#[test]
	fn test_empty_toml_is_default() {
		assert_eq!(LoadOptions::from_toml_str("").unwrap(), LoadOptions::default());
	}

	#[test]
	fn test_bad_toml() {
		assert!(matches!(LoadOptions::from_toml_str("width = \"wide\""), Err(LoadError::Config(_))));
	}

	#[test]
	fn test_missing_file() {
		assert!(LoadOptions::from_file("/nonexistent/anicursor.toml").is_err());
	}
}
