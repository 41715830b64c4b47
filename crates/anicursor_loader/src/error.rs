//! Error types for the cursor load pipeline.

use anicursor_types::AniError;
use thiserror::Error;

/// Errors raised while fetching container bytes.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The source answered with a non-success status
	#[error("Unexpected status {status}")]
	Status {
		/// Status code reported by the source
		status: u16,
	},

	/// Nothing is stored under the requested identifier
	#[error("Source not found")]
	NotFound,

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors raised while turning one embedded icon into a resized image.
#[derive(Debug, Error)]
pub enum FrameError {
	/// The image list has no payload at this index
	#[error("Image is missing from the image list")]
	Missing,

	/// The payload is not a readable icon or cursor file
	#[error("Icon decode failed: {0}")]
	Decode(#[source] std::io::Error),

	/// The icon directory holds no images
	#[error("Icon contains no images")]
	Empty,

	/// Decoded pixel data does not match the declared dimensions
	#[error("Pixel buffer does not match {width}x{height}")]
	PixelBuffer {
		/// Declared width
		width: u32,
		/// Declared height
		height: u32,
	},

	/// Re-encoding the resized image failed
	#[error("Image encode failed: {0}")]
	Encode(#[from] image::ImageError),

	/// The resize task panicked
	#[error("Resize task panicked: {0}")]
	Panicked(String),
}

/// Errors returned by a cursor load.
///
/// A load either produces a complete animation or one of these; partial
/// animations are never returned.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The container bytes could not be fetched
	#[error("Failed to fetch '{url}': {source}")]
	Fetch {
		/// Requested source
		url: String,
		/// Underlying failure
		#[source]
		source: FetchError,
	},

	/// The container is not a usable animated cursor
	#[error("Malformed container: {0}")]
	MalformedContainer(#[from] AniError),

	/// One frame could not be decoded or resized
	#[error("Failed to process image {index}: {source}")]
	FrameDecode {
		/// Image-list index of the failing frame
		index: u32,
		/// Underlying failure
		#[source]
		source: FrameError,
	},

	/// The load options cannot produce an animation
	#[error("Invalid load options: {0}")]
	InvalidOptions(String),

	/// Load options could not be read
	#[error(transparent)]
	Config(#[from] config::ConfigError),

	/// The runtime cancelled a resize task before it finished
	#[error("Resize task cancelled: {0}")]
	Cancelled(#[from] tokio::task::JoinError),
}

impl LoadError {
	/// Returns `true` for failures of the fetch stage.
	pub fn is_fetch(&self) -> bool {
		matches!(self, Self::Fetch { .. })
	}

	/// Returns `true` for container failures.
	pub fn is_malformed(&self) -> bool {
		matches!(self, Self::MalformedContainer(_))
	}

	/// Returns `true` for frame decode and resize failures.
	pub fn is_frame_decode(&self) -> bool {
		matches!(self, Self::FrameDecode { .. })
	}
}
