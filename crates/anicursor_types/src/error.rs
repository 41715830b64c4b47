//! Error types for animated cursor container parsing.

use thiserror::Error;

use crate::ani::FourCC;

/// Errors that make an animated cursor container unusable.
///
/// Every variant is fatal: a container that produces one of these cannot be
/// turned into an animation. Problems with the optional `rate` and `seq`
/// chunks are never reported here, they fall back to the header defaults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AniError {
	/// Not enough data to parse
	#[error("Insufficient data: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// The buffer does not start with a RIFF signature
	#[error("Invalid RIFF signature: {0:02X?}")]
	InvalidSignature([u8; 4]),

	/// A required chunk is absent
	#[error("Missing required chunk '{0}'")]
	MissingChunk(FourCC),

	/// A required chunk is too short for the fields read from it
	#[error("Chunk '{chunk}' too short: need {expected} bytes, found {actual}")]
	ChunkTooShort {
		/// Chunk identifier
		chunk: FourCC,
		/// Bytes required
		expected: usize,
		/// Bytes present
		actual: usize,
	},

	/// A play-order entry references an image the image list does not hold
	#[error("Frame {position} references image {image_index}, but only {available} images exist")]
	MissingImage {
		/// Position in the play order
		position: usize,
		/// Referenced image-list index
		image_index: u32,
		/// Number of images in the image list
		available: usize,
	},

	/// A header field holds a value the container cannot satisfy
	#[error("Header field '{field}' out of range: {value} (limit {limit})")]
	FieldOutOfRange {
		/// Field name
		field: &'static str,
		/// Value found in the header
		value: u32,
		/// Largest acceptable value
		limit: usize,
	},

	/// IO error while reading a container from disk
	#[error("IO error: {0}")]
	Io(String),
}

impl AniError {
	/// Shorthand for [`AniError::InsufficientData`].
	pub fn insufficient_data(expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			expected,
			actual,
		}
	}

	/// Shorthand for [`AniError::ChunkTooShort`].
	pub fn chunk_too_short(chunk: FourCC, expected: usize, actual: usize) -> Self {
		Self::ChunkTooShort {
			chunk,
			expected,
			actual,
		}
	}
}

impl From<std::io::Error> for AniError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err.to_string())
	}
}
