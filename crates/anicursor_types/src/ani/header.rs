//! `anih` header fields.

use std::fmt;

use crate::error::AniError;

use super::{chunk::read_u32_le, constants, timeline::jiffies_to_ms};

/// Fields of the `anih` chunk.
///
/// ```text
/// Word  Field            Description
/// ----  ---------------  ------------------------------------------
/// 0     header_size      Should be 36 (sizeof ANIHEADER)
/// 1     frame_count      Number of images in the `fram` list
/// 2     step_count       Number of entries in the play order
/// 3     width            Unused by Windows
/// 4     height           Unused by Windows
/// 5     bit_count        Unused by Windows
/// 6     planes           Unused by Windows
/// 7     default_jiffies  Display rate when no `rate` chunk exists (1/60 s)
/// 8     flags            AF_ICON (0x1) | AF_SEQUENCE (0x2)
/// ```
///
/// Only words 1, 2 and 7 are needed to build an animation. `step_count` is
/// expected to be at most `frame_count` for sequenced cursors, but this is
/// not enforced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	/// Declared payload size
	pub header_size: u32,
	/// Number of images in the image list
	pub frame_count: u32,
	/// Play-order length
	pub step_count: u32,
	/// Nominal frame width
	pub width: u32,
	/// Nominal frame height
	pub height: u32,
	/// Nominal bits per pixel
	pub bit_count: u32,
	/// Nominal color planes
	pub planes: u32,
	/// Default per-frame display rate in jiffies
	pub default_jiffies: u32,
	/// `AF_*` flags
	pub flags: u32,
}

impl Header {
	/// Size of a serialized header in bytes
	pub const SIZE: usize = constants::ANIH_SIZE;

	/// Parses the `anih` payload.
	///
	/// Payloads shorter than 36 bytes are accepted as long as they reach the
	/// default rate word; missing trailing words read as zero.
	///
	/// # Errors
	///
	/// Returns [`AniError::ChunkTooShort`] if `data` ends before word 7.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		if data.len() < constants::ANIH_REQUIRED_SIZE {
			return Err(AniError::chunk_too_short(
				constants::ANIH,
				constants::ANIH_REQUIRED_SIZE,
				data.len(),
			));
		}

		let word = |index: usize| read_u32_le(data, index * 4).unwrap_or(0);

		Ok(Self {
			header_size: word(0),
			frame_count: word(constants::WORD_FRAME_COUNT),
			step_count: word(constants::WORD_STEP_COUNT),
			width: word(3),
			height: word(4),
			bit_count: word(5),
			planes: word(6),
			default_jiffies: word(constants::WORD_DEFAULT_RATE),
			flags: word(8),
		})
	}

	/// Serializes the header to its 36 byte on-disk form.
	pub fn to_bytes(&self) -> [u8; constants::ANIH_SIZE] {
		let words = [
			self.header_size,
			self.frame_count,
			self.step_count,
			self.width,
			self.height,
			self.bit_count,
			self.planes,
			self.default_jiffies,
			self.flags,
		];
		let mut buffer = [0u8; constants::ANIH_SIZE];
		for (slot, word) in buffer.chunks_exact_mut(4).zip(words) {
			slot.copy_from_slice(&word.to_le_bytes());
		}
		buffer
	}

	/// Default per-frame duration in milliseconds.
	pub fn default_duration_ms(&self) -> f64 {
		jiffies_to_ms(self.default_jiffies)
	}

	/// Returns `true` if frames are flagged as icon images.
	pub fn is_icon(&self) -> bool {
		self.flags & constants::AF_ICON != 0
	}

	/// Returns `true` if the header announces a `seq ` chunk.
	pub fn is_sequenced(&self) -> bool {
		self.flags & constants::AF_SEQUENCE != 0
	}
}

impl fmt::Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"ANIH {{ frames: {}, steps: {}, rate: {} jiffies, flags: 0x{:X} }}",
			self.frame_count, self.step_count, self.default_jiffies, self.flags
		)
	}
}

impl TryFrom<&[u8]> for Header {
	type Error = AniError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
