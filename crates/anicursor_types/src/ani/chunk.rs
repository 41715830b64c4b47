//! RIFF chunk walking.
//!
//! A RIFF container is a flat list of length-prefixed chunks, some of which
//! (`LIST`) nest a second level of chunks after a four byte list type.
//! [`ChunkIndex`] records where every top-level chunk lives in the buffer and
//! expands the `fram` and `INFO` lists one level deep.

use std::fmt;

use log::{debug, warn};

use crate::error::AniError;

use super::constants;

/// Four character chunk identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
	/// Returns the raw identifier bytes.
	pub const fn as_bytes(&self) -> &[u8; 4] {
		&self.0
	}
}

impl From<[u8; 4]> for FourCC {
	fn from(value: [u8; 4]) -> Self {
		Self(value)
	}
}

impl From<&[u8; 4]> for FourCC {
	fn from(value: &[u8; 4]) -> Self {
		Self(*value)
	}
}

impl fmt::Display for FourCC {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &b in &self.0 {
			let c = if b.is_ascii_graphic() || b == b' ' {
				b as char
			} else {
				'?'
			};
			write!(f, "{c}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for FourCC {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FourCC({self})")
	}
}

/// Location of one chunk inside a container buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
	/// Chunk identifier
	pub id: FourCC,
	/// Offset of the chunk preamble (identifier) in the buffer
	pub offset: usize,
	/// Offset of the first payload byte
	pub data_start: usize,
	/// Payload length, clamped to the bytes actually present
	pub data_len: usize,
}

impl Chunk {
	/// Offset one past the last payload byte.
	pub fn data_end(&self) -> usize {
		self.data_start + self.data_len
	}

	/// Borrows the chunk payload out of the buffer it was indexed from.
	///
	/// Returns an empty slice if `buffer` is not the indexed buffer and is too short.
	pub fn data<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
		buffer.get(self.data_start..self.data_end()).unwrap_or_default()
	}

	/// List type of a `LIST` chunk (the first four payload bytes).
	pub fn list_type(&self, buffer: &[u8]) -> Option<FourCC> {
		if self.id != constants::LIST {
			return None;
		}
		let bytes: [u8; 4] = self.data(buffer).get(..4)?.try_into().ok()?;
		Some(FourCC(bytes))
	}
}

/// Reads a little-endian u32 at `offset`, or `None` past the end of `data`.
pub(crate) fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
	let end = offset.checked_add(4)?;
	let bytes: [u8; 4] = data.get(offset..end)?.try_into().ok()?;
	Some(u32::from_le_bytes(bytes))
}

/// Walks the chunk list stored in `buffer[start..end]`.
///
/// A chunk claiming more bytes than remain is clamped to the remainder;
/// walking stops once fewer than a chunk preamble's worth of bytes is left.
fn walk(buffer: &[u8], start: usize, end: usize) -> Vec<Chunk> {
	let end = end.min(buffer.len());
	let mut chunks = Vec::new();
	let mut pos = start;

	while pos + constants::CHUNK_HEADER_SIZE <= end {
		let Some(declared) = read_u32_le(buffer, pos + 4) else {
			break;
		};
		let mut id = [0u8; 4];
		id.copy_from_slice(&buffer[pos..pos + 4]);
		let id = FourCC(id);

		let data_start = pos + constants::CHUNK_HEADER_SIZE;
		let available = end - data_start;
		let data_len = (declared as usize).min(available);
		if data_len < declared as usize {
			warn!(
				"Chunk '{id}' at 0x{pos:X} declares {declared} bytes but only {available} remain"
			);
		}

		chunks.push(Chunk {
			id,
			offset: pos,
			data_start,
			data_len,
		});

		// RIFF pads odd-sized payloads to a word boundary
		pos = data_start + data_len + (data_len & 1);
	}

	chunks
}

/// Index of the chunks of one animated cursor container.
///
/// Built once per buffer; holds offsets only, never a copy of the payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkIndex {
	form_type: FourCC,
	chunks: Vec<Chunk>,
	frames: Vec<Chunk>,
	info: Vec<Chunk>,
}

impl ChunkIndex {
	/// Indexes `buffer`, which must start with a RIFF preamble.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the RIFF preamble or
	/// does not start with the `RIFF` signature. Everything past the preamble
	/// is read tolerantly.
	pub fn build(buffer: &[u8]) -> Result<Self, AniError> {
		if buffer.len() < constants::RIFF_HEADER_SIZE {
			return Err(AniError::insufficient_data(constants::RIFF_HEADER_SIZE, buffer.len()));
		}

		let mut signature = [0u8; 4];
		signature.copy_from_slice(&buffer[0..4]);
		if FourCC(signature) != constants::RIFF {
			return Err(AniError::InvalidSignature(signature));
		}

		let mut form = [0u8; 4];
		form.copy_from_slice(&buffer[8..12]);
		let form_type = FourCC(form);
		if form_type != constants::ACON {
			warn!("Unexpected RIFF form type '{form_type}', expected 'ACON'");
		}

		let declared_end = read_u32_le(buffer, 4)
			.map_or(buffer.len(), |size| (size as usize).saturating_add(8));
		let end = if declared_end < constants::RIFF_HEADER_SIZE {
			buffer.len()
		} else {
			declared_end.min(buffer.len())
		};

		let chunks = walk(buffer, constants::RIFF_HEADER_SIZE, end);
		let mut frames = Vec::new();
		let mut info = Vec::new();
		let mut seen_fram = false;

		for chunk in &chunks {
			match chunk.list_type(buffer) {
				Some(constants::FRAM) if !seen_fram => {
					seen_fram = true;
					frames = walk(buffer, chunk.data_start + 4, chunk.data_end());
				}
				Some(constants::INFO) if info.is_empty() => {
					info = walk(buffer, chunk.data_start + 4, chunk.data_end());
				}
				_ => {}
			}
		}

		if let Some(odd) = frames.iter().find(|c| c.id != constants::ICON) {
			debug!("Image list contains non-icon sub-chunk '{}'", odd.id);
		}

		debug!(
			"Indexed {} chunks, {} images, {} metadata entries",
			chunks.len(),
			frames.len(),
			info.len()
		);

		Ok(Self {
			form_type,
			chunks,
			frames,
			info,
		})
	}

	/// RIFF form type (`ACON` for animated cursors).
	pub fn form_type(&self) -> FourCC {
		self.form_type
	}

	/// All top-level chunks in storage order.
	pub fn chunks(&self) -> &[Chunk] {
		&self.chunks
	}

	/// First top-level chunk with identifier `id`.
	pub fn find(&self, id: FourCC) -> Option<&Chunk> {
		self.chunks.iter().find(|c| c.id == id)
	}

	/// Image-list sub-chunks, one per embedded icon, in storage order.
	pub fn frames(&self) -> &[Chunk] {
		&self.frames
	}

	/// Sub-chunks of the `INFO` list, if any.
	pub fn info(&self) -> &[Chunk] {
		&self.info
	}
}

/// Locates the first top-level chunk named `id` in a container buffer.
///
/// Returns `None` if the chunk is absent or the buffer is not a RIFF container.
///
/// # Examples
///
/// ```
/// use anicursor_types::ani::{FourCC, find_chunk};
///
/// let mut data = b"RIFF\x14\0\0\0ACONanih\x08\0\0\0".to_vec();
/// data.extend_from_slice(&[0u8; 8]);
///
/// let chunk = find_chunk(&data, FourCC(*b"anih")).unwrap();
/// assert_eq!(chunk.data_start, 20);
/// assert_eq!(chunk.data_len, 8);
/// assert!(find_chunk(&data, FourCC(*b"rate")).is_none());
/// ```
pub fn find_chunk(buffer: &[u8], id: FourCC) -> Option<Chunk> {
	ChunkIndex::build(buffer).ok()?.find(id).copied()
}
