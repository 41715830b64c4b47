//! Parsed animated cursor container.

use log::debug;

use crate::error::AniError;

use super::{
	chunk::ChunkIndex,
	constants,
	header::Header,
	metadata::Metadata,
	timeline::{self, Timeline},
};

/// An animated cursor container together with its chunk index.
///
/// The buffer is never modified after parsing. Image payloads are borrowed
/// out of it on demand with [`File::image_data`].
///
/// # Examples
///
/// ```no_run
/// use anicursor_types::ani::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ani = File::open("busy.ani")?;
/// let timeline = ani.timeline()?;
///
/// println!("{} images, {} steps", ani.image_count(), timeline.len());
/// println!("loop length: {} ms", timeline.total_duration_ms());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	data: Vec<u8>,
	index: ChunkIndex,
	header: Header,
	metadata: Metadata,
}

impl File {
	/// Parses a container, taking ownership of the buffer.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is not a RIFF container, or if the
	/// `anih` chunk is missing or too short.
	pub fn from_vec(data: Vec<u8>) -> Result<Self, AniError> {
		let index = ChunkIndex::build(&data)?;
		let anih = index.find(constants::ANIH).ok_or(AniError::MissingChunk(constants::ANIH))?;
		let header = Header::from_bytes(anih.data(&data))?;
		let metadata = Metadata::from_index(&data, &index);

		debug!("Parsed {header}");

		Ok(Self {
			data,
			index,
			header,
			metadata,
		})
	}

	/// Parses a container from a byte slice.
	///
	/// # Errors
	///
	/// See [`File::from_vec`].
	pub fn from_bytes(data: &[u8]) -> Result<Self, AniError> {
		Self::from_vec(data.to_vec())
	}

	/// Reads and parses a container from disk.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or fails to parse.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AniError> {
		let data = std::fs::read(path)?;
		Self::from_vec(data)
	}

	/// Raw container bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// Chunk index of the container.
	pub fn chunk_index(&self) -> &ChunkIndex {
		&self.index
	}

	/// `anih` header fields.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// `INFO` metadata, empty when the container carries none.
	pub fn metadata(&self) -> &Metadata {
		&self.metadata
	}

	/// Number of images in the image list.
	pub fn image_count(&self) -> usize {
		self.index.frames().len()
	}

	/// Payload of image `index`: a standalone single-frame icon or cursor file.
	pub fn image_data(&self, index: usize) -> Option<&[u8]> {
		self.index.frames().get(index).map(|chunk| chunk.data(&self.data))
	}

	/// Resolves the play order and frame durations.
	///
	/// # Errors
	///
	/// Returns [`AniError::FieldOutOfRange`] if the container has no usable
	/// `seq ` table and the header declares more frames than the image list
	/// holds, and [`AniError::MissingImage`] if a play-order entry references
	/// an image that does not exist.
	pub fn timeline(&self) -> Result<Timeline, AniError> {
		let sequence = timeline::sequence_table(&self.data, &self.index, &self.header);
		let available = self.image_count();

		if sequence.is_none() && self.header.frame_count as usize > available {
			return Err(AniError::FieldOutOfRange {
				field: "frame_count",
				value: self.header.frame_count,
				limit: available,
			});
		}

		let timeline = Timeline::resolve_with(&self.data, &self.index, &self.header, sequence);

		if let Some((position, entry)) = timeline
			.entries()
			.iter()
			.enumerate()
			.find(|(_, entry)| entry.frame_index as usize >= available)
		{
			return Err(AniError::MissingImage {
				position,
				image_index: entry.frame_index,
				available,
			});
		}

		Ok(timeline)
	}
}

impl TryFrom<Vec<u8>> for File {
	type Error = AniError;

	fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
		Self::from_vec(value)
	}
}

impl TryFrom<&[u8]> for File {
	type Error = AniError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}
