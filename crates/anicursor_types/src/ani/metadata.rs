//! Optional `LIST`/`INFO` metadata.

use encoding_rs::WINDOWS_1252;

use super::{chunk::ChunkIndex, constants};

/// Title and author strings carried by some cursors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
	/// `INAM` entry
	pub title: Option<String>,
	/// `IART` entry
	pub author: Option<String>,
}

impl Metadata {
	/// Reads the `INFO` entries recorded in `index`.
	///
	/// Strings are NUL-terminated and ANSI encoded; anything after the first
	/// NUL is ignored.
	pub fn from_index(buffer: &[u8], index: &ChunkIndex) -> Self {
		let mut metadata = Self::default();
		for chunk in index.info() {
			let text = decode_zstr(chunk.data(buffer));
			match chunk.id {
				constants::INAM => metadata.title = Some(text),
				constants::IART => metadata.author = Some(text),
				_ => {}
			}
		}
		metadata
	}

	/// Returns `true` if neither title nor author is present.
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.author.is_none()
	}
}

fn decode_zstr(data: &[u8]) -> String {
	let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
	let (text, _, _) = WINDOWS_1252.decode(&data[..end]);
	text.into_owned()
}
