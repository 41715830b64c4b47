//! Container synthesis for tests and benchmarks.
//!
//! [`ContainerBuilder`] writes the minimal RIFF layout the parser reads. It
//! performs no validation, so it can also produce deliberately broken
//! containers (short tables, missing header, odd-sized chunks).

use super::{FourCC, constants, header::Header};

/// Writes animated cursor containers.
///
/// # Examples
///
/// ```
/// use anicursor_types::ani::{File, fixture::ContainerBuilder};
///
/// let data = ContainerBuilder::new(6)
///     .image(vec![0u8; 4])
///     .image(vec![1u8; 4])
///     .build();
///
/// let ani = File::from_vec(data).unwrap();
/// assert_eq!(ani.header().frame_count, 2);
/// assert_eq!(ani.image_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContainerBuilder {
	header: Header,
	frame_count: Option<u32>,
	step_count: Option<u32>,
	omit_header: bool,
	rate: Option<Vec<u32>>,
	seq: Option<Vec<u32>>,
	images: Vec<Vec<u8>>,
	title: Option<String>,
	author: Option<String>,
	extra: Vec<(FourCC, Vec<u8>)>,
}

impl ContainerBuilder {
	/// Creates a builder with the given default rate in jiffies.
	pub fn new(default_jiffies: u32) -> Self {
		Self {
			header: Header {
				header_size: constants::ANIH_SIZE as u32,
				default_jiffies,
				flags: constants::AF_ICON,
				..Header::default()
			},
			..Self::default()
		}
	}

	/// Appends an image payload to the `fram` list.
	pub fn image(mut self, data: Vec<u8>) -> Self {
		self.images.push(data);
		self
	}

	/// Overrides the header frame count (defaults to the number of images).
	pub fn frame_count(mut self, count: u32) -> Self {
		self.frame_count = Some(count);
		self
	}

	/// Overrides the header step count (defaults to the `seq ` length, or the frame count).
	pub fn step_count(mut self, count: u32) -> Self {
		self.step_count = Some(count);
		self
	}

	/// Writes a `rate` chunk.
	pub fn rate(mut self, jiffies: Vec<u32>) -> Self {
		self.rate = Some(jiffies);
		self
	}

	/// Writes a `seq ` chunk and sets `AF_SEQUENCE`.
	pub fn sequence(mut self, indices: Vec<u32>) -> Self {
		self.header.flags |= constants::AF_SEQUENCE;
		self.seq = Some(indices);
		self
	}

	/// Writes a `LIST`/`INFO` chunk with a title and author.
	pub fn info(mut self, title: &str, author: &str) -> Self {
		self.title = Some(title.to_string());
		self.author = Some(author.to_string());
		self
	}

	/// Leaves out the `anih` chunk.
	pub fn without_header(mut self) -> Self {
		self.omit_header = true;
		self
	}

	/// Appends an arbitrary top-level chunk after the standard ones.
	pub fn raw_chunk(mut self, id: FourCC, data: Vec<u8>) -> Self {
		self.extra.push((id, data));
		self
	}

	/// Serializes the container.
	pub fn build(&self) -> Vec<u8> {
		let mut body = Vec::new();
		body.extend_from_slice(constants::ACON.as_bytes());

		if let (Some(title), Some(author)) = (&self.title, &self.author) {
			let mut info = constants::INFO.as_bytes().to_vec();
			info.extend(chunk(constants::INAM, &zstr(title)));
			info.extend(chunk(constants::IART, &zstr(author)));
			body.extend(chunk(constants::LIST, &info));
		}

		if !self.omit_header {
			let frame_count = self.frame_count.unwrap_or(self.images.len() as u32);
			let step_count = self
				.step_count
				.or_else(|| self.seq.as_ref().map(|s| s.len() as u32))
				.unwrap_or(frame_count);
			let header = Header {
				frame_count,
				step_count,
				..self.header
			};
			body.extend(chunk(constants::ANIH, &header.to_bytes()));
		}

		if let Some(rate) = &self.rate {
			body.extend(chunk(constants::RATE, &words(rate)));
		}
		if let Some(seq) = &self.seq {
			body.extend(chunk(constants::SEQ, &words(seq)));
		}

		let mut fram = constants::FRAM.as_bytes().to_vec();
		for image in &self.images {
			fram.extend(chunk(constants::ICON, image));
		}
		body.extend(chunk(constants::LIST, &fram));

		for (id, data) in &self.extra {
			body.extend(chunk(*id, data));
		}

		let mut out = constants::RIFF.as_bytes().to_vec();
		out.extend_from_slice(&(body.len() as u32).to_le_bytes());
		out.extend(body);
		out
	}
}

/// Serializes one chunk, padding odd payloads to a word boundary.
pub fn chunk(id: FourCC, data: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(data.len() + 9);
	out.extend_from_slice(id.as_bytes());
	out.extend_from_slice(&(data.len() as u32).to_le_bytes());
	out.extend_from_slice(data);
	if data.len() % 2 == 1 {
		out.push(0);
	}
	out
}

fn words(values: &[u32]) -> Vec<u8> {
	values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn zstr(text: &str) -> Vec<u8> {
	let mut bytes = text.as_bytes().to_vec();
	bytes.push(0);
	bytes
}
