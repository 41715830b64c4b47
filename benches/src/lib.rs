//! Benchmark helper utilities for anicursor-rs
//!
//! Synthetic containers are assembled with
//! [`ContainerBuilder`](anicursor_types::ani::fixture::ContainerBuilder), so
//! the suite needs no cursor files on disk.

use anicursor_types::ani::fixture::ContainerBuilder;

/// Encodes a single-entry cursor resource of `size` x `size` pixels.
pub fn generate_icon(size: u32) -> Vec<u8> {
	let pixels: Vec<u8> = (0..size * size).flat_map(|i| [(i % 256) as u8, 0x40, 0x80, 0xff]).collect();
	let image = ico::IconImage::from_rgba_data(size, size, pixels);

	let mut directory = ico::IconDir::new(ico::ResourceType::Cursor);
	directory.add_entry(ico::IconDirEntry::encode(&image).expect("encode icon entry"));

	let mut out = Vec::new();
	directory.write(&mut out).expect("write icon directory");
	out
}

/// Generates a sequenced cursor with `images` distinct frames played
/// forward then backward, each step at its own rate.
pub fn generate_cursor_data(images: u32, icon_size: u32) -> Vec<u8> {
	let mut builder = ContainerBuilder::new(4);
	for _ in 0..images {
		builder = builder.image(generate_icon(icon_size));
	}

	let sequence: Vec<u32> = (0..images).chain((1..images.saturating_sub(1)).rev()).collect();
	let rates = sequence.iter().map(|i| 2 + i % 5).collect();
	builder.sequence(sequence).rate(rates).build()
}

/// Common benchmark shapes: (distinct images, icon edge in pixels)
pub mod sizes {
	/// A single static frame
	pub const STATIC: (u32, u32) = (1, 32);
	/// Typical busy cursor
	pub const TYPICAL: (u32, u32) = (8, 32);
	/// Long, high resolution animation
	pub const LARGE: (u32, u32) = (60, 64);
}

#[cfg(test)]
mod tests {
	use anicursor_types::ani::File;

	use super::*;

	#[test]
	fn test_generate_cursor_data() {
		let (images, size) = sizes::TYPICAL;
		let ani = File::from_vec(generate_cursor_data(images, size)).unwrap();

		assert_eq!(ani.image_count(), 8);
		assert_eq!(ani.timeline().unwrap().len(), 14);
	}

	#[test]
	fn test_generate_icon() {
		let icon = generate_icon(16);
		let directory = ico::IconDir::read(std::io::Cursor::new(&icon)).unwrap();

		assert_eq!(directory.resource_type(), ico::ResourceType::Cursor);
		assert_eq!(directory.entries().len(), 1);
		assert_eq!(directory.entries()[0].width(), 16);
	}

	#[test]
	fn test_static_shape() {
		let ani = File::from_vec(generate_cursor_data(1, 16)).unwrap();
		assert_eq!(ani.timeline().unwrap().len(), 1);
	}
}
