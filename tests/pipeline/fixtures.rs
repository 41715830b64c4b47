//! Cursor files assembled from real icon payloads.

use anicursor_types::ani::fixture::ContainerBuilder;

/// Encodes a single-entry cursor resource filled with `rgba`.
pub(crate) fn cursor_icon(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
	let pixels = rgba.repeat((width * height) as usize);
	let mut image = ico::IconImage::from_rgba_data(width, height, pixels);
	image.set_cursor_hotspot(Some((0, 0)));

	let mut directory = ico::IconDir::new(ico::ResourceType::Cursor);
	directory.add_entry(ico::IconDirEntry::encode(&image).unwrap());

	let mut out = Vec::new();
	directory.write(&mut out).unwrap();
	out
}

/// Two 16x16 frames at the 6-jiffy default rate (100 ms each).
pub(crate) fn two_frame_cursor() -> Vec<u8> {
	ContainerBuilder::new(6)
		.image(cursor_icon(16, 16, [255, 0, 0, 255]))
		.image(cursor_icon(16, 16, [0, 0, 255, 255]))
		.info("Busy", "Nobody")
		.build()
}

/// Ping-pong over three frames with per-step rates.
pub(crate) fn sequenced_cursor() -> Vec<u8> {
	ContainerBuilder::new(6)
		.image(cursor_icon(32, 32, [0, 0, 0, 255]))
		.image(cursor_icon(32, 32, [128, 128, 128, 255]))
		.image(cursor_icon(32, 32, [255, 255, 255, 255]))
		.sequence(vec![0, 1, 2, 1])
		.rate(vec![3, 6, 12, 6])
		.build()
}
