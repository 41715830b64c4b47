//! Frame images: decoding, resizing and embeddable references.

use std::{fmt, io::Cursor, sync::Arc};

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage, imageops::FilterType};
use log::debug;

use crate::{error::FrameError, options::RenderSize};

/// MIME type of PNG encoded frames
pub const PNG_MIME: &str = "image/png";

/// Opaque handle to an encoded frame image.
///
/// Cloning is cheap; the encoded bytes are shared. The bytes are released
/// when the last descriptor holding them is dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageReference {
	mime: &'static str,
	bytes: Arc<[u8]>,
}

impl ImageReference {
	/// Wraps already encoded image bytes.
	pub fn new(mime: &'static str, bytes: impl Into<Arc<[u8]>>) -> Self {
		Self {
			mime,
			bytes: bytes.into(),
		}
	}

	/// Wraps PNG encoded bytes.
	pub fn png(bytes: impl Into<Arc<[u8]>>) -> Self {
		Self::new(PNG_MIME, bytes)
	}

	/// MIME type of the encoded bytes.
	pub fn mime_type(&self) -> &'static str {
		self.mime
	}

	/// Encoded bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Reference usable inside a stylesheet `url(...)`: a base64 `data:` URI.
	///
	/// ```
	/// use anicursor_loader::ImageReference;
	///
	/// let image = ImageReference::png(vec![1u8, 2, 3]);
	/// assert_eq!(image.to_embeddable(), "data:image/png;base64,AQID");
	/// ```
	pub fn to_embeddable(&self) -> String {
		format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
	}
}

impl fmt::Debug for ImageReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ImageReference")
			.field("mime", &self.mime)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// A resized image tagged with its position in the image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedFrameImage {
	/// Image-list index
	pub index: u32,
	/// Resized, re-encoded image
	pub image: ImageReference,
}

/// Turns one embedded icon payload into an image of the requested size.
///
/// Implementations run on the blocking thread pool, one call per image, and
/// may be called concurrently.
pub trait FrameResizer: Send + Sync + 'static {
	/// Decodes `icon` (image-list entry `index`) and renders it at `size`.
	///
	/// # Errors
	///
	/// Returns a [`FrameError`] if the payload cannot be decoded or re-encoded.
	fn resize(&self, index: u32, icon: &[u8], size: RenderSize) -> Result<ImageReference, FrameError>;
}

/// Default resizer: ICO/CUR in, PNG out.
///
/// Picks the largest image of the icon directory, scales it to the target
/// size and encodes the result as PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconResizer {
	filter: FilterType,
}

impl Default for IconResizer {
	fn default() -> Self {
		Self {
			filter: FilterType::Triangle,
		}
	}
}

impl IconResizer {
	/// Creates a resizer using bilinear filtering.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a resizer using `filter`.
	pub fn with_filter(filter: FilterType) -> Self {
		Self {
			filter,
		}
	}

	/// Decodes the largest image of an icon or cursor file to RGBA.
	///
	/// # Errors
	///
	/// Returns an error if the payload is not a readable icon file or holds no images.
	pub fn decode(icon: &[u8]) -> Result<RgbaImage, FrameError> {
		let directory = ico::IconDir::read(Cursor::new(icon)).map_err(FrameError::Decode)?;
		let entry = directory
			.entries()
			.iter()
			.max_by_key(|entry| (entry.width() * entry.height(), entry.bits_per_pixel()))
			.ok_or(FrameError::Empty)?;
		let decoded = entry.decode().map_err(FrameError::Decode)?;

		let (width, height) = (decoded.width(), decoded.height());
		RgbaImage::from_raw(width, height, decoded.rgba_data().to_vec()).ok_or(FrameError::PixelBuffer {
			width,
			height,
		})
	}
}

impl FrameResizer for IconResizer {
	fn resize(&self, index: u32, icon: &[u8], size: RenderSize) -> Result<ImageReference, FrameError> {
		let source = Self::decode(icon)?;
		debug!(
			"Image {index}: {}x{} -> {}x{}",
			source.width(),
			source.height(),
			size.width,
			size.height
		);

		let resized = if source.dimensions() == (size.width, size.height) {
			source
		} else {
			image::imageops::resize(&source, size.width, size.height, self.filter)
		};

		let mut encoded = Cursor::new(Vec::new());
		resized.write_to(&mut encoded, ImageFormat::Png)?;
		Ok(ImageReference::png(encoded.into_inner()))
	}
}
