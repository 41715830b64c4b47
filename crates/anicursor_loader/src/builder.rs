//! Animation assembly from a parsed container.
//!
//! The only concurrent stage is the frame resize: one blocking task per
//! distinct image referenced by the play order is started up front and the
//! set is joined before anything else happens, so the slowest frame bounds
//! the whole build. Results come back in completion order and are sorted by
//! image-list index before the keyframes are rendered.

use std::{
	panic::{self, AssertUnwindSafe},
	sync::Arc,
};

use anicursor_types::ani::File;
use log::debug;
use tokio::task::JoinSet;

use crate::{
	descriptor::AnimationDescriptor,
	error::{FrameError, LoadError},
	image::{FrameResizer, ResizedFrameImage},
	options::{LoadOptions, RenderSize},
};

/// Builds the animation of a parsed container.
///
/// `source` only feeds the derived names; no I/O happens here.
///
/// # Errors
///
/// Returns [`LoadError::InvalidOptions`] for unusable options,
/// [`LoadError::MalformedContainer`] if the play order cannot be resolved
/// against the image list, and [`LoadError::FrameDecode`] if any single
/// frame fails to decode or resize.
pub async fn build_descriptor<R: FrameResizer>(
	ani: &File,
	source: &str,
	options: &LoadOptions,
	resizer: Arc<R>,
) -> Result<AnimationDescriptor, LoadError> {
	options.validate()?;

	let timeline = ani.timeline()?;
	let images = resize_frames(ani, &timeline.image_indices(), options.render_size(), resizer).await?;

	Ok(AnimationDescriptor::assemble(source, &options.cursor_fallback, timeline, images))
}

/// Resizes image-list entries `indices` concurrently.
///
/// The returned images are sorted by index regardless of the order in which
/// the tasks finished. The first failure aborts the build; tasks that have
/// not started yet are cancelled.
///
/// # Errors
///
/// Returns [`LoadError::FrameDecode`] naming the first failing image.
pub async fn resize_frames<R: FrameResizer>(
	ani: &File,
	indices: &[u32],
	size: RenderSize,
	resizer: Arc<R>,
) -> Result<Vec<ResizedFrameImage>, LoadError> {
	let mut tasks = JoinSet::new();

	for &index in indices {
		let icon = ani
			.image_data(index as usize)
			.ok_or(LoadError::FrameDecode {
				index,
				source: FrameError::Missing,
			})?
			.to_vec();
		let resizer = Arc::clone(&resizer);

		tasks.spawn_blocking(move || {
			let result = panic::catch_unwind(AssertUnwindSafe(|| resizer.resize(index, &icon, size)))
				.unwrap_or_else(|payload| Err(FrameError::Panicked(panic_message(payload.as_ref()))));
			(index, result)
		});
	}

	debug!("Resizing {} images to {}x{}", indices.len(), size.width, size.height);

	let mut images = Vec::with_capacity(indices.len());
	while let Some(joined) = tasks.join_next().await {
		let (index, result) = joined?;
		let image = result.map_err(|source| LoadError::FrameDecode {
			index,
			source,
		})?;
		images.push(ResizedFrameImage {
			index,
			image,
		});
	}

	images.sort_by_key(|image| image.index);
	Ok(images)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		(*message).to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown panic".to_string()
	}
}
