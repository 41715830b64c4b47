//! Built cursor animations.

use anicursor_types::{
	ani::{FrameEntry, Timeline},
	css,
};

use crate::image::{ImageReference, ResizedFrameImage};

/// A fully built cursor animation.
///
/// Holds the rendered `@keyframes` rule, the identifiers derived from the
/// source, the total loop length and the frame images the rule embeds.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDescriptor {
	keyframe_rules: String,
	animation_name: String,
	style_scope_id: String,
	total_duration_ms: f64,
	timeline: Timeline,
	images: Vec<ResizedFrameImage>,
}

impl AnimationDescriptor {
	/// Assembles a descriptor from a resolved timeline and its resized images.
	///
	/// `images` may arrive in any order; they are sorted by image-list index
	/// before use. Entries whose image is absent render an empty `url()`.
	pub fn assemble(
		source: &str,
		cursor_fallback: &str,
		timeline: Timeline,
		mut images: Vec<ResizedFrameImage>,
	) -> Self {
		images.sort_by_key(|image| image.index);

		let style_scope_id = css::style_scope_id(source);
		let animation_name = css::animation_name(&style_scope_id);

		let urls: Vec<(u32, String)> =
			images.iter().map(|image| (image.index, image.image.to_embeddable())).collect();
		let keyframe_rules =
			css::render_keyframes(&animation_name, &timeline, cursor_fallback, |index| {
				urls.binary_search_by_key(&index, |(i, _)| *i)
					.map_or("", |found| urls[found].1.as_str())
			});

		Self {
			keyframe_rules,
			animation_name,
			style_scope_id,
			total_duration_ms: timeline.total_duration_ms(),
			timeline,
			images,
		}
	}

	/// The `@keyframes` rule.
	pub fn keyframe_rules(&self) -> &str {
		&self.keyframe_rules
	}

	/// Name of the `@keyframes` rule.
	pub fn animation_name(&self) -> &str {
		&self.animation_name
	}

	/// Class name scoping this animation; also its cache key.
	pub fn style_scope_id(&self) -> &str {
		&self.style_scope_id
	}

	/// Sum of all frame durations in milliseconds.
	pub fn total_duration_ms(&self) -> f64 {
		self.total_duration_ms
	}

	/// Play-order entries.
	pub fn frames(&self) -> &[FrameEntry] {
		self.timeline.entries()
	}

	/// Resolved timeline.
	pub fn timeline(&self) -> &Timeline {
		&self.timeline
	}

	/// Resized images, sorted by image-list index.
	pub fn images(&self) -> &[ResizedFrameImage] {
		&self.images
	}

	/// Resized image for image-list entry `index`.
	pub fn image(&self, index: u32) -> Option<&ImageReference> {
		self.images
			.binary_search_by_key(&index, |image| image.index)
			.ok()
			.map(|found| &self.images[found].image)
	}

	/// Keyframe offsets in percent, one per play-order entry.
	pub fn keyframe_offsets(&self) -> Vec<f64> {
		self.timeline.keyframe_offsets()
	}

	/// Returns `true` if the animation never advances; consumers should
	/// show it as a static cursor.
	pub fn is_static(&self) -> bool {
		self.total_duration_ms <= 0.0
	}

	/// Rule binding `selector` to this animation.
	pub fn selector_rule(&self, selector: &str) -> String {
		css::animation_rule(selector, &self.animation_name, self.total_duration_ms)
	}

	/// Rule binding the scope class to this animation.
	pub fn class_rule(&self) -> String {
		self.selector_rule(&css::class_selector(&self.style_scope_id))
	}

	/// Keyframes plus rules for the selector group and the scope class.
	pub fn selector_stylesheet(&self, selectors: &[&str]) -> String {
		format!(
			"{}\n{}\n{}",
			self.keyframe_rules,
			self.selector_rule(&selectors.join(",")),
			self.class_rule()
		)
	}

	/// Keyframes plus the scope class rule only.
	pub fn class_stylesheet(&self) -> String {
		format!("{}\n{}", self.keyframe_rules, self.class_rule())
	}
}
