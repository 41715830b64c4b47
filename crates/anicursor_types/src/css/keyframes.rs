//! `@keyframes` and `animation` rule rendering.

use std::fmt::Display;

use crate::ani::Timeline;

/// Renders the `@keyframes` rule for `timeline`.
///
/// Each play-order entry becomes one step at its keyframe offset, setting
/// `cursor` to the image returned by `image_url` for the entry's image index
/// followed by the `fallback` keyword. An empty timeline renders an empty
/// rule body.
///
/// # Examples
///
/// ```
/// use anicursor_types::ani::{DurationSource, FrameEntry, PlayOrder, Timeline};
/// use anicursor_types::css::render_keyframes;
///
/// let timeline = Timeline::new(
///     vec![FrameEntry::new(0, 6), FrameEntry::new(1, 6)],
///     PlayOrder::Natural,
///     DurationSource::HeaderDefault,
/// );
/// let css = render_keyframes("spin", &timeline, "auto", |i| format!("f{i}.png"));
///
/// assert_eq!(
///     css,
///     "@keyframes spin { 0% { cursor: url(f0.png),auto;}\n50% { cursor: url(f1.png),auto;}\n }"
/// );
/// ```
pub fn render_keyframes<F, U>(name: &str, timeline: &Timeline, fallback: &str, mut image_url: F) -> String
where
	F: FnMut(u32) -> U,
	U: Display,
{
	let mut body = String::new();
	for (entry, offset) in timeline.entries().iter().zip(timeline.keyframe_offsets()) {
		body.push_str(&format!(
			"{offset}% {{ cursor: url({}),{fallback};}}\n",
			image_url(entry.frame_index)
		));
	}
	format!("@keyframes {name} {{ {body} }}")
}

/// Binds `selector` to the keyframes `name` as a stepped infinite loop of `total_ms`.
pub fn animation_rule(selector: &str, name: &str, total_ms: f64) -> String {
	format!("{selector} {{ animation: {name} {total_ms}ms step-end infinite; }}")
}

/// CSS class selector for `scope_id`.
pub fn class_selector(scope_id: &str) -> String {
	format!(".{scope_id}")
}
