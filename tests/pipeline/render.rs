//! Descriptor contents for real cursor files.

use std::sync::Arc;

use anicursor_rs::prelude::*;

use crate::fixtures::{sequenced_cursor, two_frame_cursor};

fn percentages(keyframes: &str) -> Vec<String> {
	keyframes
		.split('\n')
		.filter_map(|line| line.split_once("% {").map(|(head, _)| head.rsplit(' ').next().unwrap_or(head).to_string()))
		.collect()
}

#[test_log::test(tokio::test)]
async fn test_two_frame_cursor() {
	let fetcher = Arc::new(MemoryFetcher::new());
	fetcher.insert("/cursors/busy.ani", two_frame_cursor());
	let cache = CursorCache::new(Arc::clone(&fetcher));

	let d = cache.load("/cursors/busy.ani", &LoadOptions::default()).await.unwrap();

	assert_eq!(d.style_scope_id(), "cursor-animation--cursors-busy-ani");
	assert_eq!(d.animation_name(), "cursor-animation--cursors-busy-ani-keyframes");
	assert_eq!(d.total_duration_ms(), 200.0);
	assert_eq!(d.keyframe_offsets(), vec![0.0, 50.0]);
	assert_eq!(percentages(d.keyframe_rules()), vec!["0", "50"]);
	assert!(d.keyframe_rules().starts_with("@keyframes cursor-animation--cursors-busy-ani-keyframes { "));
	assert_eq!(d.keyframe_rules().matches("url(data:image/png;base64,").count(), 2);
	assert_eq!(d.keyframe_rules().matches(",auto;}").count(), 2);
	assert_eq!(
		d.class_rule(),
		".cursor-animation--cursors-busy-ani { animation: cursor-animation--cursors-busy-ani-keyframes 200ms step-end infinite; }"
	);
}

#[test_log::test(tokio::test)]
async fn test_frames_are_resized_to_options() {
	let fetcher = MemoryFetcher::new();
	fetcher.insert("busy.ani", two_frame_cursor());
	let cache = CursorCache::new(fetcher);

	let d = cache.load("busy.ani", &LoadOptions::new().with_size(48, 24)).await.unwrap();

	assert_eq!(d.images().len(), 2);
	for (position, frame) in d.images().iter().enumerate() {
		assert_eq!(frame.index as usize, position);
		assert_eq!(frame.image.mime_type(), "image/png");

		let decoded = image::load_from_memory(frame.image.bytes()).unwrap();
		assert_eq!((decoded.width(), decoded.height()), (48, 24));
	}
}

#[test_log::test(tokio::test)]
async fn test_sequenced_cursor_reuses_images() {
	let fetcher = MemoryFetcher::new();
	fetcher.insert("pingpong.ani", sequenced_cursor());
	let cache = CursorCache::new(fetcher);

	let d = cache.load("pingpong.ani", &LoadOptions::new().with_fallback("progress")).await.unwrap();

	assert_eq!(d.timeline().play_order(), PlayOrder::Sequence);
	assert_eq!(d.timeline().duration_source(), DurationSource::RateTable);
	assert_eq!(d.frames().iter().map(|f| f.frame_index).collect::<Vec<_>>(), vec![0, 1, 2, 1]);
	assert_eq!(d.total_duration_ms(), 450.0);
	assert_eq!(d.keyframe_offsets(), vec![0.0, 50.0 / 450.0 * 100.0, 150.0 / 450.0 * 100.0, 350.0 / 450.0 * 100.0]);
	assert_eq!(d.images().len(), 3);

	// Steps showing the same image carry the same url
	let lines: Vec<&str> = d.keyframe_rules().split('\n').filter(|l| l.contains("cursor:")).collect();
	assert_eq!(lines.len(), 4);
	let url = |line: &str| line.split("url(").nth(1).and_then(|rest| rest.split(')').next()).unwrap().to_string();
	assert_eq!(url(lines[1]), url(lines[3]));
	assert_ne!(url(lines[0]), url(lines[1]));
	assert!(lines.iter().all(|l| l.ends_with(",progress;}")));
}

#[test]
fn test_metadata_survives_parse() {
	let ani = AniFile::from_vec(two_frame_cursor()).unwrap();
	assert_eq!(ani.metadata().title.as_deref(), Some("Busy"));
	assert_eq!(ani.metadata().author.as_deref(), Some("Nobody"));
	assert!(ani.header().is_icon());
}
