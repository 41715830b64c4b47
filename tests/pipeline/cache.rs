//! Loading through the cache with real fetchers.

use std::sync::Arc;

use anicursor_rs::prelude::*;

use crate::fixtures::two_frame_cursor;

#[test_log::test(tokio::test)]
async fn test_same_url_is_built_once() {
	let fetcher = Arc::new(MemoryFetcher::new());
	fetcher.insert("busy.ani", two_frame_cursor());
	let cache = CursorCache::new(Arc::clone(&fetcher));
	let options = LoadOptions::default();

	let (a, b) = futures::join!(cache.load("busy.ani", &options), cache.load("busy.ani", &options));
	let c = cache.load("busy.ani", &LoadOptions::new().with_size(64, 64)).await.unwrap();

	let a = a.unwrap();
	assert!(Arc::ptr_eq(&a, &b.unwrap()));
	assert!(Arc::ptr_eq(&a, &c));
	assert_eq!(fetcher.fetch_count(), 1);
	assert_eq!(cache.len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_file_fetcher() {
	let root = std::env::temp_dir().join(format!("anicursor-pipeline-{}", std::process::id()));
	std::fs::create_dir_all(&root).unwrap();
	std::fs::write(root.join("busy.ani"), two_frame_cursor()).unwrap();

	let cache = CursorCache::new(FileFetcher::with_root(&root));
	let d = cache.load("busy.ani", &LoadOptions::default()).await.unwrap();
	assert_eq!(d.frames().len(), 2);

	let err = cache.load("missing.ani", &LoadOptions::default()).await.unwrap_err();
	assert!(err.is_fetch());
	assert!(matches!(
		err,
		LoadError::Fetch {
			source: FetchError::NotFound,
			..
		}
	));

	std::fs::remove_dir_all(&root).unwrap();
}

#[test_log::test(tokio::test)]
async fn test_set_cursor_and_evict() {
	let fetcher = MemoryFetcher::new();
	fetcher.insert("busy.ani", two_frame_cursor());
	let cache = CursorCache::new(fetcher);
	let sheet = MemoryStyleSheet::new();

	let d = cache.set_cursor(&sheet, "body", "busy.ani", &LoadOptions::new().with_fallback("wait")).await.unwrap();
	let class = attach_default(&sheet, &d);

	assert_eq!(class, "cursor-animation-busy-ani");
	let css = sheet.contents();
	assert!(css.contains("body { animation: cursor-animation-busy-ani-keyframes 200ms step-end infinite; }"));
	assert!(css.contains(",wait;}"));
	assert_eq!(sheet.blocks().len(), 2);

	assert!(cache.evict(&class).is_some());
	assert!(cache.is_empty());
	// Outstanding handles keep their images
	assert_eq!(d.images().len(), 2);
}

#[test_log::test(tokio::test)]
async fn test_broken_frame_fails_whole_load() {
	use anicursor_types::ani::fixture::ContainerBuilder;

	let fetcher = MemoryFetcher::new();
	fetcher.insert(
		"broken.ani",
		ContainerBuilder::new(6).image(crate::fixtures::cursor_icon(8, 8, [1, 2, 3, 4])).image(vec![0xde, 0xad]).build(),
	);
	let cache = CursorCache::new(fetcher);

	let err = cache.load("broken.ani", &LoadOptions::default()).await.unwrap_err();
	assert!(matches!(
		err,
		LoadError::FrameDecode {
			index: 1,
			..
		}
	));
	assert!(cache.is_empty());
}
