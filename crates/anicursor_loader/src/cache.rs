//! Idempotent cursor loading.
//!
//! [`CursorCache`] runs the fetch, parse and build pipeline once per derived
//! style scope id and hands out the shared result afterwards. Concurrent
//! loads of the same source share one pipeline. A failed pipeline stores
//! nothing, so the next load retries it.

use std::{collections::HashMap, sync::Arc};

use anicursor_types::{ani::File, css};
use log::{debug, info};
use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::{
	builder::build_descriptor,
	descriptor::AnimationDescriptor,
	error::LoadError,
	fetch::Fetcher,
	image::{FrameResizer, IconResizer},
	options::LoadOptions,
	style::{self, StyleSink},
};

type Slot = Arc<OnceCell<Arc<AnimationDescriptor>>>;

/// Cache of built cursor animations keyed by style scope id.
///
/// The key is derived from the source URL alone: a second load of the same
/// URL returns the first result even if its options differ. Entries live
/// until they are evicted; evicting drops the cache's reference to the
/// descriptor and, with the last reference, its frame images.
///
/// # Examples
///
/// ```no_run
/// use anicursor_loader::{CursorCache, FileFetcher, LoadOptions};
///
/// # async fn run() -> Result<(), anicursor_loader::LoadError> {
/// let cache = CursorCache::new(FileFetcher::with_root("assets/cursors"));
/// let busy = cache.load("busy.ani", &LoadOptions::default()).await?;
///
/// println!("{}", busy.class_stylesheet());
/// # Ok(())
/// # }
/// ```
pub struct CursorCache<F, R = IconResizer> {
	fetcher: F,
	resizer: Arc<R>,
	slots: Mutex<HashMap<String, Slot>>,
}

impl<F: Fetcher> CursorCache<F> {
	/// Creates an empty cache using the default icon resizer.
	pub fn new(fetcher: F) -> Self {
		Self::with_resizer(fetcher, IconResizer::default())
	}
}

impl<F: Fetcher, R: FrameResizer> CursorCache<F, R> {
	/// Creates an empty cache using `resizer` for frame images.
	pub fn with_resizer(fetcher: F, resizer: R) -> Self {
		Self {
			fetcher,
			resizer: Arc::new(resizer),
			slots: Mutex::new(HashMap::new()),
		}
	}

	/// The fetcher used for container bytes.
	pub fn fetcher(&self) -> &F {
		&self.fetcher
	}

	/// Loads the cursor at `url`, reusing an earlier result for the same
	/// style scope id.
	///
	/// # Errors
	///
	/// Returns [`LoadError::Fetch`] if the bytes cannot be fetched,
	/// [`LoadError::MalformedContainer`] if they are not a usable animated
	/// cursor, [`LoadError::FrameDecode`] if any frame fails to decode, and
	/// [`LoadError::InvalidOptions`] for unusable options.
	pub async fn load(&self, url: &str, options: &LoadOptions) -> Result<Arc<AnimationDescriptor>, LoadError> {
		options.validate()?;

		let key = css::style_scope_id(url);
		let slot = Arc::clone(self.slots.lock().entry(key.clone()).or_default());

		if let Some(descriptor) = slot.get() {
			debug!("Cache hit for '{key}'");
			return Ok(Arc::clone(descriptor));
		}

		match slot.get_or_try_init(|| self.build(url, options)).await {
			Ok(descriptor) => Ok(Arc::clone(descriptor)),
			Err(err) => {
				self.release_failed(&key, &slot);
				Err(err)
			}
		}
	}

	/// Drops the empty slot left by a failed build, unless it was replaced
	/// or filled by another caller in the meantime.
	fn release_failed(&self, key: &str, slot: &Slot) {
		let mut slots = self.slots.lock();
		if slots.get(key).is_some_and(|stored| Arc::ptr_eq(stored, slot) && !stored.initialized()) {
			slots.remove(key);
			debug!("Released failed slot for '{key}'");
		}
	}

	async fn build(&self, url: &str, options: &LoadOptions) -> Result<Arc<AnimationDescriptor>, LoadError> {
		debug!("Fetching '{url}'");
		let data = self.fetcher.fetch(url).await.map_err(|source| LoadError::Fetch {
			url: url.to_string(),
			source,
		})?;

		let ani = File::from_vec(data)?;
		let descriptor = build_descriptor(&ani, url, options, Arc::clone(&self.resizer)).await?;

		info!(
			"Loaded '{url}': {} steps, {} images, {} ms loop",
			descriptor.frames().len(),
			descriptor.images().len(),
			descriptor.total_duration_ms()
		);
		Ok(Arc::new(descriptor))
	}

	/// Loads `url` and binds it to `selector` through `sink`.
	///
	/// # Errors
	///
	/// See [`CursorCache::load`]. Nothing is injected on failure.
	pub async fn set_cursor<S: StyleSink + ?Sized>(
		&self,
		sink: &S,
		selector: &str,
		url: &str,
		options: &LoadOptions,
	) -> Result<Arc<AnimationDescriptor>, LoadError> {
		self.set_cursor_group(sink, &[selector], url, options).await
	}

	/// Loads `url` and binds it to every selector in `selectors` through `sink`.
	///
	/// # Errors
	///
	/// See [`CursorCache::load`]. Nothing is injected on failure.
	pub async fn set_cursor_group<S: StyleSink + ?Sized>(
		&self,
		sink: &S,
		selectors: &[&str],
		url: &str,
		options: &LoadOptions,
	) -> Result<Arc<AnimationDescriptor>, LoadError> {
		let descriptor = self.load(url, options).await?;
		style::attach_to_selectors(sink, selectors, &descriptor);
		Ok(descriptor)
	}

	/// Built descriptor stored under `scope_id`, if any.
	pub fn get(&self, scope_id: &str) -> Option<Arc<AnimationDescriptor>> {
		self.slots.lock().get(scope_id).and_then(|slot| slot.get().cloned())
	}

	/// Returns `true` if a built descriptor is stored under `scope_id`.
	pub fn contains(&self, scope_id: &str) -> bool {
		self.get(scope_id).is_some()
	}

	/// Number of built descriptors.
	pub fn len(&self) -> usize {
		self.slots.lock().values().filter(|slot| slot.initialized()).count()
	}

	/// Returns `true` if no descriptor has been built.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// All built descriptors.
	pub fn descriptors(&self) -> Vec<Arc<AnimationDescriptor>> {
		self.slots.lock().values().filter_map(|slot| slot.get().cloned()).collect()
	}

	/// Removes the entry for `scope_id` and returns its descriptor.
	///
	/// A load of the same source still in flight completes for its callers
	/// but is not stored.
	pub fn evict(&self, scope_id: &str) -> Option<Arc<AnimationDescriptor>> {
		let evicted = self.slots.lock().remove(scope_id)?.get().cloned();
		if evicted.is_some() {
			info!("Evicted '{scope_id}'");
		}
		evicted
	}

	/// Removes every entry, returning how many built descriptors were released.
	pub fn clear(&self) -> usize {
		let released =
			self.slots.lock().drain().filter(|(_, slot)| slot.initialized()).count();
		info!("Released {released} cached cursors");
		released
	}
}
