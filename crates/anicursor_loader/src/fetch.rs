//! Container byte sources.
//!
//! The pipeline only needs "bytes for this identifier". Network access is
//! left to the embedding application, which implements [`Fetcher`] over
//! whatever client it already uses; [`FileFetcher`] and [`MemoryFetcher`]
//! cover local files and pre-loaded data.

use std::{
	collections::HashMap,
	future::Future,
	io,
	path::PathBuf,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
};

use log::debug;
use parking_lot::RwLock;

use crate::error::FetchError;

/// Resolves a source identifier to container bytes.
pub trait Fetcher: Send + Sync + 'static {
	/// Fetches the complete body stored under `url`.
	fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
	fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send {
		(**self).fetch(url)
	}
}

/// Reads containers from the local file system.
///
/// Accepts plain paths and `file://` URLs. Relative paths are resolved
/// against the optional root directory.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
	root: Option<PathBuf>,
}

impl FileFetcher {
	/// Creates a fetcher resolving relative paths against the working directory.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a fetcher resolving relative paths against `root`.
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self {
			root: Some(root.into()),
		}
	}

	/// Maps a source identifier to a file path.
	pub fn resolve(&self, url: &str) -> PathBuf {
		let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
		match &self.root {
			Some(root) if path.is_relative() => root.join(path),
			_ => path,
		}
	}
}

impl Fetcher for FileFetcher {
	async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
		let path = self.resolve(url);
		debug!("Reading {}", path.display());
		tokio::fs::read(&path).await.map_err(|err| match err.kind() {
			io::ErrorKind::NotFound => FetchError::NotFound,
			_ => FetchError::Io(err),
		})
	}
}

#[derive(Debug, Clone)]
enum Stored {
	Body(Arc<[u8]>),
	Status(u16),
}

/// Serves containers from memory.
///
/// Counts every fetch, which makes it convenient for observing cache
/// behaviour.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
	entries: RwLock<HashMap<String, Stored>>,
	fetches: AtomicUsize,
}

impl MemoryFetcher {
	/// Creates an empty fetcher.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `body` under `url`.
	pub fn insert(&self, url: impl Into<String>, body: impl Into<Arc<[u8]>>) {
		self.entries.write().insert(url.into(), Stored::Body(body.into()));
	}

	/// Makes fetches of `url` fail with `status`.
	pub fn insert_status(&self, url: impl Into<String>, status: u16) {
		self.entries.write().insert(url.into(), Stored::Status(status));
	}

	/// Number of fetches served or refused so far.
	pub fn fetch_count(&self) -> usize {
		self.fetches.load(Ordering::SeqCst)
	}
}

impl Fetcher for MemoryFetcher {
	async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
		self.fetches.fetch_add(1, Ordering::SeqCst);
		let stored = self.entries.read().get(url).cloned();
		match stored {
			Some(Stored::Body(body)) => Ok(body.to_vec()),
			Some(Stored::Status(status)) => Err(FetchError::Status {
				status,
			}),
			None => Err(FetchError::NotFound),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_memory_fetcher() {
		let fetcher = MemoryFetcher::new();
		fetcher.insert("a.ani", vec![1u8, 2, 3]);
		fetcher.insert_status("gone.ani", 404);

		assert_eq!(fetcher.fetch("a.ani").await.unwrap(), vec![1, 2, 3]);
		assert!(matches!(
			fetcher.fetch("gone.ani").await,
			Err(FetchError::Status {
				status: 404
			})
		));
		assert!(matches!(fetcher.fetch("other.ani").await, Err(FetchError::NotFound)));
		assert_eq!(fetcher.fetch_count(), 3);
	}

	#[test]
	fn test_file_fetcher_resolve() {
		let fetcher = FileFetcher::with_root("/srv/cursors");
		assert_eq!(fetcher.resolve("busy.ani"), PathBuf::from("/srv/cursors/busy.ani"));
		assert_eq!(fetcher.resolve("file:///tmp/x.ani"), PathBuf::from("/tmp/x.ani"));
		assert_eq!(FileFetcher::new().resolve("rel/y.ani"), PathBuf::from("rel/y.ani"));
	}

	#[tokio::test]
	async fn test_file_fetcher_reads_and_reports_missing() {
		let dir = std::env::temp_dir().join(format!("anicursor-fetch-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("c.ani"), b"RIFF").unwrap();

		let fetcher = FileFetcher::with_root(&dir);
		assert_eq!(fetcher.fetch("c.ani").await.unwrap(), b"RIFF".to_vec());
		assert!(matches!(fetcher.fetch("missing.ani").await, Err(FetchError::NotFound)));

		std::fs::remove_dir_all(&dir).unwrap();
	}
}
