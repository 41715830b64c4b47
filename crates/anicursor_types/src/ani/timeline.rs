//! Frame timing resolution.
//!
//! Turns the header, `seq ` and `rate` chunks into an ordered list of
//! [`FrameEntry`] values. Durations are resolved per entry, first match wins:
//!
//! 1. the `rate` table, when a usable `seq ` table is present and the
//!    `rate` table is long enough
//! 2. the header's default rate
//!
//! Play order comes from the `seq ` table when present and long enough,
//! otherwise every image is shown once in storage order. A short or
//! misaligned optional table is ignored with a warning, never an error.

use std::collections::BTreeSet;

use log::{debug, warn};

use super::{
	chunk::{Chunk, ChunkIndex},
	constants,
	header::Header,
};

/// Converts a duration in jiffies (1/60 s) to milliseconds.
pub fn jiffies_to_ms(jiffies: u32) -> f64 {
	f64::from(jiffies) * 1000.0 / constants::JIFFIES_PER_SECOND
}

/// One step of the play order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEntry {
	/// Index into the image list
	pub frame_index: u32,
	/// Display duration in jiffies
	pub jiffies: u32,
	/// Display duration in milliseconds
	pub duration_ms: f64,
}

impl FrameEntry {
	/// Creates an entry showing image `frame_index` for `jiffies`.
	pub fn new(frame_index: u32, jiffies: u32) -> Self {
		Self {
			frame_index,
			jiffies,
			duration_ms: jiffies_to_ms(jiffies),
		}
	}
}

/// Where the play order came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOrder {
	/// Read from the `seq ` chunk
	Sequence,
	/// Storage order of the image list
	Natural,
}

/// Where the frame durations came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationSource {
	/// Read from the `rate` chunk
	RateTable,
	/// The header's default rate applied to every entry
	HeaderDefault,
}

/// Ordered frame timing of one animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
	entries: Vec<FrameEntry>,
	order: PlayOrder,
	durations: DurationSource,
}

impl Timeline {
	/// Creates a timeline from already resolved entries.
	pub fn new(entries: Vec<FrameEntry>, order: PlayOrder, durations: DurationSource) -> Self {
		Self {
			entries,
			order,
			durations,
		}
	}

	/// Resolves the timeline of the container indexed by `index`.
	///
	/// Without a usable `seq ` table this produces `header.frame_count`
	/// entries; callers reading untrusted data should bound that value
	/// first (see [`File::timeline`](super::File::timeline)).
	pub fn resolve(buffer: &[u8], index: &ChunkIndex, header: &Header) -> Self {
		let sequence = sequence_table(buffer, index, header);
		Self::resolve_with(buffer, index, header, sequence)
	}

	pub(crate) fn resolve_with(
		buffer: &[u8],
		index: &ChunkIndex,
		header: &Header,
		sequence: Option<Vec<u32>>,
	) -> Self {
		let (order, frame_indices) = match sequence {
			Some(table) => (PlayOrder::Sequence, table),
			None => (PlayOrder::Natural, (0..header.frame_count).collect()),
		};

		// The rate table only times an explicit play order
		let rates = match order {
			PlayOrder::Sequence => index
				.find(constants::RATE)
				.and_then(|chunk| read_table(buffer, chunk, frame_indices.len())),
			PlayOrder::Natural => None,
		};

		let (durations, entries) = match rates {
			Some(rates) => (
				DurationSource::RateTable,
				frame_indices
					.iter()
					.zip(rates)
					.map(|(&frame, jiffies)| FrameEntry::new(frame, jiffies))
					.collect(),
			),
			None => (
				DurationSource::HeaderDefault,
				frame_indices
					.iter()
					.map(|&frame| FrameEntry::new(frame, header.default_jiffies))
					.collect(),
			),
		};

		debug!("Resolved {} frames ({order:?} order, {durations:?} durations)", frame_indices.len());

		Self {
			entries,
			order,
			durations,
		}
	}

	/// Entries in play order.
	pub fn entries(&self) -> &[FrameEntry] {
		&self.entries
	}

	/// Number of play-order entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the play order is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Origin of the play order.
	pub fn play_order(&self) -> PlayOrder {
		self.order
	}

	/// Origin of the durations.
	pub fn duration_source(&self) -> DurationSource {
		self.durations
	}

	/// Sum of all entry durations in milliseconds.
	pub fn total_duration_ms(&self) -> f64 {
		self.entries.iter().map(|e| e.duration_ms).sum()
	}

	/// Returns `true` if the animation never advances (no entries or zero total duration).
	pub fn is_static(&self) -> bool {
		self.total_duration_ms() <= 0.0
	}

	/// Keyframe start of every entry as a percentage of the total duration.
	///
	/// Entry `i` starts at the summed duration of entries `0..i` over the
	/// total. The sequence starts at 0 and never decreases; when the total is
	/// zero every entry starts at 0.
	pub fn keyframe_offsets(&self) -> Vec<f64> {
		let total = self.total_duration_ms();
		let mut elapsed = 0.0;
		self.entries
			.iter()
			.map(|entry| {
				let offset = if total > 0.0 {
					elapsed / total * 100.0
				} else {
					0.0
				};
				elapsed += entry.duration_ms;
				offset
			})
			.collect()
	}

	/// Distinct image-list indices referenced by the play order, ascending.
	pub fn image_indices(&self) -> Vec<u32> {
		self.entries.iter().map(|e| e.frame_index).collect::<BTreeSet<_>>().into_iter().collect()
	}
}

/// Reads the `seq ` table if present and long enough for `header.step_count` entries.
pub(crate) fn sequence_table(buffer: &[u8], index: &ChunkIndex, header: &Header) -> Option<Vec<u32>> {
	let chunk = index.find(constants::SEQ)?;
	read_table(buffer, chunk, header.step_count as usize)
}

/// Reads `count` little-endian u32 values from the start of `chunk`.
fn read_table(buffer: &[u8], chunk: &Chunk, count: usize) -> Option<Vec<u32>> {
	let data = chunk.data(buffer);
	let needed = count.checked_mul(4)?;
	if data.len() < needed {
		warn!(
			"Chunk '{}' holds {} bytes, {} needed for {count} entries; ignoring it",
			chunk.id,
			data.len(),
			needed
		);
		return None;
	}

	Some(
		data[..needed]
			.chunks_exact(4)
			.map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
			.collect(),
	)
}
