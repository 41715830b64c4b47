//! `.ANI` animated cursor container support.
//!
//! # File Structure Overview
//!
//! An animated cursor is a RIFF container with form type `ACON`:
//!
//! ```text
//! RIFF('ACON'
//!     [LIST('INFO'
//!         [INAM(<ZSTR>)]        Title
//!         [IART(<ZSTR>)]        Author
//!     )]
//!     anih(<ANIHEADER>)         36 byte header, nine u32 words
//!     [rate(<DWORD...>)]        Per-step display rate in jiffies
//!     [seq (<DWORD...>)]        Per-step image-list index
//!     LIST('fram'
//!         icon(<ICO/CUR file>)  One single-frame icon per image
//!         ...
//!     )
//! )
//! ```
//!
//! All integers are little-endian. Chunk payloads of odd length are followed
//! by one pad byte. Chunk order is not fixed, so the parser indexes every
//! chunk before reading any of them.
//!
//! ## Timing
//!
//! Durations are expressed in jiffies (1/60 s). The play order comes from the
//! `seq ` table when present, otherwise every image is shown once in storage
//! order. A sequenced step's duration comes from the `rate` table when
//! present; natural-order frames always use the header default.
//!
//! # Usage Examples
//!
//! ```no_run
//! use anicursor_types::ani::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ani = File::open("working.ani")?;
//! let timeline = ani.timeline()?;
//!
//! for (entry, offset) in timeline.entries().iter().zip(timeline.keyframe_offsets()) {
//!     println!("{offset:>6.2}%  image {} for {} ms", entry.frame_index, entry.duration_ms);
//! }
//! # Ok(())
//! # }
//! ```

pub mod chunk;
pub mod constants;
pub mod file;
pub mod header;
pub mod metadata;
pub mod timeline;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;


pub use self::chunk::{Chunk, ChunkIndex, FourCC, find_chunk};
pub use self::file::File;
pub use self::header::Header;
pub use self::metadata::Metadata;
pub use self::timeline::{DurationSource, FrameEntry, PlayOrder, Timeline, jiffies_to_ms};
