//! ANI container constants.
//!
//! Chunk identifiers, fixed sizes and header word positions used by the
//! RIFF-based animated cursor format.

use super::FourCC;

/// RIFF container signature
pub const RIFF: FourCC = FourCC(*b"RIFF");

/// Form type of animated cursor containers
pub const ACON: FourCC = FourCC(*b"ACON");

/// Animation header chunk
pub const ANIH: FourCC = FourCC(*b"anih");

/// Per-step display rate table (jiffies)
pub const RATE: FourCC = FourCC(*b"rate");

/// Play sequence table (image-list indices). Note the trailing space.
pub const SEQ: FourCC = FourCC(*b"seq ");

/// List chunk identifier
pub const LIST: FourCC = FourCC(*b"LIST");

/// List type holding the icon frames
pub const FRAM: FourCC = FourCC(*b"fram");

/// List type holding textual metadata
pub const INFO: FourCC = FourCC(*b"INFO");

/// Title sub-chunk of the `INFO` list
pub const INAM: FourCC = FourCC(*b"INAM");

/// Author sub-chunk of the `INFO` list
pub const IART: FourCC = FourCC(*b"IART");

/// Icon sub-chunk of the `fram` list
pub const ICON: FourCC = FourCC(*b"icon");

/// Size of a chunk preamble: identifier + little-endian length
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Size of the RIFF preamble: `RIFF` + length + form type
pub const RIFF_HEADER_SIZE: usize = 12;

/// Size of the `anih` payload as written by Windows (nine u32 words)
pub const ANIH_SIZE: usize = 36;

/// Word index of the total frame count in the `anih` payload
pub const WORD_FRAME_COUNT: usize = 1;

/// Word index of the play-order length in the `anih` payload
pub const WORD_STEP_COUNT: usize = 2;

/// Word index of the default display rate in the `anih` payload
pub const WORD_DEFAULT_RATE: usize = 7;

/// Bytes of `anih` payload needed to reach the default display rate
pub const ANIH_REQUIRED_SIZE: usize = (WORD_DEFAULT_RATE + 1) * 4;

/// Header flag: frames are stored as icons
pub const AF_ICON: u32 = 0x1;

/// Header flag: a `seq ` chunk orders the frames
pub const AF_SEQUENCE: u32 = 0x2;

/// Milliseconds per second over jiffies per second
pub const JIFFIES_PER_SECOND: f64 = 60.0;
