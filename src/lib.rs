//! SMPTE Timecode Conversions
//!
//! This crate converts between the three representations of a video
//! timecode — an absolute frame count, `HH:MM:SS:FF` display fields, and a
//! wall-clock duration — for a fixed catalog of broadcast frame rates,
//! including the 29.97 and 59.94 drop-frame variants.
//!
//! # Quick Start
//!
//! ```rust
//! use video_timecode::{FrameRate, Timecode};
//!
//! // From a frame count
//! let tc = Timecode::from_frames(1442, FrameRate::Fps23_976);
//! assert_eq!(tc.to_string(), "00:01:00:02");
//!
//! // From a string
//! let tc = Timecode::parse("02:30:11:07", FrameRate::Fps23_976)?;
//! assert_eq!(tc.total_frames(), 216271);
//!
//! // To and from a wall-clock duration
//! let back = Timecode::from_duration(tc.to_duration(), FrameRate::Fps23_976);
//! assert_eq!(back.total_frames(), 216271);
//! # Ok::<(), video_timecode::TimecodeError>(())
//! ```
//!
//! # Drop-Frame Timecode
//!
//! Drop-frame rates skip frame numbers 00/01 (29.97) or 00-03 (59.94) at the
//! start of every minute not divisible by ten, so the displayed timecode
//! tracks wall-clock time despite the fractional rate. Drop-frame timecodes
//! render with a `;` before the frames field:
//!
//! ```rust
//! use video_timecode::{FrameRate, Timecode};
//!
//! let tc = Timecode::from_frames(3598, FrameRate::Fps29_97Df);
//! assert_eq!(tc.to_string(), "00:02:00;02"); // 00 and 01 are skipped
//! ```
//!
//! All values are immutable once constructed. Conversions are pure value
//! computations with no I/O and no shared state, so every type here can be
//! freely shared across threads.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod rate;
pub mod timecode;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use rate::FrameRate;
pub use timecode::Timecode;
