//! The timecode value type and its conversions.
//!
//! A [`Timecode`] is constructed from exactly one of three canonical inputs:
//! an absolute frame count, a `HH:MM:SS:FF` string, or a wall-clock duration.
//! Construction eagerly derives every other representation, so accessors are
//! plain field reads and instances never change after they are built.

use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_MINUTE: i64 = 60;
const MILLIS_PER_SECOND: i64 = 1000;

/// Accepted timecode shape: two-digit hours up to 29, strict minutes and
/// seconds, a 2-3 digit frames field, and `:`, `;`, or `.` before the frames.
const TIMECODE_PATTERN: &str = r"^([0-2][0-9]):([0-5][0-9]):([0-5][0-9])[:;.]([0-9]{2,3})$";

/// A video timecode at a fixed frame rate.
///
/// Holds the absolute frame count together with the display fields derived
/// from it. Equality and hashing are structural on the frame count and frame
/// rate; two timecodes built from different inputs compare equal whenever
/// they denote the same frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    frame_rate: FrameRate,
    total_frames: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    frames: i64,
}

impl Timecode {
    /// Create a timecode from an absolute frame count.
    ///
    /// For drop-frame rates the count is normalized into the 24-hour range
    /// before decomposition. For non-drop-frame rates, hour values past 23
    /// wrap by a fixed 23-hour offset.
    ///
    /// # Example
    /// ```rust
    /// use video_timecode::{FrameRate, Timecode};
    ///
    /// let tc = Timecode::from_frames(3598, FrameRate::Fps29_97Df);
    /// assert_eq!(tc.to_string(), "00:02:00;02");
    /// ```
    #[must_use]
    pub fn from_frames(total_frames: i64, frame_rate: FrameRate) -> Self {
        let (hours, minutes, seconds, frames) = if frame_rate.is_drop_frame() {
            decompose_drop_frame(total_frames, frame_rate)
        } else {
            decompose_non_drop(total_frames, frame_rate)
        };
        Self {
            frame_rate,
            total_frames,
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Parse a timecode from a `HH:MM:SS:FF` string.
    ///
    /// The frames separator may be `:`, `;`, or `.` regardless of whether the
    /// rate is drop-frame. Fields matched by the pattern are taken as-is: the
    /// frames field is not checked against the frame rate, and hours up to 29
    /// are accepted.
    ///
    /// # Errors
    ///
    /// [`TimecodeError::EmptyInput`] for an empty string,
    /// [`TimecodeError::InvalidFormat`] when the pattern does not match.
    ///
    /// # Example
    /// ```rust
    /// use video_timecode::{FrameRate, Timecode};
    ///
    /// let tc = Timecode::parse("00:02:00;02", FrameRate::Fps29_97Df)?;
    /// assert_eq!(tc.total_frames(), 3598);
    /// # Ok::<(), video_timecode::TimecodeError>(())
    /// ```
    pub fn parse(text: &str, frame_rate: FrameRate) -> Result<Self> {
        if text.is_empty() {
            return Err(TimecodeError::EmptyInput);
        }

        let pattern = Regex::new(TIMECODE_PATTERN).unwrap();
        let captures = pattern.captures(text).ok_or_else(|| {
            TimecodeError::invalid_format(format!("expected HH:MM:SS:FF, got \"{}\"", text))
        })?;

        let hours = parse_field(&captures[1])?;
        let minutes = parse_field(&captures[2])?;
        let seconds = parse_field(&captures[3])?;
        let frames = parse_field(&captures[4])?;

        let rounded = frame_rate.rounded_rate();
        let mut total_frames =
            (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds) * rounded + frames;
        if frame_rate.is_drop_frame() {
            let mut total_minutes = hours * 60 + minutes;
            total_minutes -= total_minutes / 10;
            total_frames -= total_minutes * frame_rate.drop_frame_count();
        }

        Ok(Self {
            frame_rate,
            total_frames,
            hours,
            minutes,
            seconds,
            frames,
        })
    }

    /// Create a timecode from a wall-clock duration.
    ///
    /// # Example
    /// ```rust
    /// use std::time::Duration;
    /// use video_timecode::{FrameRate, Timecode};
    ///
    /// let tc = Timecode::from_duration(Duration::from_secs(60), FrameRate::Fps25);
    /// assert_eq!(tc.total_frames(), 1500);
    /// ```
    #[must_use]
    pub fn from_duration(duration: Duration, frame_rate: FrameRate) -> Self {
        // The bias offsets the millisecond truncation in to_duration.
        let frame_count = (duration.as_secs_f64() * frame_rate.rounded_rate() as f64
            + 0.01 * frame_rate.nominal_rate())
        .floor() as i64;
        Self::from_frames(frame_count, frame_rate)
    }

    /// Convert to a wall-clock duration, truncated to whole milliseconds.
    ///
    /// Uses the rounded rate, matching the modulus of the display fields
    /// rather than the nominal rate.
    #[must_use]
    pub fn to_duration(&self) -> Duration {
        let millis = self.total_frames.max(0) * MILLIS_PER_SECOND / self.frame_rate.rounded_rate();
        Duration::from_millis(millis as u64)
    }

    /// The frame rate this timecode was constructed with.
    #[must_use]
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    /// The absolute frame count from timecode zero.
    #[must_use]
    pub fn total_frames(&self) -> i64 {
        self.total_frames
    }

    /// The hours field.
    #[must_use]
    pub fn hours(&self) -> i64 {
        self.hours
    }

    /// The minutes field.
    #[must_use]
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// The seconds field.
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The frames field.
    #[must_use]
    pub fn frames(&self) -> i64 {
        self.frames
    }

    fn separator(&self) -> char {
        if self.frame_rate.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }
}

fn parse_field(digits: &str) -> Result<i64> {
    digits
        .parse()
        .map_err(|_| TimecodeError::invalid_format(format!("invalid number: {}", digits)))
}

fn decompose_non_drop(total_frames: i64, rate: FrameRate) -> (i64, i64, i64, i64) {
    let rounded = rate.rounded_rate();
    let frames_per_hour = SECONDS_PER_HOUR * rounded;
    let frames_per_minute = SECONDS_PER_MINUTE * rounded;

    let mut frame_count = total_frames;
    let mut hours = frame_count / frames_per_hour;
    if hours > 23 {
        // Wrap by a fixed 23-hour offset, not a full modulo.
        hours %= 24;
        frame_count -= 23 * frames_per_hour;
    }
    let minutes = frame_count % frames_per_hour / frames_per_minute;
    let seconds = frame_count % frames_per_hour % frames_per_minute / rounded;
    let frames = frame_count % frames_per_hour % frames_per_minute % rounded;
    (hours, minutes, seconds, frames)
}

fn decompose_drop_frame(total_frames: i64, rate: FrameRate) -> (i64, i64, i64, i64) {
    let fps = rate.nominal_rate();
    // Per-span frame counts round half away from zero.
    let drop_frames = (fps * 0.066666).round() as i64;
    let frames_per_hour = (fps * 3600.0).round() as i64;
    let frames_per_24h = frames_per_hour * 24;
    let frames_per_10m = (fps * 600.0).round() as i64;
    let frames_per_minute = (fps * 60.0).round() as i64;

    let mut frame_count = total_frames % frames_per_24h;
    if frame_count < 0 {
        frame_count += frames_per_24h;
    }

    // Add the skipped frame numbers back so the rounded rate can be used as
    // the modulus below.
    let tens_of_minutes = frame_count / frames_per_10m;
    let rem = frame_count % frames_per_10m;
    if rem > drop_frames {
        frame_count += drop_frames * 9 * tens_of_minutes
            + drop_frames * ((rem - drop_frames) / frames_per_minute);
    } else {
        frame_count += drop_frames * 9 * tens_of_minutes;
    }

    let rounded = rate.rounded_rate();
    let hours = frame_count / rounded / SECONDS_PER_MINUTE / SECONDS_PER_MINUTE;
    let minutes = frame_count / rounded / SECONDS_PER_MINUTE % SECONDS_PER_MINUTE;
    let seconds = frame_count / rounded % SECONDS_PER_MINUTE;
    let frames = frame_count % rounded;
    (hours, minutes, seconds, frames)
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.separator(),
            self.frames
        )
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.total_frames == other.total_frames && self.frame_rate == other.frame_rate
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_frames.hash(state);
        self.frame_rate.hash(state);
    }
}

impl PartialOrd for Timecode {
    /// Ordering is defined only between timecodes at the same frame rate.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.frame_rate == other.frame_rate {
            Some(self.total_frames.cmp(&other.total_frames))
        } else {
            None
        }
    }
}
