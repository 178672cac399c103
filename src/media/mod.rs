// SPDX-License-Identifier: MPL-2.0
//! Media domain types shared between the playback core and source adapters.
//!
//! A [`MediaSource`] produces timestamped [`Frame`]s on demand; the playback
//! engine never blocks on it. Stream properties relevant to the transport
//! (duration, frame rate) travel in [`MediaMetadata`].

mod source;
mod synthetic;

pub use source::MediaSource;
pub use synthetic::SyntheticSource;

use crate::error::MediaError;
use std::str::FromStr;
use std::sync::Arc;

/// A decoded video frame ready for display.
///
/// Pixel data is shared, not copied: the source hands the same buffer to the
/// display sink without an intermediate clone.
#[derive(Debug, Clone)]
pub struct Frame {
    /// RGBA8 pixel data.
    pub rgba: Arc<Vec<u8>>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Presentation timestamp in seconds from stream start.
    pub pts_secs: f64,
}

/// Rational frame rate as probed from stream metadata (e.g. `30000/1001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub num: u32,
    pub den: u32,
}

impl FrameRate {
    #[must_use]
    pub fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Frames per second, or `None` when the rational is degenerate.
    #[must_use]
    pub fn as_fps(self) -> Option<f64> {
        if self.num == 0 || self.den == 0 {
            return None;
        }
        Some(f64::from(self.num) / f64::from(self.den))
    }
}

impl FromStr for FrameRate {
    type Err = MediaError;

    /// Parses the `avg_frame_rate` probe format, `"<num>/<den>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MediaError::MissingMetadata(format!("malformed frame rate: {s:?}"));
        let (num, den) = s.split_once('/').ok_or_else(malformed)?;
        let num = num.trim().parse::<u32>().map_err(|_| malformed())?;
        let den = den.trim().parse::<u32>().map_err(|_| malformed())?;
        Ok(Self { num, den })
    }
}

/// Stream metadata returned by [`MediaSource::open`].
#[derive(Debug, Clone, PartialEq)]
pub struct MediaMetadata {
    /// Total stream duration in seconds. Zero when the container does not
    /// report one; duration-dependent display falls back to safe defaults.
    pub duration_secs: f64,
    /// Rational frame rate, absent when the container does not report one.
    pub frame_rate: Option<FrameRate>,
}

/// Outcome of one non-blocking frame poll.
#[derive(Debug, Clone)]
pub enum PollFrame {
    /// A decoded frame is ready for display.
    Ready(Frame),
    /// No frame was ready this tick; try again on the next one.
    Pending,
    /// The stream is exhausted. Not an error.
    EndOfStream,
}
