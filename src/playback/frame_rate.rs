// SPDX-License-Identifier: MPL-2.0
//! Frame interval estimation from stream metadata.
//!
//! The pump cadence follows the stream's own frame rate; when the container
//! reports none (or reports garbage) playback still works at a 30 fps default
//! rather than failing the load.

use crate::media::FrameRate;
use std::time::Duration;

/// Fallback used when stream metadata carries no usable frame rate.
pub const FALLBACK_FPS: f64 = 30.0;

/// Returns the display interval for one frame, rounded to whole milliseconds.
///
/// Missing, degenerate (`den == 0`) or non-positive rates fall back to
/// [`FALLBACK_FPS`]. The result is never below 1 ms.
///
/// # Examples
///
/// ```
/// use smart_player::media::FrameRate;
/// use smart_player::playback::frame_rate::frame_interval;
/// use std::time::Duration;
///
/// assert_eq!(frame_interval(Some(FrameRate::new(25, 1))), Duration::from_millis(40));
/// assert_eq!(frame_interval(None), Duration::from_millis(33));
/// ```
#[must_use]
pub fn frame_interval(rate: Option<FrameRate>) -> Duration {
    let fps = rate
        .and_then(FrameRate::as_fps)
        .filter(|fps| fps.is_finite() && *fps > 0.0)
        .unwrap_or(FALLBACK_FPS);
    let millis = (1000.0 / fps).round().max(1.0);
    Duration::from_millis(millis as u64)
}
