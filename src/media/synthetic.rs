// SPDX-License-Identifier: MPL-2.0
//! Deterministic in-process media source.
//!
//! Generates flat-shaded frames at a fixed rate with exact timestamps, so the
//! transport can be exercised end to end without a decoder library or a media
//! file on disk. Used by the demo binary and by integration tests.

use super::{Frame, FrameRate, MediaMetadata, MediaSource, PollFrame};
use crate::error::MediaError;
use std::path::Path;
use std::sync::Arc;

const FRAME_WIDTH: u32 = 64;
const FRAME_HEIGHT: u32 = 36;

/// Media source producing synthetic frames on a fixed timeline.
///
/// Frames are solid grayscale, brightening from black at the start of the
/// stream to white at the end, so a sink can verify coarse position visually.
#[derive(Debug)]
pub struct SyntheticSource {
    duration_secs: f64,
    frame_rate: FrameRate,
    metadata: Option<MediaMetadata>,
    next_pts: f64,
    paused: bool,
    volume: f32,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(duration_secs: f64, frame_rate: FrameRate) -> Self {
        Self {
            duration_secs,
            frame_rate,
            metadata: None,
            next_pts: 0.0,
            paused: false,
            volume: 1.0,
        }
    }

    /// Seconds between successive frames.
    fn frame_step(&self) -> f64 {
        1.0 / self.frame_rate.as_fps().unwrap_or(30.0)
    }

    fn render(&self, pts_secs: f64) -> Frame {
        let progress = (pts_secs / self.duration_secs).clamp(0.0, 1.0);
        let shade = (progress * 255.0) as u8;
        let mut rgba = vec![shade; (FRAME_WIDTH * FRAME_HEIGHT * 4) as usize];
        for alpha in rgba.iter_mut().skip(3).step_by(4) {
            *alpha = 255;
        }
        Frame {
            rgba: Arc::new(rgba),
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            pts_secs,
        }
    }

    /// Last volume commanded by the transport.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl MediaSource for SyntheticSource {
    fn open(&mut self, _path: &Path) -> Result<MediaMetadata, MediaError> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(MediaError::OpenFailed(format!(
                "non-positive stream duration: {}",
                self.duration_secs
            )));
        }
        let metadata = MediaMetadata {
            duration_secs: self.duration_secs,
            frame_rate: Some(self.frame_rate),
        };
        self.metadata = Some(metadata.clone());
        self.next_pts = 0.0;
        self.paused = false;
        Ok(metadata)
    }

    fn poll_frame(&mut self) -> PollFrame {
        if self.metadata.is_none() || self.paused {
            return PollFrame::Pending;
        }
        if self.next_pts >= self.duration_secs {
            return PollFrame::EndOfStream;
        }
        let pts = self.next_pts;
        self.next_pts += self.frame_step();
        PollFrame::Ready(self.render(pts))
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn seek(&mut self, target_secs: f64, absolute: bool) {
        let target = if absolute {
            target_secs
        } else {
            self.next_pts + target_secs
        };
        self.next_pts = target.clamp(0.0, self.duration_secs);
    }

    fn set_volume(&mut self, normalized: f32) {
        self.volume = normalized.clamp(0.0, 1.0);
    }

    fn metadata(&self) -> Option<&MediaMetadata> {
        self.metadata.as_ref()
    }

    fn close(&mut self) {
        self.metadata = None;
    }
}
