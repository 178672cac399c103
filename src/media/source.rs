// SPDX-License-Identifier: MPL-2.0
//! Media source port definition.
//!
//! This module defines the [`MediaSource`] trait consumed by the playback
//! transport. Decoder adapters (FFmpeg bindings, test doubles, the built-in
//! synthetic generator) implement this trait.
//!
//! # Design Notes
//!
//! - The source is **stateful**: it maintains the current decode position.
//! - `poll_frame` never blocks. A slow decode surfaces as [`PollFrame::Pending`]
//!   and the transport skips the tick instead of freezing the event loop.
//! - Transport commands (`set_paused`, `seek`, `set_volume`) are fire-and-forget;
//!   the source applies them on its own decode path.

use super::{MediaMetadata, PollFrame};
use crate::error::MediaError;
use std::path::Path;

/// Port for frame-by-frame media playback.
///
/// # Lifecycle
///
/// 1. `open()` probes the file and returns its metadata — the only fallible
///    operation; a failure here means no playback session is constructed.
/// 2. `poll_frame()` is called once per clock tick while playing.
/// 3. `seek()`/`set_paused()`/`set_volume()` are issued by user transitions.
/// 4. `close()` releases decoder resources; further polls yield `Pending`.
pub trait MediaSource {
    /// Opens a media file and returns its stream metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the file cannot be read, has no video
    /// stream, or cannot be probed.
    fn open(&mut self, path: &Path) -> Result<MediaMetadata, MediaError>;

    /// Polls for the next decoded frame without blocking.
    fn poll_frame(&mut self) -> PollFrame;

    /// Suspends or resumes decoding.
    fn set_paused(&mut self, paused: bool);

    /// Jumps to a position in seconds, absolute from stream start or
    /// relative to the current position.
    fn seek(&mut self, target_secs: f64, absolute: bool);

    /// Sets the output volume on the normalized `[0.0, 1.0]` scale.
    fn set_volume(&mut self, normalized: f32);

    /// Metadata of the currently open stream, if any.
    fn metadata(&self) -> Option<&MediaMetadata>;

    /// Releases all decoder resources.
    fn close(&mut self);
}
