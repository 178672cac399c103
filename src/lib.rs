// SPDX-License-Identifier: MPL-2.0
//! `smart_player` is the playback transport core of a desktop video player.
//!
//! It drives a non-blocking media source frame by frame, owns the canonical
//! play/pause/seeking state, and keeps the scrub bar and elapsed/duration
//! readout synchronized with decode progress. Decoding itself and the UI
//! toolkit are collaborators behind the [`media::MediaSource`] port and the
//! session's event/view-state surface.

pub mod config;
pub mod error;
pub mod media;
pub mod playback;

#[cfg(test)]
mod test_utils;
