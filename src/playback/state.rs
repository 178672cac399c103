// SPDX-License-Identifier: MPL-2.0
//! Playback state machine states.
//!
//! Exactly one state holds at any instant. The frame-pump clock runs iff the
//! state is [`PlaybackState::Playing`]; entering `Seeking` always stops it
//! first, so a drag can never race a stale frame timestamp.

/// Represents the current transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Frames are being pumped and displayed.
    Playing,
    /// Playback is suspended at the current position.
    Paused,
    /// A scrub drag is in progress; the scrub bar owns the position.
    Seeking {
        /// Whether playback was active when the drag began, and should
        /// resume when it ends.
        resume: bool,
    },
}

impl PlaybackState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    #[must_use]
    pub fn is_seeking(self) -> bool {
        matches!(self, Self::Seeking { .. })
    }

    /// True when playback is active or will resume once the current drag ends.
    #[must_use]
    pub fn is_playing_or_will_resume(self) -> bool {
        matches!(self, Self::Playing | Self::Seeking { resume: true })
    }
}
