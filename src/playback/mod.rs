// SPDX-License-Identifier: MPL-2.0
//! Playback transport engine.
//!
//! This module owns the playback synchronization state machine: the pump
//! clock, the transport states, and the position/volume models that keep the
//! scrub bar and readout consistent with decode progress.

pub mod clock;
pub mod frame_rate;
pub mod position;
pub mod session;
pub mod state;
pub mod volume;

pub use clock::{tick_channel, IntervalClock, TransportClock};
pub use position::{format_clock, Position};
pub use session::{PlayerSession, SessionEvent, PAUSE_LABEL, PLAY_LABEL};
pub use state::PlaybackState;
pub use volume::VolumeLevel;
