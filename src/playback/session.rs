// SPDX-License-Identifier: MPL-2.0
//! Playback session: the transport state machine.
//!
//! A [`PlayerSession`] owns the canonical playback state, the position and
//! scrub models, the frame-pump clock and the media source, and arbitrates
//! between the three concurrent time sources — clock ticks, scrub drags and
//! end-of-stream — so exactly one of them controls position at any instant.
//!
//! All mutation flows through [`PlayerSession::handle`], one transition
//! function over an explicit event enum. Events are processed in delivery
//! order on the caller's single event loop; the session itself never blocks
//! and holds no locks.

use super::clock::TransportClock;
use super::frame_rate;
use super::position::Position;
use super::state::PlaybackState;
use super::volume::VolumeLevel;
use crate::config::Config;
use crate::error::MediaError;
use crate::media::{Frame, MediaSource, PollFrame};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Duration;

/// Play/pause button label while playback is active or will resume.
pub const PAUSE_LABEL: &str = "Pause";

/// Play/pause button label while playback is suspended.
pub const PLAY_LABEL: &str = "Play";

/// Input events consumed by the transition function.
///
/// `Tick` comes from the clock; everything else comes from the UI surface.
/// `EndOfStream` is normally discovered inside a tick's frame poll but is
/// also accepted directly for sources that signal it out of band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// One firing of the frame-pump timer.
    Tick,
    /// End-of-stream reported by the source.
    EndOfStream,
    /// Pointer went down on the scrub bar.
    ScrubPressed,
    /// Pointer moved while down; carries the scrub percentage.
    ScrubDragged(u8),
    /// Pointer released on the scrub bar.
    ScrubReleased,
    /// Play/pause button clicked.
    PlayPauseToggled,
    /// Volume slider moved; carries the volume percentage.
    VolumeChanged(u8),
    /// Player is being closed.
    CloseRequested,
}

/// Transport state machine bound to a media source and a pump clock.
///
/// Constructed by [`PlayerSession::open`] once the media loads; load failure
/// constructs nothing. Dropping the session releases the clock and the
/// source on every exit path.
pub struct PlayerSession<S: MediaSource, C: TransportClock> {
    source: S,
    clock: C,
    state: PlaybackState,
    position: Position,
    scrub_value: u8,
    volume: VolumeLevel,
    frame_interval: Duration,
    /// After the end-of-stream reset the readout shows "00:00 / 00:00"
    /// until playback starts again, even though the duration is known.
    readout_cleared: bool,
    miss_streak: u32,
    stall_tick_limit: u32,
    last_error: Option<MediaError>,
    closed: bool,
}

impl<S: MediaSource, C: TransportClock> PlayerSession<S, C> {
    /// Opens `path` on the source and constructs the session.
    ///
    /// Autoplay (per `config`) starts the clock immediately; otherwise the
    /// session begins paused at position zero.
    ///
    /// # Errors
    ///
    /// Fails hard with the source's [`MediaError`] when the media cannot be
    /// opened or probed. No session (and no partial state) is left behind.
    pub fn open(mut source: S, clock: C, path: &Path, config: &Config) -> Result<Self, MediaError> {
        let metadata = source.open(path)?;
        let frame_interval = frame_rate::frame_interval(metadata.frame_rate);
        let volume = VolumeLevel::new(config.volume_percent());
        source.set_volume(volume.normalized());
        info!(
            "media loaded: duration {:.2}s, frame interval {}ms",
            metadata.duration_secs,
            frame_interval.as_millis()
        );

        let mut session = Self {
            source,
            clock,
            state: PlaybackState::Paused,
            position: Position::new(metadata.duration_secs),
            scrub_value: 0,
            volume,
            frame_interval,
            readout_cleared: false,
            miss_streak: 0,
            stall_tick_limit: config.stall_tick_limit().max(1),
            last_error: None,
            closed: false,
        };
        if config.autoplay() {
            session.begin_playing();
        } else {
            session.source.set_paused(true);
        }
        Ok(session)
    }

    /// The single transition function.
    ///
    /// Returns the frame to hand to the display sink when this event
    /// produced one (only `Tick` can). Events arriving after close are
    /// ignored.
    pub fn handle(&mut self, event: SessionEvent) -> Option<Frame> {
        if self.closed {
            return None;
        }
        match event {
            SessionEvent::Tick => return self.on_tick(),
            SessionEvent::EndOfStream => self.on_end_of_stream(),
            SessionEvent::ScrubPressed => self.on_scrub_pressed(),
            SessionEvent::ScrubDragged(percent) => self.on_scrub_dragged(percent),
            SessionEvent::ScrubReleased => self.on_scrub_released(),
            SessionEvent::PlayPauseToggled => self.on_toggle(),
            SessionEvent::VolumeChanged(percent) => self.on_volume_changed(percent),
            SessionEvent::CloseRequested => self.on_close(),
        }
        None
    }

    fn on_tick(&mut self) -> Option<Frame> {
        // A tick already in flight when the clock was stopped must not touch
        // position: while Seeking the scrub bar owns it, while Paused there
        // is nothing to pump.
        if !self.state.is_playing() {
            return None;
        }
        match self.source.poll_frame() {
            PollFrame::Ready(frame) => {
                self.miss_streak = 0;
                self.position.set_current(frame.pts_secs);
                self.scrub_value = self.position.scrub_percent();
                Some(frame)
            }
            PollFrame::EndOfStream => {
                self.on_end_of_stream();
                None
            }
            PollFrame::Pending => {
                self.on_decode_miss();
                None
            }
        }
    }

    fn on_decode_miss(&mut self) {
        self.miss_streak += 1;
        if self.miss_streak >= self.stall_tick_limit {
            warn!(
                "decoder stalled: no frame for {} consecutive ticks, pausing",
                self.miss_streak
            );
            self.last_error = Some(MediaError::Stalled {
                ticks: self.miss_streak,
            });
            self.enter_paused();
            self.miss_streak = 0;
        }
    }

    fn on_end_of_stream(&mut self) {
        // Repeated EOF signals while already stopped are no-ops.
        if !self.state.is_playing() {
            return;
        }
        debug!("end of stream, rewinding");
        self.enter_paused();
        // Rewind so a later resume starts from the beginning.
        self.source.seek(0.0, true);
        self.position.reset();
        self.scrub_value = 0;
        self.readout_cleared = true;
        self.miss_streak = 0;
    }

    fn on_scrub_pressed(&mut self) {
        let resume = match self.state {
            PlaybackState::Playing => true,
            PlaybackState::Paused => false,
            // One press per unbroken pointer-down interval.
            PlaybackState::Seeking { .. } => return,
        };
        debug!("scrub press, resume after release: {resume}");
        self.clock.stop();
        self.source.set_paused(true);
        self.state = PlaybackState::Seeking { resume };
    }

    fn on_scrub_dragged(&mut self, percent: u8) {
        if !self.state.is_seeking() {
            return;
        }
        // Display-only update; the seek command waits for release.
        self.scrub_value = percent.min(100);
        let preview = self.position.target_secs(self.scrub_value);
        self.position.set_current(preview);
        self.readout_cleared = false;
    }

    fn on_scrub_released(&mut self) {
        let PlaybackState::Seeking { resume } = self.state else {
            return;
        };
        let target = self.position.target_secs(self.scrub_value);
        debug!("scrub release, seeking to {target:.2}s");
        self.source.seek(target, true);
        self.position.set_current(target);
        self.readout_cleared = false;
        self.miss_streak = 0;
        if resume {
            self.begin_playing();
        } else {
            self.state = PlaybackState::Paused;
        }
    }

    fn on_toggle(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                debug!("toggle: pausing");
                self.enter_paused();
            }
            PlaybackState::Paused => {
                debug!("toggle: playing");
                self.begin_playing();
            }
            // The toggle button is inert mid-drag.
            PlaybackState::Seeking { .. } => {}
        }
    }

    fn on_volume_changed(&mut self, percent: u8) {
        self.volume = VolumeLevel::new(percent);
        self.source.set_volume(self.volume.normalized());
    }

    fn on_close(&mut self) {
        info!("closing playback session");
        self.clock.stop();
        self.source.close();
        self.state = PlaybackState::Paused;
        self.closed = true;
    }

    fn begin_playing(&mut self) {
        self.state = PlaybackState::Playing;
        self.readout_cleared = false;
        self.miss_streak = 0;
        self.source.set_paused(false);
        self.clock.start(self.frame_interval);
    }

    fn enter_paused(&mut self) {
        self.state = PlaybackState::Paused;
        self.clock.stop();
        self.source.set_paused(true);
    }

    /// Current transport state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Scrub bar value to display, `[0, 100]`.
    #[must_use]
    pub fn scrub_value(&self) -> u8 {
        self.scrub_value
    }

    /// Elapsed/duration readout text.
    #[must_use]
    pub fn transport_text(&self) -> String {
        if self.readout_cleared {
            return "00:00 / 00:00".to_string();
        }
        self.position.transport_text()
    }

    /// Label for the play/pause button: the action a click would take.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.state.is_playing_or_will_resume() {
            PAUSE_LABEL
        } else {
            PLAY_LABEL
        }
    }

    /// Current position model.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current volume slider value.
    #[must_use]
    pub fn volume(&self) -> VolumeLevel {
        self.volume
    }

    /// Interval the pump clock runs at while playing.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// The last runtime error, if any (currently only decoder stalls).
    #[must_use]
    pub fn last_error(&self) -> Option<&MediaError> {
        self.last_error.as_ref()
    }

    /// True once `CloseRequested` has been processed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The underlying media source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MediaSource, C: TransportClock> Drop for PlayerSession<S, C> {
    fn drop(&mut self) {
        if !self.closed {
            self.clock.stop();
            self.source.close();
        }
    }
}
