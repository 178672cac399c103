// SPDX-License-Identifier: MPL-2.0
//! Headless demo harness for the playback transport.
//!
//! Plays a synthetic stream through a full session — clock, state machine,
//! position and volume models — logging the readout as it advances, then
//! closes the session. Run with `RUST_LOG=info` (or `debug` for per-frame
//! output).

use smart_player::config;
use smart_player::error::{Error, Result};
use smart_player::media::{FrameRate, SyntheticSource};
use smart_player::playback::{tick_channel, IntervalClock, PlayerSession, SessionEvent};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let duration: f64 = args
        .opt_value_from_str("--duration")
        .map_err(|e| Error::Config(e.to_string()))?
        .unwrap_or(5.0);
    let fps: u32 = args
        .opt_value_from_str("--fps")
        .map_err(|e| Error::Config(e.to_string()))?
        .unwrap_or(30);

    let cfg = config::load().unwrap_or_default();

    let source = SyntheticSource::new(duration, FrameRate::new(fps, 1));
    let (tick_tx, mut tick_rx) = tick_channel();
    let clock = IntervalClock::new(tick_tx);
    let mut session = PlayerSession::open(source, clock, Path::new("synthetic://demo"), &cfg)?;

    if !session.state().is_playing() {
        session.handle(SessionEvent::PlayPauseToggled);
    }

    let mut last_readout = String::new();
    while let Some(()) = tick_rx.recv().await {
        if let Some(frame) = session.handle(SessionEvent::Tick) {
            log::debug!(
                "frame {}x{} at {:.3}s",
                frame.width,
                frame.height,
                frame.pts_secs
            );
        }
        let readout = session.transport_text();
        if readout != last_readout {
            log::info!(
                "{readout} [{}] scrub {:3}%",
                session.toggle_label(),
                session.scrub_value()
            );
            last_readout = readout;
        }
        // End of stream (or a stall) pauses the transport and stops the clock.
        if !session.state().is_playing() {
            break;
        }
    }

    if let Some(error) = session.last_error() {
        log::warn!("playback ended abnormally: {error}");
    }
    session.handle(SessionEvent::CloseRequested);
    Ok(())
}
