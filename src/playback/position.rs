// SPDX-License-Identifier: MPL-2.0
//! Position model: decoder timestamps, scrub percentages and the readout.
//!
//! Converts between the three representations of playback position — frame
//! timestamp in seconds, scrub bar percentage, and the "MM:SS / MM:SS" text —
//! treating a missing or zero duration as "display safe defaults", never an
//! error.

/// Playback position against a fixed stream duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    current_secs: f64,
    duration_secs: f64,
}

impl Position {
    /// Creates a position at the start of a stream of the given duration.
    /// Negative or non-finite durations are treated as unknown (zero).
    #[must_use]
    pub fn new(duration_secs: f64) -> Self {
        let duration_secs = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            current_secs: 0.0,
            duration_secs,
        }
    }

    #[must_use]
    pub fn current_secs(&self) -> f64 {
        self.current_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Moves the current position; non-finite inputs are ignored.
    pub fn set_current(&mut self, secs: f64) {
        if secs.is_finite() {
            self.current_secs = secs.max(0.0);
        }
    }

    /// Rewinds to the start of the stream.
    pub fn reset(&mut self) {
        self.current_secs = 0.0;
    }

    /// Scrub bar value for the current position, `[0, 100]`.
    ///
    /// Zero duration short-circuits to 0.
    #[must_use]
    pub fn scrub_percent(&self) -> u8 {
        if self.duration_secs <= 0.0 {
            return 0;
        }
        let percent = (self.current_secs * 100.0 / self.duration_secs).round();
        percent.clamp(0.0, 100.0) as u8
    }

    /// Seek target in seconds for a scrub bar value.
    #[must_use]
    pub fn target_secs(&self, percent: u8) -> f64 {
        f64::from(percent.min(100)) * self.duration_secs / 100.0
    }

    /// Elapsed/duration readout, `"MM:SS / MM:SS"`.
    ///
    /// Unknown duration renders as `"00:00 / 00:00"`.
    #[must_use]
    pub fn transport_text(&self) -> String {
        if self.duration_secs <= 0.0 {
            return format!("{} / {}", format_clock(0.0), format_clock(0.0));
        }
        format!(
            "{} / {}",
            format_clock(self.current_secs),
            format_clock(self.duration_secs)
        )
    }
}

/// Formats seconds as `"MM:SS"`.
///
/// Minutes are unbounded (one hour formats as `"60:00"`); seconds are
/// truncated to whole units the way the readout ticks down a wall clock.
/// Non-finite or non-positive inputs format as `"00:00"`.
#[must_use]
pub fn format_clock(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "00:00".to_string();
    }
    let total = secs as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn format_clock_pads_and_wraps_seconds_only() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(65.0), "01:05");
        assert_eq!(format_clock(3599.0), "59:59");
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn format_clock_truncates_fractional_seconds() {
        assert_eq!(format_clock(59.9), "00:59");
    }

    #[test]
    fn format_clock_defaults_on_invalid_input() {
        assert_eq!(format_clock(-5.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
        assert_eq!(format_clock(f64::INFINITY), "00:00");
    }

    #[test]
    fn scrub_percent_is_zero_for_unknown_duration() {
        let mut position = Position::new(0.0);
        position.set_current(12.0);
        assert_eq!(position.scrub_percent(), 0);
    }

    #[test]
    fn scrub_percent_rounds_and_clamps() {
        let mut position = Position::new(10.0);
        position.set_current(2.54);
        assert_eq!(position.scrub_percent(), 25);
        position.set_current(2.55);
        assert_eq!(position.scrub_percent(), 26);
        // Timestamps can overshoot the probed duration slightly.
        position.set_current(11.0);
        assert_eq!(position.scrub_percent(), 100);
    }

    #[test]
    fn target_secs_scales_by_duration() {
        let position = Position::new(200.0);
        assert_abs_diff_eq!(position.target_secs(0), 0.0);
        assert_abs_diff_eq!(position.target_secs(50), 100.0);
        assert_abs_diff_eq!(position.target_secs(100), 200.0);
    }

    #[test]
    fn scrub_round_trip_is_within_one_percent() {
        for duration in [0.5, 1.0, 37.3, 90.0, 3600.0] {
            let mut position = Position::new(duration);
            for percent in 0..=100u8 {
                position.set_current(position.target_secs(percent));
                let back = i16::from(position.scrub_percent());
                assert!(
                    (back - i16::from(percent)).abs() <= 1,
                    "duration {duration}: {percent}% came back as {back}%"
                );
            }
        }
    }

    #[test]
    fn transport_text_formats_both_sides() {
        let mut position = Position::new(65.0);
        position.set_current(2.0);
        assert_eq!(position.transport_text(), "00:02 / 01:05");
    }

    #[test]
    fn transport_text_defaults_for_unknown_duration() {
        assert_eq!(Position::new(0.0).transport_text(), "00:00 / 00:00");
        assert_eq!(Position::new(f64::NAN).transport_text(), "00:00 / 00:00");
    }

    #[test]
    fn set_current_ignores_non_finite_values() {
        let mut position = Position::new(10.0);
        position.set_current(3.0);
        position.set_current(f64::NAN);
        assert_abs_diff_eq!(position.current_secs(), 3.0);
    }
}
