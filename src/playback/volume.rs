// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for the transport.
//!
//! The UI exposes volume as an integer percentage slider; the decoder wants a
//! normalized float. This newtype holds the slider value and performs the
//! mapping in one place, with no feedback loop from the decoder back to the
//! UI value.

/// Maximum slider position.
pub const MAX_PERCENT: u8 = 100;

/// Slider position on load.
pub const DEFAULT_PERCENT: u8 = 100;

/// Volume slider value, guaranteed to be within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeLevel(u8);

impl VolumeLevel {
    /// Creates a new volume level, clamping to the valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(MAX_PERCENT))
    }

    /// Returns the slider value in percent.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Returns the decoder-facing volume on the `[0.0, 1.0]` scale.
    #[must_use]
    pub fn normalized(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns true if the volume is fully muted.
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == 0
    }
}

impl Default for VolumeLevel {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn maps_percent_linearly_to_normalized() {
        assert_abs_diff_eq!(VolumeLevel::new(0).normalized(), 0.0);
        assert_abs_diff_eq!(VolumeLevel::new(50).normalized(), 0.5);
        assert_abs_diff_eq!(VolumeLevel::new(100).normalized(), 1.0);
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(VolumeLevel::new(130).percent(), MAX_PERCENT);
        assert_eq!(VolumeLevel::new(30).percent(), 30);
    }

    #[test]
    fn default_is_full_volume() {
        assert_eq!(VolumeLevel::default().percent(), DEFAULT_PERCENT);
    }

    #[test]
    fn is_muted_only_at_zero() {
        assert!(VolumeLevel::new(0).is_muted());
        assert!(!VolumeLevel::new(1).is_muted());
    }
}
