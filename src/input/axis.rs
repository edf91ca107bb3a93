//! Analog joystick axis conditioning.
//!
//! A raw reading in `0..=ADC_MAX` is linearly mapped into `0..=range`,
//! re-centered, and zeroed inside the dead zone:
//!
//! ```text
//! mapped   = raw * range / ADC_MAX          (integer, truncating)
//! distance = mapped - center
//! distance = 0   if |distance| < threshold
//! ```

use crate::config::ADC_MAX;
use crate::input::{AnalogChannel, AnalogSample};

/// Output range, resting point and dead zone of one joystick axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Upper bound of the mapped reading (lower bound is 0).
    pub range: i16,
    /// Mapped value of a joystick at rest.
    pub center: i16,
    /// Distances strictly below this magnitude are reported as 0.
    pub threshold: i16,
}

impl AxisConfig {
    /// Rest at the middle of the range, dead zone of a quarter range.
    pub const fn from_range(range: i16) -> Self {
        Self {
            range,
            center: range / 2,
            threshold: range / 4,
        }
    }

    /// Map a raw ADC reading into `0..=range`.
    pub fn scale(&self, raw: u16) -> i16 {
        map_range(raw as i32, 0, ADC_MAX as i32, 0, self.range as i32) as i16
    }

    /// Signed distance from center, with the dead zone applied.
    pub fn distance(&self, raw: u16) -> i16 {
        let distance = self.scale(raw) - self.center;
        if distance.abs() < self.threshold {
            0
        } else {
            distance
        }
    }
}

/// Linear re-mapping with truncating integer division.
///
/// Values outside `in_min..=in_max` extrapolate rather than clamp.
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Dead-zone-filtered distance from center of one channel of a sample.
pub fn read_axis(sample: &AnalogSample, channel: AnalogChannel, config: &AxisConfig) -> i16 {
    config.distance(sample.get(channel))
}
