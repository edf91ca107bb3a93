//! Button debouncing.
//!
//! A level that differs from the previous debounced level is only
//! trusted after a short settle time: the pin is read again and the
//! second reading wins. A glitch shorter than the settle time that
//! returns to the previous level is therefore rejected.

use crate::error::Error;
use crate::input::Button;
use crate::ports::InputPort;
use embedded_hal_async::delay::DelayNs;

/// Logic level of a digital input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Read `button`, re-reading after `settle_ms` if it moved away from `last`.
///
/// Does not store the result; the caller carries it into the next cycle.
pub async fn debounce<I, D>(
    last: Level,
    port: &mut I,
    button: Button,
    delay: &mut D,
    settle_ms: u32,
) -> Result<Level, Error>
where
    I: InputPort,
    D: DelayNs,
{
    let current = port.read_button(button)?;
    if current == last {
        return Ok(current);
    }

    delay.delay_ms(settle_ms).await;
    port.read_button(button)
}
