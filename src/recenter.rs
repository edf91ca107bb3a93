//! Open-loop return of the pointer to the middle of the screen.
//!
//! Drives the pointer into the top-left corner with full-scale moves,
//! then back out by fixed counts. Dead reckoning only: pointer
//! acceleration, clamping or a multi-monitor layout on the host will
//! land it somewhere else.

use crate::error::Error;
use crate::hid::emitter::HidEmitter;
use crate::hid::keyboard::Key;
use crate::hid::mouse::{MouseButton, STEP_MAX, STEP_MIN};
use crate::ports::HidOutputPort;
use core::iter;

/// Number of full-scale moves in each phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RecenterConfig {
    /// Moves toward the left edge.
    pub left: u8,
    /// Moves toward the top edge.
    pub up: u8,
    /// Moves back right to the horizontal middle.
    pub right: u8,
    /// Moves back down to the vertical middle.
    pub down: u8,
}

impl RecenterConfig {
    pub const fn total_moves(&self) -> usize {
        self.left as usize + self.up as usize + self.right as usize + self.down as usize
    }

    /// The `(dx, dy)` moves of the sequence, in order.
    pub fn moves(&self) -> impl Iterator<Item = (i8, i8)> {
        iter::repeat((STEP_MIN, 0))
            .take(self.left as usize)
            .chain(iter::repeat((0, STEP_MIN)).take(self.up as usize))
            .chain(iter::repeat((STEP_MAX, 0)).take(self.right as usize))
            .chain(iter::repeat((0, STEP_MAX)).take(self.down as usize))
    }
}

/// Drop everything held, cancel with Escape, then run the move sequence.
///
/// Runs to completion; nothing is read from the inputs meanwhile.
pub async fn run<O: HidOutputPort>(
    hid: &mut HidEmitter<O>,
    config: &RecenterConfig,
) -> Result<(), Error> {
    hid.release_all().await?;
    hid.release_button(MouseButton::Middle).await?;
    hid.release_button(MouseButton::Left).await?;
    hid.write_key(Key::Escape).await?;

    for (dx, dy) in config.moves() {
        hid.move_by(dx, dy, 0).await?;
    }
    Ok(())
}
