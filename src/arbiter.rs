//! Per-cycle action selection.
//!
//! Exactly one action is taken per active cycle, first match wins:
//!
//! 1. zoom stick off-center      → wheel
//! 2. incline stick off-center   → Shift + middle-drag
//! 3. directional button held    → middle-drag by a fixed step
//! 4. previous cycle moved       → recenter
//! 5. otherwise                  → nothing

use crate::hid::mouse::clamp_step;

/// Directional buttons, `true` while held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionalButtons {
    pub down: bool,
    pub up: bool,
    pub right: bool,
    pub left: bool,
}

impl DirectionalButtons {
    pub fn any(&self) -> bool {
        self.down || self.up || self.right || self.left
    }

    /// Pointer step for the held buttons.
    ///
    /// Opposite buttons held together resolve to Up and Left.
    pub fn vector(&self, step: i8) -> (i8, i8) {
        let mut dx = 0;
        let mut dy = 0;
        if self.down {
            dy = step;
        }
        if self.up {
            dy = -step;
        }
        if self.right {
            dx = step;
        }
        if self.left {
            dx = -step;
        }
        (dx, dy)
    }
}

/// Everything the arbiter looks at in one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConditionedInputs {
    /// Dead-zoned vertical distance of the zoom stick.
    pub zoom: i16,
    pub incline_x: i16,
    pub incline_y: i16,
    pub buttons: DirectionalButtons,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Zoom { wheel: i8 },
    Incline { dx: i8, dy: i8 },
    Nudge { dx: i8, dy: i8 },
    Recenter,
    Idle,
}

impl Action {
    /// Whether this action counts as pointer activity for the recenter latch.
    pub fn is_motion(&self) -> bool {
        matches!(
            self,
            Action::Zoom { .. } | Action::Incline { .. } | Action::Nudge { .. }
        )
    }
}

/// Wheel delta for a zoom distance: half, truncated toward zero.
pub fn zoom_wheel(distance: i16) -> i8 {
    clamp_step(distance / 2)
}

pub fn arbitrate(inputs: &ConditionedInputs, was_moved: bool, step: i8) -> Action {
    if inputs.zoom != 0 {
        return Action::Zoom {
            wheel: zoom_wheel(inputs.zoom),
        };
    }

    if inputs.incline_x != 0 || inputs.incline_y != 0 {
        return Action::Incline {
            dx: clamp_step(inputs.incline_x),
            dy: clamp_step(inputs.incline_y),
        };
    }

    if inputs.buttons.any() {
        let (dx, dy) = inputs.buttons.vector(step);
        return Action::Nudge { dx, dy };
    }

    if was_moved {
        Action::Recenter
    } else {
        Action::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STEP_MOVE;

    fn buttons(down: bool, up: bool, right: bool, left: bool) -> DirectionalButtons {
        DirectionalButtons { down, up, right, left }
    }

    #[test]
    fn zoom_halves_toward_zero() {
        assert_eq!(zoom_wheel(6), 3);
        assert_eq!(zoom_wheel(3), 1);
        assert_eq!(zoom_wheel(-3), -1);
        assert_eq!(zoom_wheel(1), 0);
        assert_eq!(zoom_wheel(1000), 127);
        assert_eq!(zoom_wheel(-1000), -127);
    }

    #[test]
    fn zoom_wins_over_everything() {
        let inputs = ConditionedInputs {
            zoom: 6,
            incline_x: 3,
            incline_y: -2,
            buttons: buttons(true, false, true, false),
        };
        assert_eq!(arbitrate(&inputs, false, STEP_MOVE), Action::Zoom { wheel: 3 });
    }

    #[test]
    fn incline_wins_over_buttons() {
        let inputs = ConditionedInputs {
            incline_x: 3,
            incline_y: -2,
            buttons: buttons(true, false, false, false),
            ..Default::default()
        };
        assert_eq!(
            arbitrate(&inputs, true, STEP_MOVE),
            Action::Incline { dx: 3, dy: -2 }
        );
    }

    #[test]
    fn single_axis_incline_counts() {
        let inputs = ConditionedInputs {
            incline_y: 2,
            ..Default::default()
        };
        assert_eq!(
            arbitrate(&inputs, false, STEP_MOVE),
            Action::Incline { dx: 0, dy: 2 }
        );
    }

    #[test]
    fn down_button_nudges_down() {
        let inputs = ConditionedInputs {
            buttons: buttons(true, false, false, false),
            ..Default::default()
        };
        assert_eq!(
            arbitrate(&inputs, false, STEP_MOVE),
            Action::Nudge { dx: 0, dy: STEP_MOVE }
        );
    }

    #[test]
    fn diagonal_buttons_combine() {
        assert_eq!(buttons(false, true, true, false).vector(4), (4, -4));
        assert_eq!(buttons(true, false, false, true).vector(4), (-4, 4));
    }

    #[test]
    fn opposite_buttons_resolve_to_up_and_left() {
        assert_eq!(buttons(true, true, false, false).vector(4), (0, -4));
        assert_eq!(buttons(false, false, true, true).vector(4), (-4, 0));
    }

    #[test]
    fn rest_after_motion_recenters() {
        let inputs = ConditionedInputs::default();
        assert_eq!(arbitrate(&inputs, true, STEP_MOVE), Action::Recenter);
        assert_eq!(arbitrate(&inputs, false, STEP_MOVE), Action::Idle);
    }

    #[test]
    fn only_pointer_actions_are_motion() {
        assert!(Action::Zoom { wheel: 0 }.is_motion());
        assert!(Action::Incline { dx: 1, dy: 0 }.is_motion());
        assert!(Action::Nudge { dx: 0, dy: 4 }.is_motion());
        assert!(!Action::Recenter.is_motion());
        assert!(!Action::Idle.is_motion());
    }
}
