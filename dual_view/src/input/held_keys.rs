/// Held movement/turn keys as a bit set.
///
/// Opposing keys cancel: holding both FORWARD and BACKWARD gives a zero
/// forward axis.

use bitflags::bitflags;
use crate::camera::InputIntent;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u16 {
        const FORWARD      = 1 << 0;
        const BACKWARD     = 1 << 1;
        const STRAFE_LEFT  = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
        const ASCEND       = 1 << 4;
        const DESCEND      = 1 << 5;
        const TURN_LEFT    = 1 << 6;
        const TURN_RIGHT   = 1 << 7;
        const PITCH_UP     = 1 << 8;
        const PITCH_DOWN   = 1 << 9;

        const MOVE = Self::FORWARD.bits() | Self::BACKWARD.bits()
            | Self::STRAFE_LEFT.bits() | Self::STRAFE_RIGHT.bits()
            | Self::ASCEND.bits() | Self::DESCEND.bits();
        const TURN = Self::TURN_LEFT.bits() | Self::TURN_RIGHT.bits()
            | Self::PITCH_UP.bits() | Self::PITCH_DOWN.bits();
    }
}

impl HeldKeys {
    fn axis(self, positive: HeldKeys, negative: HeldKeys) -> f32 {
        let mut value = 0.0;
        if self.contains(positive) {
            value += 1.0;
        }
        if self.contains(negative) {
            value -= 1.0;
        }
        value
    }

    /// Raw (unnormalized) movement intent.
    pub fn intent(self) -> InputIntent {
        InputIntent::new(
            self.axis(HeldKeys::STRAFE_RIGHT, HeldKeys::STRAFE_LEFT),
            self.axis(HeldKeys::FORWARD, HeldKeys::BACKWARD),
            self.axis(HeldKeys::ASCEND, HeldKeys::DESCEND),
        )
    }

    /// `(pitch, yaw)` turn axes, each in `[-1, 1]`. Positive yaw turns right.
    pub fn turn_axes(self) -> (f32, f32) {
        (
            self.axis(HeldKeys::PITCH_UP, HeldKeys::PITCH_DOWN),
            self.axis(HeldKeys::TURN_RIGHT, HeldKeys::TURN_LEFT),
        )
    }
}

#[cfg(test)]
#[path = "held_keys_tests.rs"]
mod tests;
