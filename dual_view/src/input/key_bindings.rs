/// Key bindings: physical key code to viewer action.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;
use crate::compositor::ViewportSlot;
use super::held_keys::HeldKeys;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Active while the key is held down
    Hold(HeldKeys),
    /// Cycle the mode of the camera in this slot, on key release
    CycleMode(ViewportSlot),
    /// Request shutdown, on key press
    Quit,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: FxHashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Table with no bindings.
    pub fn empty() -> Self {
        Self { bindings: FxHashMap::default() }
    }

    /// Bind `key`, returning the action it replaced.
    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.bindings.remove(&key)
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        for (key, action) in [
            (KeyCode::KeyW, Action::Hold(HeldKeys::FORWARD)),
            (KeyCode::KeyS, Action::Hold(HeldKeys::BACKWARD)),
            (KeyCode::KeyA, Action::Hold(HeldKeys::STRAFE_LEFT)),
            (KeyCode::KeyD, Action::Hold(HeldKeys::STRAFE_RIGHT)),
            (KeyCode::Space, Action::Hold(HeldKeys::ASCEND)),
            (KeyCode::ShiftLeft, Action::Hold(HeldKeys::DESCEND)),
            (KeyCode::ArrowLeft, Action::Hold(HeldKeys::TURN_LEFT)),
            (KeyCode::ArrowRight, Action::Hold(HeldKeys::TURN_RIGHT)),
            (KeyCode::ArrowUp, Action::Hold(HeldKeys::PITCH_UP)),
            (KeyCode::ArrowDown, Action::Hold(HeldKeys::PITCH_DOWN)),
            (KeyCode::KeyP, Action::CycleMode(ViewportSlot::Left)),
            (KeyCode::KeyO, Action::CycleMode(ViewportSlot::Right)),
            (KeyCode::Escape, Action::Quit),
        ] {
            bindings.bind(key, action);
        }
        bindings
    }
}

#[cfg(test)]
#[path = "key_bindings_tests.rs"]
mod tests;
