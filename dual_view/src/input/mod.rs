//! Input module: held key state and the key binding table.

mod held_keys;
mod key_bindings;

pub use held_keys::HeldKeys;
pub use key_bindings::{Action, KeyBindings};
