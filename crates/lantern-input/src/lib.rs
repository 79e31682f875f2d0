//! Keyboard input for the Lantern viewer: frame-coherent key state plus a
//! serializable action-binding table, sampled into the simulation core's
//! [`MoveIntent`] once per tick.

pub mod bindings;
pub mod keyboard;

pub use bindings::{KeyBindings, ViewerAction};
pub use keyboard::KeyboardState;

use lantern_sim::MoveIntent;

/// Sample the four held movement actions into a [`MoveIntent`].
///
/// Call once per tick, before `frame_update`.
#[must_use]
pub fn sample_move_intent(bindings: &KeyBindings, keyboard: &KeyboardState) -> MoveIntent {
    MoveIntent {
        forward: bindings.is_held(ViewerAction::MoveForward, keyboard),
        back: bindings.is_held(ViewerAction::MoveBack, keyboard),
        left: bindings.is_held(ViewerAction::MoveLeft, keyboard),
        right: bindings.is_held(ViewerAction::MoveRight, keyboard),
    }
}
