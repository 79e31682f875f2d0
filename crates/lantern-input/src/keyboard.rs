//! Frame-coherent keyboard state over winit physical key codes.
//!
//! Physical codes keep WASD in place regardless of keyboard layout. Held
//! keys drive continuous movement; `just_pressed` drives edge-triggered
//! toggles (lamp, camera mode) and is cleared at the end of each frame.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Tracks held and just-pressed keys across a frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// A state with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit [`KeyEvent`]. Repeat events are ignored so a held key
    /// registers `just_pressed` exactly once.
    pub fn process_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
    }

    /// Mark a key as pressed. Used by event handling and by tests.
    pub fn press(&mut self, code: KeyCode) {
        if self.held.insert(code) {
            self.just_pressed.insert(code);
        }
    }

    /// Mark a key as released.
    pub fn release(&mut self, code: KeyCode) {
        self.held.remove(&code);
    }

    /// True while the key is held down.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// True only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&code)
    }

    /// Clear the just-pressed set. Call at the end of each frame.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}
