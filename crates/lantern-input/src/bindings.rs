//! Viewer actions and their key bindings.
//!
//! One physical key per action, serializable to RON so users can rebind.
//! Movement actions are hold-style; the rest are edge-triggered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Serde helper for [`KeyCode`], which has no native serde support.
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    /// Serialize a [`KeyCode`] as its debug string (e.g., `"KeyW"`).
    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        format!("{code:?}").serialize(s)
    }

    /// Deserialize a [`KeyCode`] from its debug string.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        string_to_keycode(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }

    fn string_to_keycode(s: &str) -> Option<KeyCode> {
        // Matches the Debug output of the KeyCode variants a viewer binding
        // can reasonably use.
        Some(match s {
            "KeyA" => KeyCode::KeyA,
            "KeyD" => KeyCode::KeyD,
            "KeyE" => KeyCode::KeyE,
            "KeyF" => KeyCode::KeyF,
            "KeyL" => KeyCode::KeyL,
            "KeyQ" => KeyCode::KeyQ,
            "KeyS" => KeyCode::KeyS,
            "KeyT" => KeyCode::KeyT,
            "KeyW" => KeyCode::KeyW,
            "Digit1" => KeyCode::Digit1,
            "Digit2" => KeyCode::Digit2,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            "Tab" => KeyCode::Tab,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ControlLeft" => KeyCode::ControlLeft,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            _ => return None,
        })
    }
}

/// Wrapper so the HashMap values can use the serde helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct BoundKey(#[serde(with = "keycode_serde")] KeyCode);

/// Semantic viewer actions bindable to physical keys.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ViewerAction {
    /// Walk forward (hold).
    MoveForward,
    /// Walk backward (hold).
    MoveBack,
    /// Strafe left (hold).
    MoveLeft,
    /// Strafe right (hold).
    MoveRight,
    /// Flip the lamp's requested state.
    ToggleLamp,
    /// Switch to the first-person camera policy.
    FirstPerson,
    /// Switch to the third-person camera policy.
    ThirdPerson,
    /// Quit the viewer.
    Quit,
}

/// Action-to-key table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: HashMap<ViewerAction, BoundKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(ViewerAction::MoveForward, BoundKey(KeyCode::KeyW));
        bindings.insert(ViewerAction::MoveBack, BoundKey(KeyCode::KeyS));
        bindings.insert(ViewerAction::MoveLeft, BoundKey(KeyCode::KeyA));
        bindings.insert(ViewerAction::MoveRight, BoundKey(KeyCode::KeyD));
        bindings.insert(ViewerAction::ToggleLamp, BoundKey(KeyCode::KeyL));
        bindings.insert(ViewerAction::FirstPerson, BoundKey(KeyCode::Digit1));
        bindings.insert(ViewerAction::ThirdPerson, BoundKey(KeyCode::Digit2));
        bindings.insert(ViewerAction::Quit, BoundKey(KeyCode::Escape));
        Self { bindings }
    }
}

impl KeyBindings {
    /// Replace the key for an action.
    pub fn bind(&mut self, action: ViewerAction, code: KeyCode) {
        self.bindings.insert(action, BoundKey(code));
    }

    /// The key currently bound to an action, if any.
    #[must_use]
    pub fn key_for(&self, action: ViewerAction) -> Option<KeyCode> {
        self.bindings.get(&action).map(|b| b.0)
    }

    /// True while the action's key is held down.
    #[must_use]
    pub fn is_held(&self, action: ViewerAction, keyboard: &KeyboardState) -> bool {
        self.key_for(action).is_some_and(|code| keyboard.is_held(code))
    }

    /// True only during the frame the action's key was pressed.
    #[must_use]
    pub fn just_activated(&self, action: ViewerAction, keyboard: &KeyboardState) -> bool {
        self.key_for(action)
            .is_some_and(|code| keyboard.just_pressed(code))
    }

    /// Serialize to RON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON.
    ///
    /// # Errors
    /// Returns an error if the RON string is malformed or names an unknown key.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}
