//! Player state and per-tick movement intent.

use glam::Vec3;

use crate::math::forward_from_yaw;

/// Position and facing of the player character.
///
/// Owned exclusively by the frame step; mutated at most once per tick and
/// never reset by camera-mode switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// World position in meters, feet at y = 0.
    pub position: Vec3,
    /// Facing angle in radians (yaw 0 = -Z).
    pub yaw: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0))
    }
}

impl PlayerState {
    /// Create a player at a spawn point, facing -Z.
    #[must_use]
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            yaw: 0.0,
        }
    }

    /// Horizontal unit vector the character model is facing.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }
}

/// The four held movement keys, sampled once per tick.
///
/// Independent booleans: opposing keys cancel out during
/// accumulation rather than being filtered at the input layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// True when at least one movement key is held.
    #[must_use]
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_faces_neg_z() {
        let player = PlayerState::new(Vec3::new(0.0, 0.0, 5.0));
        assert!((player.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert_eq!(player.position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_move_intent_any() {
        assert!(!MoveIntent::default().any());
        let intent = MoveIntent {
            left: true,
            ..Default::default()
        };
        assert!(intent.any());
    }
}
