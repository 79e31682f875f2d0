//! Idle/walk locomotion state machine.
//!
//! Two states, one guard: the accumulated movement vector was non-zero this
//! tick. The machine emits a [`ClipTransition`] exactly once per state
//! change; the external animation mixer performs the actual cross-fade, so
//! the policy is testable without a renderer. No hysteresis beyond the
//! mixer's fade.

/// Cross-fade duration between the idle and walk clips, in seconds.
pub const CROSS_FADE_SECONDS: f32 = 0.2;

/// The two locomotion clips the character rig plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionClip {
    Idle,
    Walk,
}

/// Current locomotion state. Starts idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocomotionState {
    walking: bool,
}

/// A clip change to hand to the external mixer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipTransition {
    /// Clip fading out.
    pub from: LocomotionClip,
    /// Clip fading in (reset to its start).
    pub to: LocomotionClip,
    /// Fade duration in seconds.
    pub fade_seconds: f32,
}

impl LocomotionState {
    /// Feed this tick's movement guard; returns a transition on state change.
    pub fn update(&mut self, moving: bool) -> Option<ClipTransition> {
        if moving == self.walking {
            return None;
        }
        self.walking = moving;
        let (from, to) = if moving {
            (LocomotionClip::Idle, LocomotionClip::Walk)
        } else {
            (LocomotionClip::Walk, LocomotionClip::Idle)
        };
        Some(ClipTransition {
            from,
            to,
            fade_seconds: CROSS_FADE_SECONDS,
        })
    }

    /// Whether the walk clip is the active target.
    #[must_use]
    pub fn is_walking(&self) -> bool {
        self.walking
    }
}
