//! Character asset handling: clip selection and the placeholder slot.
//!
//! The character loads in the background, so the world starts with a
//! placeholder capsule and swaps in the rigged model when it arrives.

use std::path::PathBuf;

use crate::summary::SceneSummary;

/// The idle and walk clips chosen from a character's animation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipSelection {
    /// Clip played while standing still.
    pub idle: String,
    /// Clip played while moving.
    pub walk: String,
}

/// Pick locomotion clips from the character's animation names.
///
/// The first clip is idle. The walk clip is the first whose name contains
/// "walk", "run", or "locomotion" (case-insensitive); failing that, the
/// second clip; failing that, the idle clip doubles as walk. Returns `None`
/// when the asset has no clips at all.
#[must_use]
pub fn select_locomotion_clips(clip_names: &[String]) -> Option<ClipSelection> {
    let idle = clip_names.first()?.clone();

    let by_name = clip_names.iter().find(|name| {
        let lower = name.to_lowercase();
        lower.contains("walk") || lower.contains("run") || lower.contains("locomotion")
    });
    let walk = by_name
        .or_else(|| clip_names.get(1))
        .unwrap_or(&idle)
        .clone();

    Some(ClipSelection { idle, walk })
}

/// What currently stands in for the player character.
#[derive(Clone, Debug)]
pub enum CharacterSlot {
    /// Load still in flight. A simple capsule is shown.
    Placeholder,
    /// The rigged model is in, with its clips chosen.
    Loaded {
        /// Path the model was loaded from.
        path: PathBuf,
        /// Chosen idle and walk clips, when the asset has any.
        clips: Option<ClipSelection>,
    },
}

impl CharacterSlot {
    /// Build the loaded slot from a character summary.
    #[must_use]
    pub fn from_summary(path: PathBuf, summary: &SceneSummary) -> Self {
        Self::Loaded {
            path,
            clips: select_locomotion_clips(&summary.clip_names),
        }
    }

    /// True once the rigged model has replaced the placeholder.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

impl Default for CharacterSlot {
    fn default() -> Self {
        Self::Placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_walk_clip_matched_by_name() {
        let clips = select_locomotion_clips(&names(&["Idle", "Armature|Walking", "Wave"]));
        let clips = clips.unwrap();
        assert_eq!(clips.idle, "Idle");
        assert_eq!(clips.walk, "Armature|Walking");
    }

    #[test]
    fn test_walk_name_match_is_case_insensitive() {
        let clips = select_locomotion_clips(&names(&["Pose", "Fast_RUN"])).unwrap();
        assert_eq!(clips.walk, "Fast_RUN");
    }

    #[test]
    fn test_second_clip_is_fallback_walk() {
        let clips = select_locomotion_clips(&names(&["ClipA", "ClipB", "ClipC"])).unwrap();
        assert_eq!(clips.idle, "ClipA");
        assert_eq!(clips.walk, "ClipB");
    }

    #[test]
    fn test_single_clip_serves_both_states() {
        let clips = select_locomotion_clips(&names(&["Only"])).unwrap();
        assert_eq!(clips.idle, "Only");
        assert_eq!(clips.walk, "Only");
    }

    #[test]
    fn test_no_clips_yields_none() {
        assert!(select_locomotion_clips(&[]).is_none());
    }
}
