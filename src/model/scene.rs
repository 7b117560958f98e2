//! Scenes and the choice edges between them

use super::{EndingType, Mood};
use serde::{Deserialize, Serialize};

/// A directed, labeled, conditionally-traversable edge between scenes.
///
/// Early generated content used `leadsTo`/`requiresClue`/`revealsClue`; the
/// serde aliases fold those into the canonical names at parse time, so the
/// rest of the engine only ever sees one schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,

    /// Text shown on the choice button
    pub text: String,

    /// Destination scene. None means a reflective choice: flavor dialogue
    /// that stays on the current scene.
    #[serde(default, alias = "leadsTo")]
    pub next_scene_id: Option<String>,

    /// Clue that must already be discovered before this choice unlocks
    #[serde(default, alias = "requiresClue")]
    pub requires_clue_id: Option<String>,

    /// Clue discovered by taking this choice
    #[serde(default, alias = "revealsClue")]
    pub reveals_clue_id: Option<String>,

    /// Narration appended after the choice is taken
    #[serde(default)]
    pub consequence: Option<String>,
}

/// A narrative node the player occupies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub location: String,

    /// The scene's narration text
    pub narrative: String,

    /// Ids of characters present in this scene
    #[serde(default)]
    pub characters: Vec<String>,

    /// Ordered: presentation renders these top to bottom
    pub choices: Vec<Choice>,

    #[serde(default)]
    pub mood: Mood,

    /// Terminal scene: reaching it ends the session
    #[serde(default)]
    pub is_ending: bool,

    /// Grade for this ending. Missing on an ending scene reads as
    /// `Incomplete` rather than rejecting the content.
    #[serde(default)]
    pub ending_type: Option<EndingType>,

    /// Entering this scene moves the session into the accusation phase.
    /// Legacy content marks these only by scene id; the graph loader fills
    /// the flag in for those.
    #[serde(default)]
    pub is_accusation: bool,
}

impl Scene {
    /// Find a choice on this scene by id
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// The grade this scene assigns, with the documented fallback for
    /// ending scenes that never declare one.
    pub fn ending(&self) -> Option<EndingType> {
        if self.is_ending {
            Some(self.ending_type.unwrap_or(EndingType::Incomplete))
        } else {
            None
        }
    }
}
