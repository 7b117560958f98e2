//! Session state machine
//!
//! One [`Session`] is one player's run through a fixed [`CaseGraph`]. The
//! graph never changes; every bit of mutable playthrough state lives here,
//! and the only thing that mutates it is [`Session::advance`].

pub mod gating;
pub mod resolver;

pub use gating::{is_selectable, ChoiceView};
pub use resolver::SessionSummary;

use crate::model::{CaseGraph, EndingType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where the player is in the arc of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Opening scene, before the first real move
    Intro,
    /// Main loop: poking around, gathering clues
    Investigation,
    /// Confronting a suspect
    Accusation,
    /// Terminal. No further moves are accepted.
    Ending,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Intro => write!(f, "intro"),
            GamePhase::Investigation => write!(f, "investigation"),
            GamePhase::Accusation => write!(f, "accusation"),
            GamePhase::Ending => write!(f, "ending"),
        }
    }
}

/// Usage errors: bad input to a live session. The session is left exactly
/// as it was, never half-updated.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("choice {choice_id} does not belong to scene {scene_id}")]
    UnknownChoice { scene_id: String, choice_id: String },

    #[error("choice {choice_id} is locked until clue {required_clue} is discovered")]
    ChoiceLocked {
        choice_id: String,
        required_clue: String,
    },

    #[error("session has already ended")]
    SessionEnded,

    #[error("case is still open, no summary to emit")]
    CaseStillOpen,

    #[error("session summary was already emitted")]
    SummaryAlreadyEmitted,

    /// Session points at a scene the graph does not contain. Only possible
    /// when a session is driven against the wrong graph.
    #[error("scene {0} not found in case graph")]
    UnknownScene(String),
}

/// What one `advance` call did, for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// Clue newly discovered by this choice, if any
    pub revealed_clue: Option<String>,
    /// Scene the session moved to; None for a reflective choice
    pub moved_to: Option<String>,
    pub phase: GamePhase,
}

/// One player's mutable progress through a case.
///
/// A session is exclusively owned by one playthrough and driven by one
/// sequential event stream; it does no internal locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,

    /// Scene the player currently occupies
    pub current_scene_id: String,

    /// Discovery order matters for narration replay, not for scoring
    pub discovered_clue_ids: Vec<String>,

    /// Full audit trail of choice ids, including reflective choices
    pub choices_made: Vec<String>,

    /// Every scene entered, in order, entry scene first
    pub visited_scene_ids: Vec<String>,

    pub phase: GamePhase,

    /// Grade of the ending scene, once one is reached
    pub ending: Option<EndingType>,

    pub started_at: DateTime<Utc>,

    #[serde(default)]
    summary_emitted: bool,
}

impl Session {
    /// Start a fresh session pinned to the graph's entry scene.
    pub fn new(graph: &CaseGraph) -> Self {
        let entry = graph.entry_scene();
        log::info!("new session on case '{}'", graph.crime().title);
        Self {
            id: Uuid::new_v4(),
            current_scene_id: entry.id.clone(),
            discovered_clue_ids: Vec::new(),
            choices_made: Vec::new(),
            visited_scene_ids: vec![entry.id.clone()],
            phase: GamePhase::Intro,
            ending: None,
            started_at: Utc::now(),
            summary_emitted: false,
        }
    }

    /// Restart from the entry scene. The whole session value is replaced in
    /// one assignment so no observer can catch a half-reset state.
    pub fn reset(&mut self, graph: &CaseGraph) {
        *self = Session::new(graph);
    }

    /// Apply one player choice. This is the only operation that mutates a
    /// session.
    ///
    /// In order: reject if the session already ended, if the choice is not
    /// on the current scene, or if it is still gated; record the choice;
    /// reveal its clue (first discovery only, insertion order preserved);
    /// follow its edge if it has one; resolve the phase from the scene the
    /// player now stands in. All validation happens before the first write,
    /// so a rejected call leaves the session untouched.
    pub fn advance(
        &mut self,
        graph: &CaseGraph,
        choice_id: &str,
    ) -> Result<AdvanceOutcome, SessionError> {
        if self.phase == GamePhase::Ending {
            return Err(SessionError::SessionEnded);
        }

        let scene = graph
            .find_scene(&self.current_scene_id)
            .ok_or_else(|| SessionError::UnknownScene(self.current_scene_id.clone()))?;

        let choice = scene
            .choice(choice_id)
            .ok_or_else(|| SessionError::UnknownChoice {
                scene_id: scene.id.clone(),
                choice_id: choice_id.to_string(),
            })?;

        // Gates are normally filtered out by the choice list the
        // presentation renders; rejecting here too keeps a buggy caller
        // from tunneling through one.
        if let Some(required) = &choice.requires_clue_id {
            if !self.discovered_clue_ids.iter().any(|c| c == required) {
                return Err(SessionError::ChoiceLocked {
                    choice_id: choice.id.clone(),
                    required_clue: required.clone(),
                });
            }
        }

        let destination = match choice.next_scene_id.as_deref() {
            Some(target) => Some(
                graph
                    .find_scene(target)
                    .ok_or_else(|| SessionError::UnknownScene(target.to_string()))?,
            ),
            None => None,
        };

        // Validation done, now mutate
        self.choices_made.push(choice.id.clone());

        let mut revealed_clue = None;
        if let Some(clue_id) = &choice.reveals_clue_id {
            if !self.discovered_clue_ids.iter().any(|c| c == clue_id) {
                log::debug!("session {}: discovered clue {clue_id}", self.id);
                self.discovered_clue_ids.push(clue_id.clone());
                revealed_clue = Some(clue_id.clone());
            }
        }

        let mut moved_to = None;
        if let Some(dest) = destination {
            log::debug!("session {}: {} -> {}", self.id, self.current_scene_id, dest.id);
            self.current_scene_id = dest.id.clone();
            self.visited_scene_ids.push(dest.id.clone());
            moved_to = Some(dest.id.clone());
        }

        // Phase resolves against the scene the player now stands in,
        // whether or not the choice navigated. Phases never demote.
        let resolved = destination.unwrap_or(scene);
        if let Some(grade) = resolved.ending() {
            log::info!("session {}: ended ({grade})", self.id);
            self.phase = GamePhase::Ending;
            self.ending = Some(grade);
        } else if resolved.is_accusation {
            self.phase = GamePhase::Accusation;
        } else if self.phase == GamePhase::Intro {
            self.phase = GamePhase::Investigation;
        }

        Ok(AdvanceOutcome {
            revealed_clue,
            moved_to,
            phase: self.phase,
        })
    }

    /// The scene the player currently occupies
    pub fn current_scene<'a>(&self, graph: &'a CaseGraph) -> Result<&'a crate::model::Scene, SessionError> {
        graph
            .find_scene(&self.current_scene_id)
            .ok_or_else(|| SessionError::UnknownScene(self.current_scene_id.clone()))
    }

    /// Narration replay: the narrative of every visited scene, in order
    pub fn narrative_history<'a>(&self, graph: &'a CaseGraph) -> Vec<&'a str> {
        self.visited_scene_ids
            .iter()
            .filter_map(|id| graph.find_scene(id))
            .map(|s| s.narrative.as_str())
            .collect()
    }

    pub(crate) fn summary_emitted(&self) -> bool {
        self.summary_emitted
    }

    pub(crate) fn mark_summary_emitted(&mut self) {
        self.summary_emitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_move_case() -> CaseGraph {
        let case = json!({
            "crime": {
                "id": "crime-1", "type": "murder", "title": "Open and Shut",
                "victim": "A. Nobody", "location": "Room 3",
                "synopsis": "The shortest case on record."
            },
            "characters": [],
            "clues": [
                {"id": "c1", "name": "Smoking gun", "description": "Literally."}
            ],
            "scenes": [
                {
                    "id": "s0", "title": "Room 3", "location": "Room 3", "narrative": "...",
                    "choices": [
                        {"id": "only", "text": "Pick up the gun",
                         "revealsClueId": "c1", "nextSceneId": "s1"}
                    ]
                },
                {
                    "id": "s1", "title": "Done", "location": "Room 3", "narrative": "...",
                    "choices": [], "isEnding": true, "endingType": "correct"
                }
            ],
            "startingSceneId": "s0"
        });
        CaseGraph::from_json(&case.to_string()).unwrap()
    }

    #[test]
    fn one_advance_can_reveal_move_and_end() {
        let graph = one_move_case();
        let mut session = Session::new(&graph);

        let outcome = session.advance(&graph, "only").unwrap();
        assert_eq!(outcome.revealed_clue.as_deref(), Some("c1"));
        assert_eq!(outcome.moved_to.as_deref(), Some("s1"));
        assert_eq!(outcome.phase, GamePhase::Ending);

        assert_eq!(session.discovered_clue_ids, vec!["c1"]);
        assert_eq!(session.phase, GamePhase::Ending);
        assert_eq!(session.ending, Some(EndingType::Correct));
        assert_eq!(session.progress(&graph), 100);
    }

    #[test]
    fn terminal_session_rejects_advance_with_an_error() {
        let graph = one_move_case();
        let mut session = Session::new(&graph);
        session.advance(&graph, "only").unwrap();

        let err = session.advance(&graph, "only").unwrap_err();
        assert!(matches!(err, SessionError::SessionEnded));
        assert_eq!(session.choices_made, vec!["only"]);
    }

    #[test]
    fn mismatched_graph_is_an_error_not_a_panic() {
        let graph = one_move_case();
        let mut session = Session::new(&graph);

        let other = json!({
            "crime": {
                "id": "crime-2", "type": "theft", "title": "Elsewhere",
                "victim": "B. Nobody", "location": "Room 4",
                "synopsis": "A different case entirely."
            },
            "characters": [], "clues": [],
            "scenes": [
                {"id": "x0", "title": "Room 4", "location": "Room 4", "narrative": "...",
                 "choices": [{"id": "go", "text": "Leave", "nextSceneId": "x1"}]},
                {"id": "x1", "title": "Out", "location": "Street", "narrative": "...",
                 "choices": [], "isEnding": true}
            ]
        });
        let other = CaseGraph::from_json(&other.to_string()).unwrap();

        let err = session.advance(&other, "only").unwrap_err();
        assert!(matches!(err, SessionError::UnknownScene(id) if id == "s0"));
        assert!(session.choices_made.is_empty());
    }

    #[test]
    fn reset_replaces_the_whole_session_value() {
        let graph = one_move_case();
        let mut session = Session::new(&graph);
        session.advance(&graph, "only").unwrap();
        session.emit_summary(&graph).unwrap();

        session.reset(&graph);
        assert_eq!(session.phase, GamePhase::Intro);
        assert_eq!(session.current_scene_id, "s0");
        assert!(session.discovered_clue_ids.is_empty());
        assert!(session.choices_made.is_empty());
        assert!(session.ending.is_none());
        // A fresh run gets to emit its own summary again
        session.advance(&graph, "only").unwrap();
        assert!(session.emit_summary(&graph).is_ok());
    }
}
