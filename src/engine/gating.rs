//! Choice gating and clue discovery
//!
//! A choice with a `requires_clue_id` stays locked until that clue shows up
//! in the session's discovered set. Selectability is recomputed from current
//! state on every call: discovery can happen in the same turn a choice
//! list is rendered, so nothing here may be cached.

use super::{Session, SessionError};
use crate::model::{CaseGraph, Choice, Clue};

/// Pure gate check: a choice is selectable unless its prerequisite clue is
/// still undiscovered.
pub fn is_selectable(choice: &Choice, session: &Session) -> bool {
    match &choice.requires_clue_id {
        Some(required) => session.discovered_clue_ids.iter().any(|c| c == required),
        None => true,
    }
}

/// A choice annotated with its current gate state, for rendering. Locked
/// choices are shown but visually disabled.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceView<'a> {
    pub choice: &'a Choice,
    pub selectable: bool,
}

impl Session {
    /// The current scene's choices, in content order, each annotated with
    /// whether it can be taken right now.
    pub fn choice_views<'a>(
        &self,
        graph: &'a CaseGraph,
    ) -> Result<Vec<ChoiceView<'a>>, SessionError> {
        let scene = self.current_scene(graph)?;
        Ok(scene
            .choices
            .iter()
            .map(|choice| ChoiceView {
                choice,
                selectable: is_selectable(choice, self),
            })
            .collect())
    }

    /// Full clue records for everything discovered so far, in discovery
    /// order. Red herrings are included; the clue log shows them too.
    pub fn discovered_clues<'a>(&self, graph: &'a CaseGraph) -> Vec<&'a Clue> {
        self.discovered_clue_ids
            .iter()
            .filter_map(|id| graph.find_clue(id))
            .collect()
    }
}
