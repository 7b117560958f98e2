//! Ending classification, completion scoring, and the session summary
//!
//! Scoring counts real clues only: red herrings inflate the clue log, never
//! the score. Ending classification itself lives on
//! [`Scene::ending`](crate::model::Scene::ending), since it is a property of
//! the content; everything derived from a whole session lives here.

use super::{GamePhase, Session, SessionError};
use crate::model::{CaseGraph, EndingType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The one artifact handed to the profile/economy side when a case ends.
/// The engine computes it; reward and leveling arithmetic happen downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub crime_title: String,
    pub crime_type: String,

    /// Wall-clock seconds from session start
    pub elapsed_secs: i64,

    /// Discovered real clues (red herrings excluded)
    pub clues_found: u32,

    /// Real clues in the case
    pub total_clues: u32,

    /// True only for a correct ending
    pub success: bool,

    pub ending: Option<EndingType>,
}

impl Session {
    /// Completion percentage in `[0, 100]`: discovered real clues over all
    /// real clues, rounded. Zero when the case has no real clues at all.
    pub fn progress(&self, graph: &CaseGraph) -> u8 {
        let total = graph.real_clues().count();
        if total == 0 {
            return 0;
        }
        let found = self
            .discovered_clue_ids
            .iter()
            .filter(|id| graph.find_clue(id).is_some_and(|c| c.is_real))
            .count();
        ((found as f64 / total as f64) * 100.0).round() as u8
    }

    /// Build a summary as of `now`. Pure: callable at any point for display,
    /// on a still-open session `success` is simply false and `ending` None.
    pub fn summarize_at(&self, graph: &CaseGraph, now: DateTime<Utc>) -> SessionSummary {
        let total = graph.real_clues().count() as u32;
        let found = self
            .discovered_clue_ids
            .iter()
            .filter(|id| graph.find_clue(id).is_some_and(|c| c.is_real))
            .count() as u32;
        SessionSummary {
            crime_title: graph.crime().title.clone(),
            crime_type: graph.crime().crime_type.clone(),
            elapsed_secs: (now - self.started_at).num_seconds(),
            clues_found: found,
            total_clues: total,
            success: self.ending.is_some_and(|e| e.is_success()),
            ending: self.ending,
        }
    }

    /// Build a summary as of the current wall clock.
    pub fn summarize(&self, graph: &CaseGraph) -> SessionSummary {
        self.summarize_at(graph, Utc::now())
    }

    /// Hand the summary to the downstream consumer. Rejected while the case
    /// is still open, and rejected on the second call: the profile side must
    /// see each session at most once.
    pub fn emit_summary(&mut self, graph: &CaseGraph) -> Result<SessionSummary, SessionError> {
        if self.phase != GamePhase::Ending {
            return Err(SessionError::CaseStillOpen);
        }
        if self.summary_emitted() {
            return Err(SessionError::SummaryAlreadyEmitted);
        }
        self.mark_summary_emitted();
        Ok(self.summarize(graph))
    }
}
