//! Detective profile and case-earnings bookkeeping
//!
//! The downstream consumer of [`SessionSummary`]: payout, experience, and
//! the ledger of completed cases. Everything here is plain serde-friendly
//! state; where the host durably stores it is the host's business.

use crate::engine::SessionSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat payout for any solved case
const BASE_REWARD: u32 = 100;

/// Max bonus for a full clue sweep
const CLUE_BONUS_MAX: u32 = 50;

/// Experience needed per detective level
const XP_PER_LEVEL: u32 = 500;

/// Payout for a solved case. Deterministic: base reward, plus a clue bonus
/// proportional to real clues found, plus a flat time-tier bonus.
/// A failed case pays nothing.
pub fn case_reward(summary: &SessionSummary) -> u32 {
    if !summary.success {
        return 0;
    }

    let clue_bonus = if summary.total_clues > 0 {
        (CLUE_BONUS_MAX as f64 * summary.clues_found as f64 / summary.total_clues as f64).floor()
            as u32
    } else {
        0
    };

    let time_bonus = match summary.elapsed_secs {
        s if s < 300 => 100,
        s if s < 600 => 50,
        s if s < 1200 => 25,
        _ => 0,
    };

    BASE_REWARD + clue_bonus + time_bonus
}

/// One finished case in the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedCase {
    pub id: Uuid,
    pub crime_title: String,
    pub crime_type: String,
    pub date_completed: DateTime<Utc>,
    pub time_taken_secs: i64,
    pub money_earned: u32,
    pub was_successful: bool,
    pub clues_found: u32,
    pub total_clues: u32,
}

/// Persistent player record across cases
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectiveProfile {
    pub id: Uuid,
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub money: u32,
    pub cases_solved: u32,
    pub cases_failed: u32,
    pub total_earnings: u32,
    pub created_at: DateTime<Utc>,

    /// Completed cases, newest first
    pub case_history: Vec<CompletedCase>,
}

impl DetectiveProfile {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level: 1,
            experience: 0,
            money: 0,
            cases_solved: 0,
            cases_failed: 0,
            total_earnings: 0,
            created_at: Utc::now(),
            case_history: Vec::new(),
        }
    }

    /// Book one session summary into the profile: pay out, accrue
    /// experience, relevel, and prepend the case to the history.
    pub fn record_case(&mut self, summary: &SessionSummary) -> &CompletedCase {
        let earned = case_reward(summary);

        if summary.success {
            self.cases_solved += 1;
        } else {
            self.cases_failed += 1;
        }
        self.money += earned;
        self.total_earnings += earned;
        self.experience += earned;
        self.level = 1 + self.experience / XP_PER_LEVEL;

        log::info!(
            "detective {}: '{}' booked, ${earned}, level {}",
            self.name,
            summary.crime_title,
            self.level
        );

        let case = CompletedCase {
            id: Uuid::new_v4(),
            crime_title: summary.crime_title.clone(),
            crime_type: summary.crime_type.clone(),
            date_completed: Utc::now(),
            time_taken_secs: summary.elapsed_secs,
            money_earned: earned,
            was_successful: summary.success,
            clues_found: summary.clues_found,
            total_clues: summary.total_clues,
        };
        self.case_history.insert(0, case);
        &self.case_history[0]
    }

    /// Wipe the record and start over at level 1. Whole-value replacement,
    /// same as a session reset.
    pub fn reset(&mut self) {
        *self = DetectiveProfile::new(&self.name);
    }
}
