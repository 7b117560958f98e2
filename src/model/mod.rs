//! Data structures for case content
//!
//! Defines the crime, characters, clues, scenes, and the validated case
//! graph. Everything here is produced once by the generation service and is
//! read-only for the lifetime of a session.

pub mod clue;
pub mod crime;
pub mod graph;
pub mod scene;

pub use clue::*;
pub use crime::*;
pub use graph::*;
pub use scene::*;

use serde::{Deserialize, Serialize};

/// Atmosphere tag for a scene, used by the presentation layer for styling
/// and soundscape selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Neutral,
    Tense,
    Mysterious,
    Dramatic,
    Calm,
    Dangerous,
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Neutral
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Neutral => write!(f, "neutral"),
            Mood::Tense => write!(f, "tense"),
            Mood::Mysterious => write!(f, "mysterious"),
            Mood::Dramatic => write!(f, "dramatic"),
            Mood::Calm => write!(f, "calm"),
            Mood::Dangerous => write!(f, "dangerous"),
        }
    }
}

/// Grade assigned to a terminal scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingType {
    /// The player accused the right culprit
    Correct,
    /// The player accused the wrong person
    Incorrect,
    /// The investigation fizzled out before an accusation
    Incomplete,
    /// Right culprit, wrong motive (or missing key evidence)
    Partial,
}

impl EndingType {
    /// Whether this ending counts as solving the case
    pub fn is_success(&self) -> bool {
        matches!(self, EndingType::Correct)
    }
}

impl std::fmt::Display for EndingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndingType::Correct => write!(f, "CASE CLOSED"),
            EndingType::Incorrect => write!(f, "WRONG ACCUSATION"),
            EndingType::Incomplete => write!(f, "CASE GONE COLD"),
            EndingType::Partial => write!(f, "PARTIAL SOLVE"),
        }
    }
}

/// How much a clue matters to cracking the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Minor,
    Important,
    Critical,
}

impl Importance {
    pub fn symbol(&self) -> &'static str {
        match self {
            Importance::Minor => "◆",
            Importance::Important => "▲",
            Importance::Critical => "⬤",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Importance::Minor => write!(f, "MINOR"),
            Importance::Important => write!(f, "IMPORTANT"),
            Importance::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A character's part in the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterRole {
    Suspect,
    Witness,
    Victim,
    Detective,
    Informant,
}

impl std::fmt::Display for CharacterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterRole::Suspect => write!(f, "Suspect"),
            CharacterRole::Witness => write!(f, "Witness"),
            CharacterRole::Victim => write!(f, "Victim"),
            CharacterRole::Detective => write!(f, "Detective"),
            CharacterRole::Informant => write!(f, "Informant"),
        }
    }
}
