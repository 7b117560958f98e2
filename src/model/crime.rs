//! The crime record and the cast of characters

use super::CharacterRole;
use serde::{Deserialize, Serialize};

/// The crime at the heart of a case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crime {
    pub id: String,

    /// "murder", "theft", "blackmail", ...
    #[serde(rename = "type")]
    pub crime_type: String,

    pub title: String,

    /// Name of the victim (the full character record, if any, lives in the
    /// character roster)
    pub victim: String,

    pub location: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub motive: Option<String>,

    /// One-paragraph setup read to the player before the first scene
    pub synopsis: String,
}

/// Someone involved in the case
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: CharacterRole,
    pub description: String,

    /// Voice/personality notes for dialogue generation
    pub personality: String,

    /// What they are hiding, if anything
    #[serde(default)]
    pub secret: Option<String>,

    #[serde(default)]
    pub alibi: Option<String>,

    /// Set on exactly one character by the generator; hidden from the
    /// presentation layer until the ending
    #[serde(default)]
    pub is_guilty: bool,
}
