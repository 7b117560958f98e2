//! Discoverable evidence items

use super::Importance;
use serde::{Deserialize, Serialize};

/// A piece of evidence the player can discover.
///
/// Clues are immutable once the graph is built; discovery is tracked on the
/// session, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clue {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Where the clue was found
    #[serde(default)]
    pub location: Option<String>,

    /// False for red herrings. Older generated content omits the field
    /// entirely, which must read as a real clue.
    #[serde(default = "default_is_real")]
    pub is_real: bool,

    #[serde(default)]
    pub importance: Option<Importance>,

    /// Character this clue points at, if any
    #[serde(default)]
    pub related_character_id: Option<String>,
}

fn default_is_real() -> bool {
    true
}

impl Clue {
    /// Red herrings show up in the clue log but never count toward
    /// completion.
    pub fn is_red_herring(&self) -> bool {
        !self.is_real
    }
}
