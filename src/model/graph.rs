//! The validated case graph
//!
//! The generation service hands over one `Investigation` payload; it gets
//! parsed and checked here, once, at the boundary. Everything downstream
//! (sessions, gating, scoring) can then assume every reference resolves.

use super::{Character, Clue, Crime, Scene};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// A case exactly as the generation service produced it. Parsed strictly,
/// then promoted to a [`CaseGraph`] by [`CaseGraph::load`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investigation {
    #[serde(default)]
    pub id: Option<String>,

    pub crime: Crime,
    pub characters: Vec<Character>,
    pub clues: Vec<Clue>,
    pub scenes: Vec<Scene>,

    /// Entry point. When absent, the first scene in source order is the
    /// defined fallback.
    #[serde(default)]
    pub starting_scene_id: Option<String>,

    /// Character id of the actual culprit
    #[serde(default, alias = "correctSuspect")]
    pub culprit_id: Option<String>,

    #[serde(default)]
    pub motive_explanation: Option<String>,
}

/// Content-integrity failures. All of these are fatal at load time: a graph
/// that fails validation never gets a session started on it.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("case payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("case has no scenes")]
    NoScenes,

    #[error("duplicate scene id: {0}")]
    DuplicateSceneId(String),

    #[error("duplicate clue id: {0}")]
    DuplicateClueId(String),

    #[error("starting scene not found: {0}")]
    UnknownStartingScene(String),

    #[error("choice {choice_id} in scene {scene_id} leads to unknown scene {target}")]
    DanglingScene {
        scene_id: String,
        choice_id: String,
        target: String,
    },

    #[error("choice {choice_id} in scene {scene_id} references unknown clue {clue_id}")]
    DanglingClue {
        scene_id: String,
        choice_id: String,
        clue_id: String,
    },

    #[error("no ending scene is reachable from {start}")]
    NoReachableEnding { start: String },
}

/// A validated, immutable case graph.
///
/// Shared and read-only: many sessions may hold a reference to the same
/// graph at once without synchronization, because nothing here mutates
/// after `load`.
#[derive(Debug, Clone)]
pub struct CaseGraph {
    investigation: Investigation,
    entry_scene_id: String,
    scene_index: HashMap<String, usize>,
    clue_index: HashMap<String, usize>,
}

impl CaseGraph {
    /// Parse a raw JSON case payload and validate it in one step.
    pub fn from_json(raw: &str) -> Result<Self, GraphError> {
        let investigation: Investigation = serde_json::from_str(raw)?;
        Self::load(investigation)
    }

    /// Validate a parsed case and build the lookup indices.
    ///
    /// Checks, in order: at least one scene, unique scene and clue ids, a
    /// resolvable entry scene, every choice edge and clue reference
    /// resolving, and at least one ending scene reachable from the entry.
    pub fn load(mut investigation: Investigation) -> Result<Self, GraphError> {
        if investigation.scenes.is_empty() {
            return Err(GraphError::NoScenes);
        }

        // Legacy content marks accusation scenes only by id
        for scene in &mut investigation.scenes {
            if scene.id.contains("accusation") || scene.id.contains("interrogation") {
                scene.is_accusation = true;
            }
        }

        let mut scene_index = HashMap::new();
        for (i, scene) in investigation.scenes.iter().enumerate() {
            if scene_index.insert(scene.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateSceneId(scene.id.clone()));
            }
        }

        let mut clue_index = HashMap::new();
        for (i, clue) in investigation.clues.iter().enumerate() {
            if clue_index.insert(clue.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateClueId(clue.id.clone()));
            }
        }

        let entry_scene_id = match &investigation.starting_scene_id {
            Some(id) => {
                if !scene_index.contains_key(id) {
                    return Err(GraphError::UnknownStartingScene(id.clone()));
                }
                id.clone()
            }
            None => investigation.scenes[0].id.clone(),
        };

        for scene in &investigation.scenes {
            for choice in &scene.choices {
                if let Some(target) = &choice.next_scene_id {
                    if !scene_index.contains_key(target) {
                        return Err(GraphError::DanglingScene {
                            scene_id: scene.id.clone(),
                            choice_id: choice.id.clone(),
                            target: target.clone(),
                        });
                    }
                }
                for clue_id in [&choice.requires_clue_id, &choice.reveals_clue_id]
                    .into_iter()
                    .flatten()
                {
                    if !clue_index.contains_key(clue_id) {
                        return Err(GraphError::DanglingClue {
                            scene_id: scene.id.clone(),
                            choice_id: choice.id.clone(),
                            clue_id: clue_id.clone(),
                        });
                    }
                }
            }
        }

        let graph = Self {
            investigation,
            entry_scene_id,
            scene_index,
            clue_index,
        };

        if !graph.ending_reachable() {
            return Err(GraphError::NoReachableEnding {
                start: graph.entry_scene_id.clone(),
            });
        }

        log::info!(
            "loaded case '{}': {} scenes, {} clues ({} real), entry {}",
            graph.investigation.crime.title,
            graph.investigation.scenes.len(),
            graph.investigation.clues.len(),
            graph.real_clues().count(),
            graph.entry_scene_id,
        );

        Ok(graph)
    }

    /// Breadth-first walk over choice edges from the entry scene. Gating is
    /// ignored here: this checks the graph's shape, not whether a given
    /// playthrough can unlock every door.
    fn ending_reachable(&self) -> bool {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(self.entry_scene_id.as_str());
        seen.insert(self.entry_scene_id.as_str());

        while let Some(id) = queue.pop_front() {
            let scene = &self.investigation.scenes[self.scene_index[id]];
            if scene.is_ending {
                return true;
            }
            for choice in &scene.choices {
                if let Some(target) = choice.next_scene_id.as_deref() {
                    if seen.insert(target) {
                        queue.push_back(target);
                    }
                }
            }
        }
        false
    }

    pub fn crime(&self) -> &Crime {
        &self.investigation.crime
    }

    pub fn characters(&self) -> &[Character] {
        &self.investigation.characters
    }

    pub fn clues(&self) -> &[Clue] {
        &self.investigation.clues
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.investigation.scenes
    }

    pub fn culprit_id(&self) -> Option<&str> {
        self.investigation.culprit_id.as_deref()
    }

    pub fn motive_explanation(&self) -> Option<&str> {
        self.investigation.motive_explanation.as_deref()
    }

    /// The scene every fresh session starts on
    pub fn entry_scene(&self) -> &Scene {
        &self.investigation.scenes[self.scene_index[&self.entry_scene_id]]
    }

    pub fn find_scene(&self, id: &str) -> Option<&Scene> {
        self.scene_index
            .get(id)
            .map(|&i| &self.investigation.scenes[i])
    }

    pub fn find_clue(&self, id: &str) -> Option<&Clue> {
        self.clue_index
            .get(id)
            .map(|&i| &self.investigation.clues[i])
    }

    /// Clues that count toward completion (everything except red herrings)
    pub fn real_clues(&self) -> impl Iterator<Item = &Clue> {
        self.investigation.clues.iter().filter(|c| c.is_real)
    }
}
