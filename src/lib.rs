//! Noir Casebook
//!
//! An interactive-fiction engine for branching detective investigations.
//! A generation service hands the engine a complete case graph (crime,
//! characters, clues, scenes); the engine drives one player session through
//! it: choices are recorded, clues are discovered, gated choices unlock,
//! and the session resolves to one of several graded endings.
//!
//! # Game Mechanics
//!
//! - **Scenes & Choices**: a case is a graph of narrative scenes connected
//!   by labeled choice edges
//! - **Gating**: some choices only unlock once a prerequisite clue is found
//! - **Red Herrings**: decoy clues pad the clue log but never count toward
//!   completion
//! - **Endings**: terminal scenes grade the playthrough as correct,
//!   incorrect, incomplete, or partial
//!
//! # Architecture
//!
//! - `model` - Static case content: crime, characters, clues, scenes, and
//!   the validated case graph
//! - `engine` - Per-playthrough session state machine: the choice reducer,
//!   gating, and the ending/progress resolver
//! - `profile` - Downstream detective profile and case-earnings bookkeeping,
//!   fed by session summaries

pub mod engine;
pub mod model;
pub mod profile;

pub use engine::Session;
pub use model::CaseGraph;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the engine
pub type Result<T> = anyhow::Result<T>;
