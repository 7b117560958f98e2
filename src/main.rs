//! Noir Casebook headless case runner
//!
//! Loads a generated case file, validates it, and auto-plays it to an
//! ending. Useful for smoke-testing generated content before it ships to
//! players.

use std::collections::HashSet;

use anyhow::{bail, Context};
use noir_casebook::engine::GamePhase;
use noir_casebook::profile::DetectiveProfile;
use noir_casebook::{CaseGraph, Session};

/// Hard stop for pathological graphs the policy below cannot escape.
const MAX_MOVES: usize = 200;

/// Drive a fresh session to an ending.
///
/// Policy: take the first selectable choice not yet tried on this scene;
/// once a scene's choices are exhausted, fall back to the first selectable
/// choice that navigates somewhere other than the current scene. Reflective
/// and self-edge choices get tried exactly once each, so flavor dialogue
/// cannot pin the runner in place.
fn auto_play(graph: &CaseGraph) -> noir_casebook::Result<Session> {
    let mut session = Session::new(graph);
    let mut taken: HashSet<(String, String)> = HashSet::new();

    for _ in 0..MAX_MOVES {
        if session.phase == GamePhase::Ending {
            return Ok(session);
        }

        let scene = session.current_scene(graph)?;
        println!("── {} ({}) ──", scene.title, scene.mood);

        let views = session.choice_views(graph)?;
        let fresh = views
            .iter()
            .find(|v| v.selectable && !taken.contains(&(scene.id.clone(), v.choice.id.clone())));
        let pick = fresh.or_else(|| {
            views.iter().find(|v| {
                v.selectable
                    && v.choice
                        .next_scene_id
                        .as_deref()
                        .is_some_and(|dest| dest != scene.id)
            })
        });
        let Some(view) = pick else {
            bail!(
                "scene {} has no selectable way forward, session is stuck",
                scene.id
            );
        };

        let choice_id = view.choice.id.clone();
        taken.insert((scene.id.clone(), choice_id.clone()));

        let outcome = session.advance(graph, &choice_id)?;
        if let Some(clue_id) = &outcome.revealed_clue {
            if let Some(clue) = graph.find_clue(clue_id) {
                match clue.importance {
                    Some(tier) => println!("  {} clue found: {}", tier.symbol(), clue.name),
                    None => println!("  ◦ clue found: {}", clue.name),
                }
            }
        }
    }

    bail!("gave up after {MAX_MOVES} moves; case likely has a choice loop")
}

fn main() -> noir_casebook::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: noir-casebook <case.json>")?;
    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let graph = CaseGraph::from_json(&raw).context("case failed validation")?;

    let crime = graph.crime();
    println!("╔══════════════════════════════════════════════╗");
    println!("  {} ({})", crime.title, crime.crime_type);
    println!("  {}", crime.location);
    println!("╚══════════════════════════════════════════════╝");
    println!("{}\n", crime.synopsis);

    let mut session = auto_play(&graph)?;

    let summary = session.emit_summary(&graph)?;
    if let Some(ending) = summary.ending {
        println!("\n═══ {ending} ═══");
    }
    println!(
        "clues: {}/{}  progress: {}%  moves: {}",
        summary.clues_found,
        summary.total_clues,
        session.progress(&graph),
        session.choices_made.len()
    );
    if let Some(motive) = graph.motive_explanation() {
        println!("{motive}");
    }

    let mut profile = DetectiveProfile::new("Smoke Tester");
    let earned = profile.record_case(&summary).money_earned;
    println!(
        "payout: ${earned}  ({} at level {})",
        profile.name, profile.level
    );

    Ok(())
}
