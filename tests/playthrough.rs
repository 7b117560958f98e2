//! Full playthroughs of a generated-style case file, legacy field names and
//! red herrings included.

use noir_casebook::engine::{GamePhase, SessionError};
use noir_casebook::model::EndingType;
use noir_casebook::profile::{case_reward, DetectiveProfile};
use noir_casebook::{CaseGraph, Session};
use pretty_assertions::assert_eq;

const CASE: &str = include_str!("fixtures/vanishing_violinist.json");

fn load_case() -> CaseGraph {
    CaseGraph::from_json(CASE).expect("fixture must validate")
}

#[test]
fn fixture_validates_with_legacy_field_names() {
    let graph = load_case();
    assert_eq!(graph.entry_scene().id, "scene-intro");
    assert_eq!(graph.scenes().len(), 6);
    assert_eq!(graph.real_clues().count(), 2);
    assert_eq!(graph.culprit_id(), Some("char-kessler"));

    // `leadsTo`/`revealsClue` were folded into the canonical fields at parse
    let hall = graph.find_scene("scene-hall").unwrap();
    let dressing = hall.choice("c-dressing").unwrap();
    assert_eq!(dressing.next_scene_id.as_deref(), Some("scene-hall"));
    assert_eq!(dressing.reveals_clue_id.as_deref(), Some("clue-note"));

    // Accusation scenes are flagged at load, even legacy id-only ones
    assert!(graph.find_scene("scene-accusation").unwrap().is_accusation);
}

#[test]
fn solving_the_case_end_to_end() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    assert_eq!(session.phase, GamePhase::Intro);

    // Reflective intro choice: recorded, no navigation, phase promotes
    let outcome = session.advance(&graph, "c-listen").unwrap();
    assert_eq!(outcome.moved_to, None);
    assert_eq!(session.phase, GamePhase::Investigation);
    assert_eq!(session.current_scene_id, "scene-intro");

    session.advance(&graph, "c-go").unwrap();
    session.advance(&graph, "c-dressing").unwrap(); // note (real, self-edge)
    session.advance(&graph, "c-pit").unwrap(); // scarf (red herring)
    assert_eq!(session.progress(&graph), 50);

    session.advance(&graph, "c-pawn").unwrap();
    session.advance(&graph, "c-press").unwrap(); // ticket (real)
    assert_eq!(session.progress(&graph), 100);

    session.advance(&graph, "c-confront").unwrap();
    assert_eq!(session.phase, GamePhase::Accusation);

    session.advance(&graph, "c-accuse-kessler").unwrap();
    assert_eq!(session.phase, GamePhase::Ending);
    assert_eq!(session.ending, Some(EndingType::Correct));

    // Discovery order is insertion order, decoys included
    assert_eq!(
        session.discovered_clue_ids,
        vec!["clue-note", "clue-scarf", "clue-ticket"]
    );
    assert_eq!(session.choices_made.len(), 8);

    let summary = session.emit_summary(&graph).unwrap();
    assert!(summary.success);
    assert_eq!(summary.clues_found, 2);
    assert_eq!(summary.total_clues, 2);

    let mut profile = DetectiveProfile::new("Sam Vale");
    let booked = profile.record_case(&summary);
    assert!(booked.was_successful);
    assert_eq!(booked.money_earned, case_reward(&summary));
    assert_eq!(profile.cases_solved, 1);
}

#[test]
fn wrong_accusation_grades_incorrect_and_pays_nothing() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    for choice in ["c-go", "c-dressing", "c-pawn", "c-press", "c-confront"] {
        session.advance(&graph, choice).unwrap();
    }
    session.advance(&graph, "c-accuse-dray").unwrap();

    assert_eq!(session.ending, Some(EndingType::Incorrect));
    let summary = session.emit_summary(&graph).unwrap();
    assert!(!summary.success);
    assert_eq!(case_reward(&summary), 0);

    let mut profile = DetectiveProfile::new("Sam Vale");
    profile.record_case(&summary);
    assert_eq!(profile.cases_failed, 1);
    assert_eq!(profile.money, 0);
}

#[test]
fn foreign_choice_is_rejected_without_touching_the_session() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    let before = session.clone();

    // c-press belongs to the pawnshop scene, not the intro
    let err = session.advance(&graph, "c-press").unwrap_err();
    assert!(matches!(err, SessionError::UnknownChoice { .. }));

    assert_eq!(session.current_scene_id, before.current_scene_id);
    assert_eq!(session.choices_made, before.choices_made);
    assert_eq!(session.discovered_clue_ids, before.discovered_clue_ids);
    assert_eq!(session.phase, before.phase);
}

#[test]
fn ended_session_rejects_further_advances() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    for choice in [
        "c-go",
        "c-dressing",
        "c-pawn",
        "c-press",
        "c-confront",
        "c-accuse-kessler",
    ] {
        session.advance(&graph, choice).unwrap();
    }
    let moves_at_ending = session.choices_made.len();

    let err = session.advance(&graph, "c-accuse-kessler").unwrap_err();
    assert!(matches!(err, SessionError::SessionEnded));
    assert_eq!(session.choices_made.len(), moves_at_ending);
}

#[test]
fn discovered_set_only_grows_until_reset() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    let mut last_len = 0;
    for choice in ["c-go", "c-pit", "c-dressing", "c-pit", "c-back", "c-dressing"] {
        // c-back only exists in the pawnshop; skip rejected moves
        let _ = session.advance(&graph, choice);
        assert!(session.discovered_clue_ids.len() >= last_len);
        last_len = session.discovered_clue_ids.len();
    }

    session.reset(&graph);
    assert_eq!(session.phase, GamePhase::Intro);
    assert_eq!(session.current_scene_id, "scene-intro");
    assert!(session.discovered_clue_ids.is_empty());
    assert!(session.choices_made.is_empty());
    assert!(session.ending.is_none());
}

#[test]
fn narrative_history_replays_visited_scenes_in_order() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    session.advance(&graph, "c-go").unwrap();
    session.advance(&graph, "c-pawn").unwrap();

    let history = session.narrative_history(&graph);
    assert_eq!(history.len(), 3);
    assert!(history[0].starts_with("The phone rings"));
    assert!(history[2].starts_with("The broker"));
}

#[test]
fn session_snapshot_round_trips_through_json() {
    let graph = load_case();
    let mut session = Session::new(&graph);
    session.advance(&graph, "c-go").unwrap();
    session.advance(&graph, "c-dressing").unwrap();

    let snapshot = serde_json::to_string(&session).unwrap();
    let mut restored: Session = serde_json::from_str(&snapshot).unwrap();

    assert_eq!(restored.current_scene_id, session.current_scene_id);
    assert_eq!(restored.discovered_clue_ids, session.discovered_clue_ids);
    assert_eq!(restored.phase, session.phase);

    // The restored session keeps playing where the original left off
    restored.advance(&graph, "c-pawn").unwrap();
    assert_eq!(restored.current_scene_id, "scene-pawnshop");
}
