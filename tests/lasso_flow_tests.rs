//! End-to-End-Tests: komplette Lasso-Gesten über ein aus JSON geladenes
//! Canvas-Dokument, durch die öffentliche API.

use canvas_lasso::{
    AppState, CanvasElement, ElementMap, LassoTool, SelectionMode,
};
use glam::Vec2;
use std::sync::Arc;

fn load_fixture() -> AppState {
    let json = include_str!("fixtures/simple_canvas.json");
    let elements: Vec<CanvasElement> =
        serde_json::from_str(json).expect("fixture deserializes");
    let map: ElementMap = elements.into_iter().collect();
    assert_eq!(map.len(), 4);

    let mut state = AppState::new();
    state.elements = Some(Arc::new(map));
    state
}

/// Fährt eine Geste über die gegebenen Wegpunkte (letzter Punkt = Pointer-Up).
fn drive_gesture(
    tool: &mut LassoTool,
    state: &mut AppState,
    waypoints: &[Vec2],
    mode: SelectionMode,
    additive: bool,
) -> Vec<u64> {
    let (first, rest) = waypoints.split_first().expect("non-empty gesture");
    assert!(tool.on_pointer_down(*first, mode, false));
    let (last, moves) = rest.split_last().expect("gesture has an end point");
    for &point in moves {
        tool.on_pointer_move(point);
    }
    tool.on_pointer_up(state, *last, additive)
}

#[test]
fn lasso_selects_enclosed_rect_and_circle() {
    let mut state = load_fixture();
    let mut tool = LassoTool::new();

    let affected = drive_gesture(
        &mut tool,
        &mut state,
        &[
            Vec2::new(-10.0, -10.0),
            Vec2::new(260.0, -10.0),
            Vec2::new(260.0, 90.0),
            Vec2::new(-10.0, 90.0),
        ],
        SelectionMode::Replace,
        false,
    );

    // Einfügereihenfolge des Stores = Ergebnisreihenfolge.
    assert_eq!(affected, vec![1, 2]);
    assert!(state.selection.is_selected(1));
    assert!(state.selection.is_selected(2));
    assert!(!state.selection.is_selected(3));
    assert!(!state.selection.is_selected(4));
}

#[test]
fn selection_order_is_deterministic_across_runs() {
    let waypoints = [
        Vec2::new(-10.0, -10.0),
        Vec2::new(260.0, -10.0),
        Vec2::new(260.0, 90.0),
        Vec2::new(-10.0, 90.0),
    ];

    let mut reference: Option<Vec<u64>> = None;
    for _ in 0..3 {
        let mut state = load_fixture();
        let mut tool = LassoTool::new();
        let affected = drive_gesture(
            &mut tool,
            &mut state,
            &waypoints,
            SelectionMode::Replace,
            false,
        );
        match &reference {
            Some(expected) => assert_eq!(&affected, expected),
            None => reference = Some(affected),
        }
    }
}

#[test]
fn two_point_gesture_returns_to_idle_without_change() {
    let mut state = load_fixture();
    state.selection.selected_ids.insert(4);

    let mut tool = LassoTool::new();
    assert!(tool.on_pointer_down(Vec2::new(-10.0, -10.0), SelectionMode::Replace, false));
    let affected = tool.on_pointer_up(&mut state, Vec2::new(300.0, -10.0), false);

    assert!(affected.is_empty());
    assert!(state.selection.is_selected(4));
    assert!(!tool.is_drawing());
}

#[test]
fn remove_gesture_reports_only_previously_selected_hits() {
    let mut state = load_fixture();
    state.selection.selected_ids.insert(2);
    state.selection.selected_ids.insert(4);

    let mut tool = LassoTool::new();
    // Umschließt nur den Kreis (Element 2); Element 4 bleibt unberührt.
    let removed = drive_gesture(
        &mut tool,
        &mut state,
        &[
            Vec2::new(150.0, 0.0),
            Vec2::new(250.0, 0.0),
            Vec2::new(250.0, 100.0),
            Vec2::new(150.0, 100.0),
        ],
        SelectionMode::Remove,
        false,
    );

    assert_eq!(removed, vec![2]);
    assert!(!state.selection.is_selected(2));
    assert!(state.selection.is_selected(4));
}

#[test]
fn add_gesture_unions_with_existing_selection() {
    let mut state = load_fixture();
    state.selection.selected_ids.insert(4);

    let mut tool = LassoTool::new();
    let affected = drive_gesture(
        &mut tool,
        &mut state,
        &[
            Vec2::new(150.0, 0.0),
            Vec2::new(250.0, 0.0),
            Vec2::new(250.0, 100.0),
            Vec2::new(150.0, 100.0),
        ],
        SelectionMode::Add,
        false,
    );

    assert_eq!(affected, vec![2]);
    assert!(state.selection.is_selected(2));
    assert!(state.selection.is_selected(4));
    assert_eq!(state.selection.len(), 2);
}

#[test]
fn stroke_is_picked_up_by_partial_overlap() {
    let mut state = load_fixture();
    let mut tool = LassoTool::new();

    // Deckt nur den Anfang des Strichs (Element 3) ab: Mittelpunkt und
    // erste Pfad-Probe liegen innen, der Rest des Strichs ragt heraus.
    let affected = drive_gesture(
        &mut tool,
        &mut state,
        &[
            Vec2::new(-10.0, 90.0),
            Vec2::new(60.0, 90.0),
            Vec2::new(60.0, 110.0),
            Vec2::new(-10.0, 110.0),
        ],
        SelectionMode::Replace,
        false,
    );

    assert_eq!(affected, vec![3]);
}
