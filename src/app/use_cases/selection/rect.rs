//! Use-Case: Rechteck-Selektion (Marquee-Drag).

use crate::app::state::AppState;
use crate::core::geometry::point_in_rect;
use crate::core::{CanvasElement, ElementId, ElementMap};
use glam::Vec2;

use super::helpers::{bounds_overlap, clear_selection, rect_min_max};
use super::lasso::{apply_hits, selection_threshold, SelectionMode};
use super::sampling::check_points;

/// Prüft ob ein Element vom Marquee-Rechteck getroffen wird.
///
/// Gleiche Inside-Ratio-Politik wie beim Lasso, nur mit dem (billigeren)
/// Rechteck-Containment-Test.
fn element_hit(element: &CanvasElement, min: Vec2, size: Vec2) -> bool {
    let samples = check_points(element);
    let inside = samples
        .iter()
        .filter(|&&point| point_in_rect(point, min, size))
        .count();
    let ratio = inside as f32 / samples.len() as f32;
    ratio >= selection_threshold(element.kind)
}

/// Ermittelt alle vom Rechteck getroffenen Element-IDs.
pub fn rect_hits(elements: &ElementMap, corner_a: Vec2, corner_b: Vec2) -> Vec<ElementId> {
    let (min, max) = rect_min_max(corner_a, corner_b);
    let size = max - min;

    elements
        .iter()
        .filter(|element| bounds_overlap(element.bounds(), (min, max)))
        .filter(|element| element_hit(element, min, size))
        .map(|element| element.id)
        .collect()
}

/// Wendet eine abgeschlossene Marquee-Geste auf die Selektion an.
///
/// Eckpunkte dürfen in beliebiger Reihenfolge kommen; Rückgabe wie bei
/// `apply_lasso_selection`.
pub fn apply_rect_selection(
    state: &mut AppState,
    corner_a: Vec2,
    corner_b: Vec2,
    mode: SelectionMode,
    additive: bool,
) -> Vec<ElementId> {
    let Some(elements) = state.elements.as_deref() else {
        if mode == SelectionMode::Replace && !additive {
            clear_selection(state);
        }
        return Vec::new();
    };

    let hits = rect_hits(elements, corner_a, corner_b);
    apply_hits(state, hits, mode, additive)
}
