//! Use-Case: Lasso-Selektion (Freihand-Polygon).

use crate::app::state::AppState;
use crate::core::geometry::point_in_polygon;
use crate::core::{CanvasElement, ElementId, ElementKind, ElementMap};
use glam::Vec2;

use super::helpers::{bounds_overlap, clear_selection, polygon_bounds};
use super::sampling::check_points;

/// Anwendung der Treffer einer Lasso- oder Rechteck-Geste auf die Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Bestehende Selektion ersetzen (bzw. erweitern bei gehaltenem Modifier)
    #[default]
    Replace,
    /// Treffer zur bestehenden Selektion hinzufügen
    Add,
    /// Treffer aus der bestehenden Selektion entfernen
    Remove,
}

/// Mindestanteil der Check-Punkte im Polygon, damit ein Element als
/// getroffen gilt.
///
/// Strokes selektieren schon bei Teilüberlappung (lange Striche ragen fast
/// immer aus dem Lasso heraus); Text erst bei deutlicher Überdeckung, damit
/// eine streifende Lasso-Kante keinen Text einsammelt.
pub fn selection_threshold(kind: ElementKind) -> f32 {
    match kind {
        ElementKind::Stroke => 0.1,
        ElementKind::Text => 0.6,
        ElementKind::Rect | ElementKind::Circle => 0.3,
    }
}

/// Prüft ob ein Element vom Lasso-Polygon getroffen wird (Inside-Ratio
/// gegen den Typ-Schwellwert).
fn element_hit(element: &CanvasElement, polygon: &[Vec2]) -> bool {
    let samples = check_points(element);
    let inside = samples
        .iter()
        .filter(|&&point| point_in_polygon(point, polygon))
        .count();
    let ratio = inside as f32 / samples.len() as f32;
    ratio >= selection_threshold(element.kind)
}

/// Ermittelt alle vom Polygon getroffenen Element-IDs.
///
/// Kandidaten werden zuerst über die Polygon-Bounding-Box vorgefiltert;
/// die Reihenfolge der Treffer folgt der Einfügereihenfolge des Stores.
pub fn lasso_hits(elements: &ElementMap, polygon: &[Vec2]) -> Vec<ElementId> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let bounds = polygon_bounds(polygon);

    elements
        .iter()
        .filter(|element| bounds_overlap(element.bounds(), bounds))
        .filter(|element| element_hit(element, polygon))
        .map(|element| element.id)
        .collect()
}

/// Wendet eine abgeschlossene Lasso-Geste auf die Selektion an.
///
/// Gibt die betroffenen Element-IDs zurück: in `Replace`/`Add` die Treffer,
/// in `Remove` nur die tatsächlich entfernten IDs. Degenerierte Polygone
/// (<3 Eckpunkte) und fehlende Dokumente ändern die Selektion nicht —
/// abgesehen vom nicht-additiven `Replace`, das weiterhin leert.
pub fn apply_lasso_selection(
    state: &mut AppState,
    polygon: &[Vec2],
    mode: SelectionMode,
    additive: bool,
) -> Vec<ElementId> {
    if polygon.len() < 3 {
        log::debug!("Lasso-Polygon mit {} Punkten verworfen", polygon.len());
        return Vec::new();
    }

    let Some(elements) = state.elements.as_deref() else {
        if mode == SelectionMode::Replace && !additive {
            clear_selection(state);
        }
        return Vec::new();
    };

    let hits = lasso_hits(elements, polygon);
    apply_hits(state, hits, mode, additive)
}

/// Wendet Treffer gemäß Modus auf den Selektionszustand an.
pub(super) fn apply_hits(
    state: &mut AppState,
    hits: Vec<ElementId>,
    mode: SelectionMode,
    additive: bool,
) -> Vec<ElementId> {
    match mode {
        SelectionMode::Replace => {
            if !additive {
                state.selection.selected_ids.clear();
            }
            state.selection.selected_ids.extend(hits.iter().copied());
            hits
        }
        SelectionMode::Add => {
            state.selection.selected_ids.extend(hits.iter().copied());
            hits
        }
        SelectionMode::Remove => hits
            .into_iter()
            .filter(|id| state.selection.selected_ids.shift_remove(id))
            .collect(),
    }
}
