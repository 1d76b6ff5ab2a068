//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::state::AppState;
use glam::Vec2;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.selected_ids.clear();
}

/// Berechnet das achsen-alignierte Bounding-Rect aus zwei Eckpunkten.
pub(super) fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (a.min(b), a.max(b))
}

/// Bounding-Box eines Polygons. Erwartet eine nicht-leere Punktliste.
pub(super) fn polygon_bounds(polygon: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = polygon[0];
    let mut max = polygon[0];
    for &point in polygon.iter().skip(1) {
        min = min.min(point);
        max = max.max(point);
    }
    (min, max)
}

/// Prüft ob sich zwei Bounding-Boxen überlappen (inkl. Rand).
pub(super) fn bounds_overlap(a: (Vec2, Vec2), b: (Vec2, Vec2)) -> bool {
    a.0.x <= b.1.x && a.1.x >= b.0.x && a.0.y <= b.1.y && a.1.y >= b.0.y
}
