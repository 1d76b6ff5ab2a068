//! Douglas-Peucker-Vereinfachung für Freihand-Pfade.
//!
//! Wird ausschließlich für die Live-Vorschau der laufenden Lasso-Geste
//! genutzt; die finale Containment-Entscheidung läuft immer über den
//! unvereinfachten Roh-Pfad.

use glam::Vec2;

use super::geometry::perpendicular_distance;

/// Vereinfacht einen Pfad nach Douglas-Peucker.
///
/// Behält Punkte, deren senkrechter Abstand zur Sehne zwischen den
/// Segment-Endpunkten die Toleranz (Welteinheiten) überschreitet. Pfade mit
/// höchstens 2 Punkten werden unverändert zurückgegeben; Start- und Endpunkt
/// bleiben immer erhalten.
pub fn simplify_path(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept(points, 0, points.len() - 1, tolerance, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter(|(_, &kept)| kept)
        .map(|(&point, _)| point)
        .collect()
}

/// Rekursion über Index-Bereiche in den unveränderlichen Eingabe-Slice.
///
/// Markiert den Punkt maximaler Abweichung, wenn er die Toleranz
/// überschreitet, und steigt in beide Teilbereiche ab.
fn mark_kept(points: &[Vec2], first: usize, last: usize, tolerance: f32, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let mut max_distance = 0.0f32;
    let mut max_index = first;

    for index in (first + 1)..last {
        let distance = perpendicular_distance(points[index], points[first], points[last]);
        if distance > max_distance {
            max_distance = distance;
            max_index = index;
        }
    }

    if max_distance > tolerance {
        keep[max_index] = true;
        mark_kept(points, first, max_index, tolerance, keep);
        mark_kept(points, max_index, last, tolerance, keep);
    }
}
