//! Reine Geometrie-Primitiven für Containment-Tests und Polygon-Kennzahlen.
//!
//! Layer-neutral: kann von `tools`, `use_cases` und anderen Layer-übergreifenden
//! Modulen importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
///
/// Ein Nullsegment (a == b, etwa die Schluss-Kante eines explizit
/// geschlossenen Polygons) enthält nur den Punkt selbst.
pub fn point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = point - a;

    let ab_len_sq = ab.length_squared();
    if ab_len_sq <= f32::EPSILON {
        return ap.length_squared() <= f32::EPSILON;
    }

    let cross = ab.perp_dot(ap).abs();
    if cross > 1e-4 {
        return false;
    }

    let dot = ap.dot(ab);
    if dot < 0.0 {
        return false;
    }

    if dot > ab_len_sq {
        return false;
    }

    true
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Even-Odd).
///
/// Punkte auf dem Rand gelten als innen (deterministisch über den
/// Segment-Vorabtest, statt dem Rundungszufall des Kreuzungstests zu
/// überlassen). Polygone mit weniger als 3 Eckpunkten enthalten keine Punkte.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = *polygon.last().expect("polygon has at least 3 points");

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        // Die Kreuzungsbedingung garantiert previous.y != current.y, die
        // Division wird dank Short-Circuit nur dann ausgewertet.
        let intersect = ((current.y > point.y) != (previous.y > point.y))
            && (point.x
                < (previous.x - current.x) * (point.y - current.y)
                    / (previous.y - current.y)
                    + current.x);

        if intersect {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Winding-Number, Nonzero).
///
/// Robuster für selbst-überschneidende Polygone: Regionen mit Umlaufzahl ≠ 0
/// zählen als innen, wo Even-Odd Löcher produziert. Die Lasso-Klassifikation
/// nutzt konsequent Ray-Casting; Aufrufer wählen pro Entscheidung genau eine
/// der beiden Varianten.
pub fn point_in_polygon_winding(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut winding = 0i32;
    let mut previous = *polygon.last().expect("polygon has at least 3 points");

    for &current in polygon {
        if previous.y <= point.y {
            if current.y > point.y && edge_side(previous, current, point) > 0.0 {
                winding += 1;
            }
        } else if current.y <= point.y && edge_side(previous, current, point) < 0.0 {
            winding -= 1;
        }

        previous = current;
    }

    winding != 0
}

/// Seitentest: >0 wenn `point` links der gerichteten Kante a→b liegt.
fn edge_side(a: Vec2, b: Vec2, point: Vec2) -> f32 {
    (b - a).perp_dot(point - a)
}

/// Prüft ob ein Punkt innerhalb eines Kreises liegt (inkl. Rand).
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Prüft ob ein Punkt im Rechteck `[origin, origin + size]` liegt (inkl. Rand).
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + size.x
        && point.y >= origin.y
        && point.y <= origin.y + size.y
}

/// Prüft ob ein Punkt innerhalb einer (optional rotierten) Ellipse liegt.
///
/// `rotation` in Radiant; der Punkt wird relativ zum Mittelpunkt verschoben,
/// zurückrotiert und gegen die Standard-Ellipsengleichung getestet.
pub fn point_in_ellipse(point: Vec2, center: Vec2, radii: Vec2, rotation: f32) -> bool {
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }

    let local = Vec2::from_angle(-rotation).rotate(point - center);
    let normalized = local / radii;
    normalized.length_squared() <= 1.0
}

/// Signierte Polygonfläche (Shoelace-Formel).
///
/// Positiv bei Umlauf gegen den Uhrzeigersinn (mathematische Achsen),
/// negativ bei Umkehrung der Eckpunktliste. Unter 3 Eckpunkten ist die
/// Fläche definitionsgemäß 0.
pub fn polygon_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut previous = *polygon.last().expect("polygon has at least 3 points");

    for &current in polygon {
        sum += previous.perp_dot(current);
        previous = current;
    }

    sum * 0.5
}

/// Flächenschwerpunkt eines Polygons.
///
/// Fällt bei (nahezu) verschwindender Fläche auf das arithmetische Mittel
/// der Eckpunkte zurück, statt durch null zu teilen. `None` bei leerer
/// Eckpunktliste.
pub fn polygon_centroid(polygon: &[Vec2]) -> Option<Vec2> {
    if polygon.is_empty() {
        return None;
    }

    let area = polygon_area(polygon);
    if area.abs() < f32::EPSILON {
        let sum: Vec2 = polygon.iter().copied().sum();
        return Some(sum / polygon.len() as f32);
    }

    let mut weighted = Vec2::ZERO;
    let mut previous = *polygon.last().expect("polygon is non-empty");

    for &current in polygon {
        let cross = previous.perp_dot(current);
        weighted += (previous + current) * cross;
        previous = current;
    }

    Some(weighted / (6.0 * area))
}

/// Abstand eines Punkts zur Geraden durch `a` und `b`.
///
/// Degeneriert das Segment zu einem Punkt, wird die Distanz zu `a` geliefert.
pub fn perpendicular_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }

    ab.perp_dot(point - a).abs() / len_sq.sqrt()
}
