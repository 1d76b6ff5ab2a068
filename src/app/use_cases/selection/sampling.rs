//! Check-Punkt-Extraktion: approximiert den Shape/Polygon-Schnitt über
//! Stichproben statt über vollständiges Polygon-Clipping.

use crate::core::CanvasElement;
use glam::Vec2;

/// Schrittweite über das flache Koordinaten-Array: jedes 10. x/y-Paar.
///
/// Begrenzt die Kosten langer Freihand-Striche auf eine handvoll Proben.
const PATH_SAMPLE_STRIDE: usize = 20;

/// Anzahl der Stichprobenpunkte auf dem Kreisumfang (45°-Raster).
const CIRCLE_SAMPLE_COUNT: usize = 8;

/// Extrahiert die Stichprobenpunkte eines Elements (Weltkoordinaten).
///
/// Immer enthalten: der Bounding-Box-Mittelpunkt (bzw. die Position, wenn
/// keine Größe vorhanden ist). Je nach vorhandenen Attributen kommen hinzu:
/// - Pfad-Proben (jedes 10. Koordinatenpaar, um die Position verschoben),
/// - die 4 Ecken und 4 Kantenmittelpunkte der Bounding-Box,
/// - 8 Punkte in 45°-Schritten auf dem Kreisumfang.
///
/// Fehlende Attribute überspringen nur ihren Beitrag; das Ergebnis ist
/// nie leer.
pub fn check_points(element: &CanvasElement) -> Vec<Vec2> {
    let mut samples = vec![element.center()];

    if let Some(points) = &element.points {
        let mut index = 0;
        while index + 1 < points.len() {
            samples.push(element.position + Vec2::new(points[index], points[index + 1]));
            index += PATH_SAMPLE_STRIDE;
        }
    }

    if let Some(size) = element.size {
        let origin = element.position;
        let half = size * 0.5;
        // 4 Ecken
        samples.push(origin);
        samples.push(origin + Vec2::new(size.x, 0.0));
        samples.push(origin + size);
        samples.push(origin + Vec2::new(0.0, size.y));
        // 4 Kantenmittelpunkte
        samples.push(origin + Vec2::new(half.x, 0.0));
        samples.push(origin + Vec2::new(size.x, half.y));
        samples.push(origin + Vec2::new(half.x, size.y));
        samples.push(origin + Vec2::new(0.0, half.y));
    }

    if let Some(radius) = element.radius {
        for step in 0..CIRCLE_SAMPLE_COUNT {
            let angle = step as f32 * std::f32::consts::FRAC_PI_4;
            samples.push(element.position + radius * Vec2::from_angle(angle));
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ElementKind;

    #[test]
    fn minimal_element_yields_exactly_its_position() {
        let element = CanvasElement {
            id: 1,
            kind: ElementKind::Rect,
            position: Vec2::new(3.0, 4.0),
            size: None,
            radius: None,
            points: None,
        };
        assert_eq!(check_points(&element), vec![Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn sized_element_yields_center_corners_and_edge_midpoints() {
        let element = CanvasElement::rect(1, Vec2::ZERO, Vec2::new(100.0, 50.0));
        let samples = check_points(&element);
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0], Vec2::new(50.0, 25.0));
        assert!(samples.contains(&Vec2::new(0.0, 0.0)));
        assert!(samples.contains(&Vec2::new(100.0, 50.0)));
        assert!(samples.contains(&Vec2::new(50.0, 0.0)));
        assert!(samples.contains(&Vec2::new(0.0, 25.0)));
    }

    #[test]
    fn circular_element_yields_center_and_eight_rim_points() {
        let element = CanvasElement::circle(1, Vec2::new(10.0, 10.0), 4.0);
        let samples = check_points(&element);
        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0], Vec2::new(10.0, 10.0));
        // 0°-Probe liegt exakt auf dem rechten Rand.
        assert!((samples[1] - Vec2::new(14.0, 10.0)).length() < 1e-4);
        for rim in &samples[1..] {
            assert!(((*rim - element.position).length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn stroke_sampling_takes_every_tenth_pair() {
        // 31 Koordinatenpaare → Proben bei Paar 0, 10, 20, 30.
        let flat: Vec<f32> = (0..62).map(|value| value as f32).collect();
        let element = CanvasElement::stroke(1, Vec2::ZERO, flat);
        let samples = check_points(&element);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[1], Vec2::new(0.0, 1.0));
        assert_eq!(samples[2], Vec2::new(20.0, 21.0));
        assert_eq!(samples[3], Vec2::new(40.0, 41.0));
        assert_eq!(samples[4], Vec2::new(60.0, 61.0));
    }
}
