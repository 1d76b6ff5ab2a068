//! Canvas-Elemente: Datenmodell der Selektionskandidaten.
//!
//! Die Elemente gehören dem externen Element-Store der Anwendung; die
//! Selektionslogik liest sie nur. Serde-Derives, weil das Canvas-Dokument
//! von der Anwendungs-Shell serialisiert wird.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Eindeutige Element-ID innerhalb eines Canvas-Dokuments.
pub type ElementId = u64;

/// Kategorie eines Canvas-Elements.
///
/// Geschlossene Menge: Sampling- und Schwellwert-Logik matchen exhaustiv,
/// unbekannte Typen können nicht stillschweigend durchrutschen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Rechteckige Elemente (Shapes, Tabellen, Bilder)
    Rect,
    /// Kreisförmige Elemente
    Circle,
    /// Freihand-Striche und Konnektoren (Pfad-Elemente)
    Stroke,
    /// Textblöcke
    Text,
}

/// Ein Selektionskandidat auf dem Canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasElement {
    /// Eindeutige ID
    pub id: ElementId,
    /// Element-Kategorie
    pub kind: ElementKind,
    /// Position in Weltkoordinaten (linke obere Ecke, bei Kreisen der Mittelpunkt)
    pub position: Vec2,
    /// Breite/Höhe der Bounding-Box (falls vorhanden)
    #[serde(default)]
    pub size: Option<Vec2>,
    /// Radius für kreisförmige Elemente
    #[serde(default)]
    pub radius: Option<f32>,
    /// Flaches x/y-Koordinaten-Array in Element-Koordinaten (Strokes)
    #[serde(default)]
    pub points: Option<Vec<f32>>,
}

impl CanvasElement {
    /// Erstellt ein rechteckiges Element.
    pub fn rect(id: ElementId, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: ElementKind::Rect,
            position,
            size: Some(size),
            radius: None,
            points: None,
        }
    }

    /// Erstellt ein kreisförmiges Element (Position = Mittelpunkt).
    pub fn circle(id: ElementId, position: Vec2, radius: f32) -> Self {
        Self {
            id,
            kind: ElementKind::Circle,
            position,
            size: None,
            radius: Some(radius),
            points: None,
        }
    }

    /// Erstellt ein Pfad-Element aus einem flachen x/y-Koordinaten-Array.
    pub fn stroke(id: ElementId, position: Vec2, points: Vec<f32>) -> Self {
        Self {
            id,
            kind: ElementKind::Stroke,
            position,
            size: None,
            radius: None,
            points: Some(points),
        }
    }

    /// Erstellt einen Textblock.
    pub fn text(id: ElementId, position: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind: ElementKind::Text,
            position,
            size: Some(size),
            radius: None,
            points: None,
        }
    }

    /// Mittelpunkt der Bounding-Box (die Position, wenn keine Größe vorhanden).
    pub fn center(&self) -> Vec2 {
        match self.size {
            Some(size) => self.position + size * 0.5,
            None => self.position,
        }
    }

    /// Achsen-alignierte Bounding-Box `(min, max)` in Weltkoordinaten.
    ///
    /// Degeneriert für größen-, radius- und pfadlose Elemente zum Punkt
    /// an der Position.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let mut min = self.position;
        let mut max = self.position;

        if let Some(size) = self.size {
            max = self.position + size;
        }

        if let Some(radius) = self.radius {
            min = min.min(self.position - Vec2::splat(radius));
            max = max.max(self.position + Vec2::splat(radius));
        }

        if let Some(points) = &self.points {
            for pair in points.chunks_exact(2) {
                let point = self.position + Vec2::new(pair[0], pair[1]);
                min = min.min(point);
                max = max.max(point);
            }
        }

        (min, max)
    }
}

/// Container aller Canvas-Elemente, indexiert nach ID.
///
/// `IndexMap` hält die Einfügereihenfolge, damit Selektionsergebnisse
/// deterministisch sortiert sind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementMap {
    elements: IndexMap<ElementId, CanvasElement>,
}

impl ElementMap {
    /// Erstellt einen leeren Container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Element hinzu (ersetzt ein vorhandenes mit gleicher ID).
    pub fn insert(&mut self, element: CanvasElement) {
        self.elements.insert(element.id, element);
    }

    /// Liefert das Element mit der gegebenen ID.
    pub fn get(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.get(&id)
    }

    /// Iteriert über alle Elemente in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasElement> {
        self.elements.values()
    }

    /// Anzahl der Elemente.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt zurück ob der Container leer ist.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<CanvasElement> for ElementMap {
    fn from_iter<I: IntoIterator<Item = CanvasElement>>(iter: I) -> Self {
        let mut map = Self::new();
        for element in iter {
            map.insert(element);
        }
        map
    }
}
