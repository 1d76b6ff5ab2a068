//! Lasso-Werkzeug: Zustandsmaschine einer einzelnen Selektions-Geste.
//!
//! Läuft vollständig synchron im aufrufenden UI-Thread; zwischen zwei Gesten
//! überlebt kein Zustand, der Pfad-Puffer wird pro Geste frisch angelegt.

use crate::app::state::AppState;
use crate::app::use_cases::selection::{apply_lasso_selection, SelectionMode};
use crate::core::simplify::simplify_path;
use crate::core::ElementId;
use glam::Vec2;

/// Mindestabstand (Welteinheiten) zwischen zwei aufgezeichneten Pfadpunkten.
pub const MIN_POINT_DISTANCE: f32 = 2.0;

/// Douglas-Peucker-Toleranz für die Live-Vorschau des Pfads.
pub const PREVIEW_TOLERANCE: f32 = 2.0;

/// Unterhalb dieser Punktzahl wird die Geste beim Loslassen verworfen.
const MIN_GESTURE_POINTS: usize = 3;

/// Phase der aktuellen Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LassoPhase {
    /// Keine Geste aktiv
    #[default]
    Idle,
    /// Pfad wird aufgezeichnet (Pointer ist unten)
    Drawing,
}

/// Lasso-Werkzeug.
///
/// Eine neue Geste kann erst beginnen, wenn die vorherige abgeschlossen ist;
/// die Phase selbst ist der Re-Entrancy-Schutz, es gibt kein Locking.
#[derive(Debug, Clone, Default)]
pub struct LassoTool {
    phase: LassoPhase,
    /// Unvereinfachter Roh-Pfad der Geste (Weltkoordinaten)
    path: Vec<Vec2>,
    /// Vereinfachter Pfad für die Live-Vorschau
    preview: Vec<Vec2>,
    /// Modus, mit dem die Geste gestartet wurde
    mode: SelectionMode,
}

impl LassoTool {
    /// Erstellt ein neues Lasso-Werkzeug im Idle-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Beginnt eine neue Geste an der Pointer-Down-Position.
    ///
    /// Startet nur aus Idle und nur auf leerem Canvas-Hintergrund — außer
    /// der Modus ist additiv (`Add`/`Remove`), dann darf die Geste auch über
    /// einem Element beginnen. Gibt zurück ob die Geste gestartet wurde.
    pub fn on_pointer_down(
        &mut self,
        position: Vec2,
        mode: SelectionMode,
        over_element: bool,
    ) -> bool {
        if self.phase != LassoPhase::Idle {
            return false;
        }
        if over_element && mode == SelectionMode::Replace {
            return false;
        }

        self.phase = LassoPhase::Drawing;
        self.mode = mode;
        self.path = vec![position];
        self.preview = Vec::new();
        true
    }

    /// Zeichnet die Geste an der aktuellen Pointer-Position weiter.
    ///
    /// Punkte unterhalb des Mindestabstands zum zuletzt aufgezeichneten Punkt
    /// werden verworfen (Entrauschen); ab 3 Punkten wird die Vorschau neu
    /// vereinfacht.
    pub fn on_pointer_move(&mut self, position: Vec2) {
        if self.phase != LassoPhase::Drawing {
            return;
        }
        let Some(&last) = self.path.last() else {
            return;
        };
        if position.distance_squared(last) <= MIN_POINT_DISTANCE * MIN_POINT_DISTANCE {
            return;
        }

        self.path.push(position);
        if self.path.len() >= MIN_GESTURE_POINTS {
            self.preview = simplify_path(&self.path, PREVIEW_TOLERANCE);
        }
    }

    /// Schließt die Geste ab und wendet die Selektion an.
    ///
    /// Bei weniger als 3 aufgezeichneten Punkten wird die Geste verworfen
    /// (keine Selektionsänderung). Sonst wird der Pfad explizit geschlossen
    /// (erster Punkt am Ende wiederholt) und gegen den unvereinfachten Pfad
    /// klassifiziert. Gibt die betroffenen Element-IDs zurück; das Werkzeug
    /// ist danach wieder Idle.
    pub fn on_pointer_up(
        &mut self,
        state: &mut AppState,
        position: Vec2,
        additive: bool,
    ) -> Vec<ElementId> {
        if self.phase != LassoPhase::Drawing {
            return Vec::new();
        }

        self.on_pointer_move(position);

        let mut polygon = std::mem::take(&mut self.path);
        self.preview = Vec::new();
        self.phase = LassoPhase::Idle;

        if polygon.len() < MIN_GESTURE_POINTS {
            log::debug!("Lasso-Geste mit {} Punkten verworfen", polygon.len());
            return Vec::new();
        }

        let first = polygon[0];
        polygon.push(first);

        apply_lasso_selection(state, &polygon, self.mode, additive)
    }

    /// Bricht die laufende Geste ab (Escape) ohne Selektionsänderung.
    pub fn cancel(&mut self) {
        if self.phase == LassoPhase::Drawing {
            log::debug!("Lasso-Geste abgebrochen ({} Punkte)", self.path.len());
        }
        self.phase = LassoPhase::Idle;
        self.path = Vec::new();
        self.preview = Vec::new();
    }

    /// Gibt zurück ob gerade eine Geste aufgezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        self.phase == LassoPhase::Drawing
    }

    /// Modus der laufenden (bzw. zuletzt gestarteten) Geste.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Roh-Pfad der laufenden Geste.
    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Vereinfachter Vorschau-Pfad (leer, solange weniger als 3 Punkte vorliegen).
    pub fn preview_path(&self) -> &[Vec2] {
        &self.preview
    }
}
