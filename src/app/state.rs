//! Application State — injizierte Datenhaltung für Selektions-Use-Cases.
//!
//! Element-Store und Selektion werden explizit hereingereicht; die
//! Geometrie-Funktionen greifen nie auf globalen Zustand zu.

use crate::core::{ElementId, ElementMap};
use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Element-IDs
    /// (Einfügereihenfolge = Selektionsreihenfolge)
    pub selected_ids: IndexSet<ElementId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück ob das Element aktuell selektiert ist.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Anzahl der selektierten Elemente.
    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    /// Gibt zurück ob die Selektion leer ist.
    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }
}

/// Zustand, den die Selektions-Use-Cases benötigen.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Aktuell geladenes Canvas-Dokument (None = kein Dokument)
    pub elements: Option<Arc<ElementMap>>,
    /// Selection-State
    pub selection: SelectionState,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl der Elemente zurück (für UI-Anzeige).
    pub fn element_count(&self) -> usize {
        self.elements.as_ref().map_or(0, |map| map.len())
    }
}
