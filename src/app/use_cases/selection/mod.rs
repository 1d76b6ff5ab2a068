//! Use-Case-Funktionen für Element-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `lasso` — Freihand-Polygon-Selektion (Klassifikation + Anwendung)
//! - `rect` — Rechteck-Selektion (Marquee-Drag)
//! - `sampling` — Check-Punkt-Extraktion pro Element
//! - `helpers` — Gemeinsame Hilfsfunktionen

mod helpers;
mod lasso;
mod rect;
mod sampling;

pub use helpers::clear_selection;
pub use lasso::{apply_lasso_selection, lasso_hits, selection_threshold, SelectionMode};
pub use rect::{apply_rect_selection, rect_hits};
pub use sampling::check_points;
