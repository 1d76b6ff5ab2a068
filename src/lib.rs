//! Lasso-Selektionskern für einen Infinite-Canvas-Editor.
//!
//! Geometrie-Primitiven, Douglas-Peucker-Vereinfachung, Check-Punkt-Sampling
//! und die Gesten-Zustandsmaschine der Lasso-Selektion als Library.
//! Rendering, Persistenz und UI-Layout liegen beim Host; dieses Crate
//! rechnet nur.

pub mod app;
pub mod core;

pub use app::{
    apply_lasso_selection, apply_rect_selection, clear_selection, AppState, LassoTool,
    SelectionMode, SelectionState,
};
pub use core::{
    point_in_polygon, point_in_polygon_winding, polygon_area, polygon_centroid, simplify_path,
    CanvasElement, ElementId, ElementKind, ElementMap,
};
