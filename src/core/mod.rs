//! Core-Domänentypen: Elemente, Geometrie-Primitiven, Pfad-Vereinfachung.

pub mod element;
pub mod geometry;
pub mod simplify;

pub use element::{CanvasElement, ElementId, ElementKind, ElementMap};
pub use geometry::{
    perpendicular_distance, point_in_circle, point_in_ellipse, point_in_polygon,
    point_in_polygon_winding, point_in_rect, point_on_segment, polygon_area, polygon_centroid,
};
pub use simplify::simplify_path;
