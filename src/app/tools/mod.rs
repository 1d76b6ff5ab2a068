//! Canvas-Werkzeuge: Gesten-Zustandsmaschinen über den Selektions-Use-Cases.

pub mod lasso;

pub use lasso::LassoTool;
