//! Application-Layer: State, Werkzeuge und Use-Cases.

pub mod state;
pub mod tools;
pub mod use_cases;

pub use state::{AppState, SelectionState};
pub use tools::LassoTool;
pub use use_cases::selection::{
    apply_lasso_selection, apply_rect_selection, clear_selection, SelectionMode,
};
