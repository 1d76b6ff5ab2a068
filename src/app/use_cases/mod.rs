//! Use-Case-Funktionen des Application-Layers.

pub mod selection;
