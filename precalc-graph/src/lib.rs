//! Plots for the precalc notebook.
//!
//! See the [`graph`] module for how to describe and render a figure.

pub mod graph;
mod text_align;

pub use graph::{
    color,
    CanvasPoint,
    Fill,
    Graph,
    GraphOptions,
    GraphPoint,
    LegendEntry,
    Point,
    Series,
};
