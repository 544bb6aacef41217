//! An interactive algebra notebook.
//!
//! The notebook has a menu with four modes:
//!
//! 1. Graph an equation in `x` and print a table of its values.
//! 2. Solve a system of two linear equations in `x` and `y`.
//! 3. Graph two lines and mark their intersection.
//! 4. Analyze a quadratic function: its vertex, discriminant, and real roots.
//!
//! Each mode displays a set of named [`controls`]. The notebook is driven by [`event::Event`]s
//! aimed at those controls, and collects what the modes display as [`output::Cell`]s. The
//! [`session`] module drives a notebook from text [`command`]s, the way the `precalc-notebook`
//! binary does.
//!
//! ```
//! use precalc_notebook::{event::Event, notebook::Notebook, output::Cell};
//!
//! let mut notebook = Notebook::default();
//! notebook.handle(Event::set("menu", "2")).unwrap();
//! notebook.handle(Event::set("eq1", "x + y - 3")).unwrap();
//! notebook.handle(Event::set("eq2", "x - y - 1")).unwrap();
//!
//! let update = notebook.handle(Event::click("solve")).unwrap();
//! assert_eq!(update.cells, vec![Cell::Text("Solution: {x: 2, y: 1}".to_string())]);
//! ```

pub mod command;
pub mod config;
pub mod controls;
pub mod error;
pub mod event;
pub mod logging;
pub mod modes;
pub mod notebook;
pub mod output;
pub mod render;
pub mod session;
