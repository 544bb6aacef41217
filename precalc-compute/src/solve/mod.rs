//! Closed-form solvers: 2x2 linear systems, the intersection of two lines, and quadratics.

pub mod error;
pub mod line;
pub mod quadratic;
pub mod surd;
pub mod system;

pub use line::{Intersection, Line};
pub use quadratic::{Quadratic, QuadraticAnalysis};
pub use surd::Surd;
pub use system::{solve_system, SystemSolution};
