pub mod kind;

pub use precalc_error::Error;
