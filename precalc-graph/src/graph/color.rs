//! Named colors, given as RGB tuples with each value in the range `0.0` to `1.0`.

/// An RGB color.
pub type Color = (f64, f64, f64);

pub const BLACK: Color = (0.0, 0.0, 0.0);
pub const WHITE: Color = (1.0, 1.0, 1.0);
pub const GRAY: Color = (0.5, 0.5, 0.5);
pub const RED: Color = (0.84, 0.15, 0.16);
pub const GREEN: Color = (0.17, 0.63, 0.17);
pub const BLUE: Color = (0.12, 0.47, 0.71);
pub const PURPLE: Color = (0.58, 0.40, 0.74);
