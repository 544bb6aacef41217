use rug::Rational;

/// A non-vertical line `y = slope*x + intercept`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub slope: Rational,
    pub intercept: Rational,
}

/// Where two lines meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection {
    /// The lines cross at exactly one point.
    Point {
        x: Rational,
        y: Rational,
    },

    /// The lines have the same slope but different intercepts, and never meet.
    Parallel,

    /// The lines are the same line, and meet everywhere.
    Coincident,
}

impl Line {
    /// Creates a new line.
    pub fn new(slope: Rational, intercept: Rational) -> Self {
        Self { slope, intercept }
    }

    /// Returns the exact y-coordinate of the line at `x`.
    pub fn eval(&self, x: &Rational) -> Rational {
        Rational::from(&self.slope * x) + &self.intercept
    }

    /// Returns the y-coordinate of the line at `x`, as a float.
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.slope.to_f64() * x + self.intercept.to_f64()
    }

    /// Solves `self(x) = other(x)` for `x`.
    pub fn intersect(&self, other: &Line) -> Intersection {
        let slope_diff = Rational::from(&self.slope - &other.slope);
        if slope_diff.cmp0().is_eq() {
            return if self.intercept == other.intercept {
                Intersection::Coincident
            } else {
                Intersection::Parallel
            };
        }

        let x = Rational::from(&other.intercept - &self.intercept) / slope_diff;
        let y = self.eval(&x);
        Intersection::Point { x, y }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::primitive::rational;
    use super::*;

    fn line(slope: (i32, i32), intercept: (i32, i32)) -> Line {
        Line::new(rational(slope), rational(intercept))
    }

    #[test]
    fn crossing_lines() {
        let first = line((1, 1), (0, 1));
        let second = line((-1, 1), (0, 1));
        assert_eq!(first.intersect(&second), Intersection::Point { x: rational(0), y: rational(0) });
    }

    #[test]
    fn fractional_intersection() {
        let first = line((1, 10), (1, 1));
        let second = line((-3, 10), (0, 1));
        assert_eq!(first.intersect(&second), Intersection::Point {
            x: rational((-5, 2)),
            y: rational((3, 4)),
        });
    }

    #[test]
    fn parallel_lines() {
        let first = line((1, 1), (0, 1));
        let second = line((1, 1), (1, 1));
        assert_eq!(first.intersect(&second), Intersection::Parallel);
    }

    #[test]
    fn coincident_lines() {
        let first = line((5, 2), (-1, 1));
        assert_eq!(first.intersect(&first.clone()), Intersection::Coincident);
    }
}
