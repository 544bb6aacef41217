use log::debug;
use rug::Rational;
use super::{error::ZeroLeadingCoefficient, surd::Surd};

/// A quadratic function `y = a*x**2 + b*x + c`, with `a` non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadratic {
    a: Rational,
    b: Rational,
    c: Rational,
}

/// The closed-form properties of a [`Quadratic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticAnalysis {
    /// The vertex `(x, y)` of the parabola.
    pub vertex: (Rational, Rational),

    /// The discriminant `b**2 - 4*a*c`.
    pub discriminant: Rational,

    /// The real roots, `(-b + sqrt(D))/(2*a)` followed by `(-b - sqrt(D))/(2*a)`. Empty if the
    /// discriminant is negative. A zero discriminant gives the same root twice.
    pub roots: Vec<Surd>,
}

impl Quadratic {
    /// Creates a new quadratic function. Fails if `a` is zero.
    pub fn new(a: Rational, b: Rational, c: Rational) -> Result<Self, ZeroLeadingCoefficient> {
        if a.cmp0().is_eq() {
            return Err(ZeroLeadingCoefficient);
        }
        Ok(Self { a, b, c })
    }

    pub fn a(&self) -> &Rational {
        &self.a
    }

    pub fn b(&self) -> &Rational {
        &self.b
    }

    pub fn c(&self) -> &Rational {
        &self.c
    }

    /// Returns the exact value of the function at `x`.
    pub fn eval(&self, x: &Rational) -> Rational {
        let x2 = Rational::from(x * x);
        Rational::from(&self.a * &x2) + Rational::from(&self.b * x) + &self.c
    }

    /// Returns the value of the function at `x`, as a float.
    pub fn eval_f64(&self, x: f64) -> f64 {
        let (a, b, c) = (self.a.to_f64(), self.b.to_f64(), self.c.to_f64());
        a * x * x + b * x + c
    }

    /// Returns the discriminant `b**2 - 4*a*c`.
    pub fn discriminant(&self) -> Rational {
        Rational::from(&self.b * &self.b) - Rational::from(&self.a * &self.c) * 4u32
    }

    /// Returns the x-coordinate of the vertex, `-b/(2*a)`.
    pub fn vertex_x(&self) -> Rational {
        Rational::from(-&self.b) / Rational::from(&self.a * 2u32)
    }

    /// Returns the real roots of the function.
    pub fn roots(&self) -> Vec<Surd> {
        let Some(root_d) = Surd::sqrt(&self.discriminant()) else {
            return Vec::new();
        };

        let two_a_recip = Rational::from(&self.a * 2u32).recip();
        let neg_b = Rational::from(-&self.b);
        [root_d.clone(), root_d.neg()]
            .into_iter()
            .map(|root| root.add_rational(&neg_b).scale(&two_a_recip))
            .collect()
    }

    /// Computes the vertex, discriminant, and roots of the function.
    pub fn analyze(&self) -> QuadraticAnalysis {
        let vertex_x = self.vertex_x();
        let vertex_y = self.eval(&vertex_x);
        let analysis = QuadraticAnalysis {
            vertex: (vertex_x, vertex_y),
            discriminant: self.discriminant(),
            roots: self.roots(),
        };
        debug!("analyzed quadratic {:?}: {:?}", self, analysis);
        analysis
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::primitive::rational;
    use super::*;

    fn quadratic(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Quadratic {
        Quadratic::new(rational(a), rational(b), rational(c)).unwrap()
    }

    fn roots_str(analysis: &QuadraticAnalysis) -> Vec<String> {
        analysis.roots.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn two_integer_roots() {
        let analysis = quadratic((1, 1), (0, 1), (-4, 1)).analyze();
        assert_eq!(analysis.vertex, (rational(0), rational(-4)));
        assert_eq!(analysis.discriminant, rational(16));
        assert_eq!(roots_str(&analysis), vec!["2", "-2"]);
    }

    #[test]
    fn no_real_roots() {
        let analysis = quadratic((1, 1), (0, 1), (4, 1)).analyze();
        assert_eq!(analysis.discriminant, rational(-16));
        assert!(analysis.roots.is_empty());
    }

    #[test]
    fn double_root() {
        let analysis = quadratic((1, 1), (-2, 1), (1, 1)).analyze();
        assert_eq!(analysis.discriminant, rational(0));
        assert_eq!(roots_str(&analysis), vec!["1", "1"]);
        assert_eq!(analysis.vertex, (rational(1), rational(0)));
    }

    #[test]
    fn irrational_roots() {
        let analysis = quadratic((1, 1), (1, 1), (-1, 1)).analyze();
        assert_eq!(analysis.discriminant, rational(5));
        assert_eq!(roots_str(&analysis), vec!["-1/2 + sqrt(5)/2", "-sqrt(5)/2 - 1/2"]);
    }

    #[test]
    fn decimal_coefficients() {
        // 0.5x^2 - 1.5x + 1 = 0.5(x - 1)(x - 2)
        let analysis = quadratic((1, 2), (-3, 2), (1, 1)).analyze();
        assert_eq!(analysis.vertex, (rational((3, 2)), rational((-1, 8))));
        assert_eq!(roots_str(&analysis), vec!["2", "1"]);
    }

    #[test]
    fn negative_leading_coefficient() {
        let analysis = quadratic((-1, 1), (0, 1), (2, 1)).analyze();
        assert_eq!(roots_str(&analysis), vec!["-sqrt(2)", "sqrt(2)"]);
    }

    #[test]
    fn zero_leading_coefficient() {
        assert_eq!(
            Quadratic::new(rational(0), rational(1), rational(1)),
            Err(ZeroLeadingCoefficient)
        );
    }
}
