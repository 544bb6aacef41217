//! Sampling of functions at evenly spaced points, to produce the data points of a plot.
//!
//! Every sample is independent of the others, so samples are evaluated in parallel with
//! [`rayon`]. The results are always returned in order of increasing `x`.

use log::warn;
use precalc_attrs::ErrorKind;
use precalc_error::Error;
use precalc_parser::parser::expr::Expr;
use rayon::prelude::*;
use crate::numerical::{ctxt::Ctxt, eval::Eval, value::Value};
use crate::primitive::float;

/// The expression produced a non-real value at a sample point.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the expression is not real at x = {}", self.x),
    labels = ["this expression"],
    help = format!("it evaluates to `{}` there; only real values can be plotted", self.value),
)]
pub struct NonRealSample {
    /// The sample point.
    pub x: f64,

    /// The formatted non-real value.
    pub value: String,
}

/// Returns `n` evenly spaced numbers over the closed interval `[start, end]`.
///
/// With `n == 1`, the only number is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        },
    }
}

/// The values of a function at a set of sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    /// The sample points, in increasing order.
    pub xs: Vec<f64>,

    /// The value at each sample point, or [`None`] if the function is undefined there.
    pub ys: Vec<Option<f64>>,
}

impl SampleSet {
    /// Returns the defined `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter()
            .zip(&self.ys)
            .filter_map(|(x, y)| y.map(|y| (*x, y)))
    }

    /// Returns the runs of consecutive defined points. A curve is drawn as one line per run, so
    /// that it is not connected across points where it is undefined.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.xs.iter().zip(&self.ys) {
            match y {
                Some(y) => current.push((*x, *y)),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {},
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Returns the largest defined value, if any.
    pub fn max_y(&self) -> Option<f64> {
        self.ys.iter().flatten().copied().reduce(f64::max)
    }

    /// Returns the smallest defined value, if any.
    pub fn min_y(&self) -> Option<f64> {
        self.ys.iter().flatten().copied().reduce(f64::min)
    }

    /// Returns the number of points where the function is undefined.
    pub fn undefined_count(&self) -> usize {
        self.ys.iter().filter(|y| y.is_none()).count()
    }
}

/// Samples a function at the given points, in parallel.
pub fn sample_with<F>(xs: Vec<f64>, f: F) -> SampleSet
where
    F: Fn(f64) -> Option<f64> + Sync,
{
    let ys = xs.par_iter()
        .map(|x| f(*x).filter(|y| y.is_finite()))
        .collect();
    SampleSet { xs, ys }
}

/// Samples an expression in the variable `var` at the given points.
///
/// Points where evaluation fails, such as `1/x` at `x = 0`, are left undefined. The first
/// non-real value aborts sampling with an error, and so does an expression that is undefined at
/// every point, in which case the error of the first point is returned.
pub fn sample_expr(expr: &Expr, ctxt: &Ctxt, var: &str, xs: Vec<f64>) -> Result<SampleSet, Error> {
    let results = xs.par_iter()
        .map(|x| expr.eval(&ctxt.with_var(var, Value::Real(float(*x)))))
        .collect::<Vec<_>>();

    let mut ys = Vec::with_capacity(results.len());
    let mut first_error = None;
    for (x, result) in xs.iter().zip(results) {
        match result {
            Ok(value) if value.is_real() => ys.push(value.to_f64().filter(|y| y.is_finite())),
            Ok(value) => {
                return Err(Error::new(vec![expr.span()], NonRealSample {
                    x: *x,
                    value: value.to_string(),
                }));
            },
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
                ys.push(None);
            },
        }
    }

    let undefined = ys.iter().filter(|y| y.is_none()).count();
    if undefined > 0 {
        warn!("`{}` is undefined at {} of {} sample points", expr, undefined, ys.len());
    }

    if undefined == ys.len() {
        if let Some(err) = first_error {
            return Err(err);
        }
    }

    Ok(SampleSet { xs, ys })
}
