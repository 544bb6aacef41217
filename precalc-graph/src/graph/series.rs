use super::color::{Color, BLUE, PURPLE};
use super::point::GraphPoint;

/// A curve drawn as connected line segments.
///
/// The curve may be split into several runs, which are not connected to each other. This is used
/// to leave gaps where a function is undefined.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// The runs of points to connect.
    pub segments: Vec<Vec<GraphPoint<f64>>>,

    /// The color of the curve.
    pub color: Color,

    /// The legend entry of the curve. Unlabeled curves do not appear in the legend.
    pub label: Option<String>,
}

impl Series {
    /// Creates a curve through the given points, in order.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::from_segments(vec![points.into_iter().collect::<Vec<_>>()])
    }

    /// Creates a curve from runs of points that should not be connected to each other.
    pub fn from_segments<I>(segments: impl IntoIterator<Item = I>) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            segments: segments.into_iter()
                .map(|segment| segment.into_iter().map(GraphPoint::from).collect::<Vec<_>>())
                .filter(|segment| !segment.is_empty())
                .collect(),
            color: BLUE,
            label: None,
        }
    }

    /// Sets the color of the curve.
    ///
    /// Returns the series itself to allow chaining.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the legend entry of the curve.
    ///
    /// Returns the series itself to allow chaining.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns all points of the curve.
    pub fn points(&self) -> impl Iterator<Item = GraphPoint<f64>> + '_ {
        self.segments.iter().flatten().copied()
    }
}

/// A shaded region between two curves sampled at the same x-values.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    /// The shared x-values.
    pub xs: Vec<f64>,

    /// The y-values of the first curve.
    pub upper: Vec<f64>,

    /// The y-values of the second curve.
    pub lower: Vec<f64>,

    /// If true, only the parts where `upper` is strictly greater than `lower` are shaded. The
    /// boundaries of each shaded part are interpolated to where the curves cross.
    pub where_above: bool,

    /// The color of the region.
    pub color: Color,

    /// The opacity of the region, in the range `0.0` to `1.0`.
    pub opacity: f64,
}

impl Fill {
    /// Shades the whole region between two curves.
    pub fn between(xs: Vec<f64>, upper: Vec<f64>, lower: Vec<f64>) -> Self {
        Self {
            xs,
            upper,
            lower,
            where_above: false,
            color: PURPLE,
            opacity: 0.3,
        }
    }

    /// Shades the region between a curve and the horizontal line `y = level`.
    pub fn to_level(xs: Vec<f64>, ys: Vec<f64>, level: f64) -> Self {
        let lower = vec![level; ys.len()];
        Self::between(xs, ys, lower)
    }

    /// Only shade where the first curve is above the second.
    ///
    /// Returns the fill itself to allow chaining.
    pub fn where_above(mut self) -> Self {
        self.where_above = true;
        self
    }

    /// Sets the color of the region.
    ///
    /// Returns the fill itself to allow chaining.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the opacity of the region.
    ///
    /// Returns the fill itself to allow chaining.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    fn len(&self) -> usize {
        self.xs.len().min(self.upper.len()).min(self.lower.len())
    }

    fn is_inside(&self, i: usize) -> bool {
        !self.where_above || self.upper[i] > self.lower[i]
    }

    /// Returns the point between samples `i` and `i + 1` where the two curves cross, if they do.
    fn crossing(&self, i: usize) -> Option<GraphPoint<f64>> {
        let d0 = self.upper[i] - self.lower[i];
        let d1 = self.upper[i + 1] - self.lower[i + 1];
        if d0 == d1 {
            return None;
        }

        let t = d0 / (d0 - d1);
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some(GraphPoint(
            self.xs[i] + t * (self.xs[i + 1] - self.xs[i]),
            self.lower[i] + t * (self.lower[i + 1] - self.lower[i]),
        ))
    }

    /// Returns the closed polygons to shade: each runs forward along the first curve and back
    /// along the second.
    pub fn polygons(&self) -> Vec<Vec<GraphPoint<f64>>> {
        fn close(
            mut top: Vec<GraphPoint<f64>>,
            bottom: Vec<GraphPoint<f64>>,
        ) -> Vec<GraphPoint<f64>> {
            top.extend(bottom.into_iter().rev());
            top
        }

        let mut polygons = Vec::new();
        let mut top = Vec::new();
        let mut bottom = Vec::new();
        for i in 0..self.len() {
            if self.is_inside(i) {
                if top.is_empty() && i > 0 {
                    if let Some(point) = self.crossing(i - 1) {
                        top.push(point);
                        bottom.push(point);
                    }
                }
                top.push(GraphPoint(self.xs[i], self.upper[i]));
                bottom.push(GraphPoint(self.xs[i], self.lower[i]));
            } else if !top.is_empty() {
                if let Some(point) = self.crossing(i - 1) {
                    top.push(point);
                    bottom.push(point);
                }
                polygons.push(close(std::mem::take(&mut top), std::mem::take(&mut bottom)));
            }
        }
        if !top.is_empty() {
            polygons.push(close(top, bottom));
        }
        polygons
    }
}
