use super::point::{CanvasPoint, GraphPoint};

/// Options to use when drawing a graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphOptions {
    /// The width and height of the canvas, in pixels.
    ///
    /// The default value is `(1000, 1000)`.
    pub canvas_size: CanvasPoint<u16>,

    /// The space, in pixels, between each edge of the canvas and the plot area. The title, axis
    /// labels, and tick numbers are drawn in this space.
    ///
    /// The default value is `90.0`.
    pub margin: f64,

    /// The `(x, y)` point at which to center the plot area.
    ///
    /// This field will automatically be computed when calling
    /// [`Graph::fit_to_data`](super::Graph::fit_to_data).
    ///
    /// The default value is `(0.0, 0.0)`.
    pub center: GraphPoint<f64>,

    /// The `(x, y)` scale of the graph.
    ///
    /// The scale indicates the distance, in graph units, from the center of the plot area to its
    /// edge. For example, when the graph is centered at `(0.0, 0.0)` with a scale of `(10.0,
    /// 10.0)`, the visible graph will be from `(x, y): (-10.0, -10.0)` to `(x, y): (10.0, 10.0)`.
    ///
    /// This field will automatically be computed when calling
    /// [`Graph::fit_to_data`](super::Graph::fit_to_data).
    ///
    /// The default value is `(10.0, 10.0)`.
    pub scale: GraphPoint<f64>,

    /// The approximate number of grid lines to draw along each axis. The exact spacing is rounded
    /// to 1, 2, or 5 times a power of ten.
    ///
    /// The default value is `10`.
    pub grid_lines: usize,

    /// The opacity of the grid lines, given as a value in the range `0.0` to `1.0`, where `0.0` is
    /// fully transparent and `1.0` is fully opaque.
    ///
    /// The default value is `0.3`.
    pub grid_opacity: f64,

    /// The width of plotted lines, in pixels.
    ///
    /// The default value is `3.0`.
    pub line_width: f64,
}

/// The default options for a graph. Returns a [`GraphOptions`] with the following values:
///
/// - [`canvas_size`](GraphOptions::canvas_size): `(1000, 1000)`
/// - [`margin`](GraphOptions::margin): `90.0`
/// - [`center`](GraphOptions::center): `(0.0, 0.0)`
/// - [`scale`](GraphOptions::scale): `(10.0, 10.0)`
/// - [`grid_lines`](GraphOptions::grid_lines): `10`
/// - [`grid_opacity`](GraphOptions::grid_opacity): `0.3`
/// - [`line_width`](GraphOptions::line_width): `3.0`
impl Default for GraphOptions {
    fn default() -> GraphOptions {
        GraphOptions {
            canvas_size: CanvasPoint(1000, 1000),
            margin: 90.0,
            center: GraphPoint(0.0, 0.0),
            scale: GraphPoint(10.0, 10.0),
            grid_lines: 10,
            grid_opacity: 0.3,
            line_width: 3.0,
        }
    }
}

impl GraphOptions {
    /// Set the canvas size. Returns an updated [`GraphOptions`] for chaining.
    pub fn canvas_size(mut self, width: u16, height: u16) -> Self {
        self.canvas_size = CanvasPoint(width, height);
        self
    }

    /// Set the margin around the plot area. Returns an updated [`GraphOptions`] for chaining.
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the center of the graph. Returns an updated [`GraphOptions`] for chaining.
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center = GraphPoint(x, y);
        self
    }

    /// Set the scale of the graph. Returns an updated [`GraphOptions`] for chaining.
    pub fn scale(mut self, x: f64, y: f64) -> Self {
        self.scale = GraphPoint(x, y);
        self
    }

    /// Set the visible `x` and `y` ranges of the graph. Returns an updated [`GraphOptions`] for
    /// chaining.
    pub fn view(self, (x_min, x_max): (f64, f64), (y_min, y_max): (f64, f64)) -> Self {
        self.center((x_min + x_max) / 2.0, (y_min + y_max) / 2.0)
            .scale((x_max - x_min) / 2.0, (y_max - y_min) / 2.0)
    }

    /// Set the approximate number of grid lines along each axis. Returns an updated
    /// [`GraphOptions`] for chaining.
    pub fn grid_lines(mut self, grid_lines: usize) -> Self {
        self.grid_lines = grid_lines;
        self
    }

    /// Set the opacity of the grid lines. Returns an updated [`GraphOptions`] for chaining.
    pub fn grid_opacity(mut self, grid_opacity: f64) -> Self {
        self.grid_opacity = grid_opacity;
        self
    }

    /// Set the width of plotted lines. Returns an updated [`GraphOptions`] for chaining.
    pub fn line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

impl GraphOptions {
    /// Returns the width and height of the plot area, in pixels.
    pub fn plot_size(&self) -> (f64, f64) {
        (
            (self.canvas_size.0 as f64 - 2.0 * self.margin).max(1.0),
            (self.canvas_size.1 as f64 - 2.0 * self.margin).max(1.0),
        )
    }

    /// Returns the visible range of x-values.
    pub fn x_range(&self) -> (f64, f64) {
        (self.center.0 - self.scale.0, self.center.0 + self.scale.0)
    }

    /// Returns the visible range of y-values.
    pub fn y_range(&self) -> (f64, f64) {
        (self.center.1 - self.scale.1, self.center.1 + self.scale.1)
    }

    /// Converts an x-value in **graph** space to an x-value in **canvas** space.
    pub(crate) fn x_to_canvas(&self, x: f64) -> f64 {
        let graph_space_range = self.scale.0 * 2.0;

        // normalize x-value to [0.0, 1.0], where 0.0 indicates left-edge of plot area, 1.0
        // indicates right-edge of plot area
        let normalized = (x - self.center.0) / graph_space_range + 0.5;

        self.margin + normalized * self.plot_size().0
    }

    /// Converts a y-value in **graph** space to a y-value in **canvas** space.
    pub(crate) fn y_to_canvas(&self, y: f64) -> f64 {
        let graph_space_range = self.scale.1 * 2.0;

        // flipped, since canvas y grows downwards
        let normalized = 0.5 - (y - self.center.1) / graph_space_range;

        self.margin + normalized * self.plot_size().1
    }

    /// Converts a point in **graph** space to **canvas** space.
    pub fn to_canvas(&self, point: GraphPoint<f64>) -> CanvasPoint<f64> {
        CanvasPoint(
            self.x_to_canvas(point.0),
            self.y_to_canvas(point.1),
        )
    }

    /// Converts an x-value in **canvas** space to an x-value in **graph** space.
    pub(crate) fn x_to_graph(&self, x: f64) -> f64 {
        let normalized = (x - self.margin) / self.plot_size().0;

        let graph_space_range = self.scale.0 * 2.0;
        let left_edge_graph_space = self.center.0 - self.scale.0;

        normalized * graph_space_range + left_edge_graph_space
    }

    /// Converts a y-value in **canvas** space to a y-value in **graph** space.
    pub(crate) fn y_to_graph(&self, y: f64) -> f64 {
        let normalized = 1.0 - (y - self.margin) / self.plot_size().1;

        let graph_space_range = self.scale.1 * 2.0;
        let bottom_edge_graph_space = self.center.1 - self.scale.1;

        normalized * graph_space_range + bottom_edge_graph_space
    }

    /// Converts a point in **canvas** space to **graph** space.
    pub fn to_graph(&self, point: CanvasPoint<f64>) -> GraphPoint<f64> {
        GraphPoint(
            self.x_to_graph(point.0),
            self.y_to_graph(point.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use super::*;

    fn options() -> GraphOptions {
        GraphOptions {
            canvas_size: CanvasPoint(465, 917),
            margin: 20.0,
            center: GraphPoint(-3.0, 2.41),
            scale: GraphPoint(3.59, 5.69),
            ..Default::default()
        }
    }

    /// Test the conversion functions from canvas to graph space.
    #[test]
    fn canvas_to_graph() {
        let options = options();
        let (width, height) = options.plot_size();

        assert_float_relative_eq!(options.x_to_graph(options.margin), options.center.0 - options.scale.0);
        assert_float_relative_eq!(options.x_to_graph(options.margin + width), options.center.0 + options.scale.0);
        assert_float_relative_eq!(options.y_to_graph(options.margin), options.center.1 + options.scale.1);
        assert_float_relative_eq!(options.y_to_graph(options.margin + height), options.center.1 - options.scale.1);
    }

    /// Test the conversion functions from graph to canvas space.
    #[test]
    fn graph_to_canvas() {
        let options = options();
        let (width, height) = options.plot_size();

        assert_float_relative_eq!(options.x_to_canvas(options.center.0 - options.scale.0), options.margin);
        assert_float_relative_eq!(options.x_to_canvas(options.center.0 + options.scale.0), options.margin + width);
        assert_float_relative_eq!(options.y_to_canvas(options.center.1 + options.scale.1), options.margin);
        assert_float_relative_eq!(options.y_to_canvas(options.center.1 - options.scale.1), options.margin + height);
    }

    #[test]
    fn view_sets_center_and_scale() {
        let options = GraphOptions::default().view((-5.0, 15.0), (0.0, 4.0));
        assert_eq!(options.center, GraphPoint(5.0, 2.0));
        assert_eq!(options.scale, GraphPoint(10.0, 2.0));
        assert_eq!(options.x_range(), (-5.0, 15.0));
        assert_eq!(options.y_range(), (0.0, 4.0));
    }
}
