//! Declarative plots.
//!
//! A [`Graph`] describes a figure: line series, point markers, shaded regions, a title, axis
//! labels, and a legend. Describing a figure does not draw anything, so the description can be
//! inspected and compared. Call [`Graph::draw()`] to render the figure to an image with the
//! [`cairo`] crate, or [`Graph::save_png()`] to render it straight to a PNG file.
//!
//! # Example
//!
//! ```no_run
//! use precalc_graph::{Graph, Point, Series};
//! use precalc_graph::color::GREEN;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xs = (-20..=20).map(|i| i as f64 / 4.0);
//! let mut graph = Graph::new();
//! graph.add_series(Series::new(xs.map(|x| (x, x * x - 4.0))).with_label("y = x^2 - 4"))
//!     .add_point(Point::new((2.0, 0.0)).with_color(GREEN).with_label("Root: 2.00"))
//!     .add_point(Point::new((-2.0, 0.0)).with_color(GREEN).with_label("Root: -2.00"))
//!     .title("Quadratic Function")
//!     .labels("x", "y")
//!     .fit_to_data();
//! graph.save_png("output.png")?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod opts;
pub mod point;
pub mod series;
pub mod ticks;

use cairo::{Context, Error, FontSlant, FontWeight, Format, ImageSurface, IoError};
use color::{Color, BLACK, GRAY, WHITE};
use log::debug;
pub use opts::GraphOptions;
pub use point::{CanvasPoint, GraphPoint, Point};
pub use series::{Fill, Series};
use std::{f64::consts::PI, fs::File, path::Path};
use super::text_align::ShowTextAlign;

/// The radius of point markers, in pixels.
const MARKER_RADIUS: f64 = 9.0;

/// An entry of the legend.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendEntry<'a> {
    /// A line series.
    Line(&'a str, Color),

    /// A point marker.
    Marker(&'a str, Color),
}

/// A figure containing series, points, and shaded regions to draw.
///
/// See the [module-level documentation](self) for more information.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The line series to draw.
    pub series: Vec<Series>,

    /// The points to draw.
    pub points: Vec<Point<f64>>,

    /// The shaded regions to draw, underneath the series.
    pub fills: Vec<Fill>,

    /// The title, drawn above the plot area.
    pub title: Option<String>,

    /// The labels of the horizontal and vertical axes.
    pub axis_labels: Option<(String, String)>,

    /// The rendering options for the graph.
    pub options: GraphOptions,
}

impl Graph {
    /// Create a new, empty graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Create a new graph with the given options.
    pub fn with_opts(options: GraphOptions) -> Graph {
        Graph {
            options,
            ..Graph::default()
        }
    }

    /// Add a line series to the graph.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    /// Add a point to the graph.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn add_point(&mut self, point: impl Into<Point<f64>>) -> &mut Self {
        self.points.push(point.into());
        self
    }

    /// Add a shaded region to the graph.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn add_fill(&mut self, fill: Fill) -> &mut Self {
        self.fills.push(fill);
        self
    }

    /// Set the title of the graph.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the labels of the horizontal and vertical axes.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn labels(&mut self, x: impl Into<String>, y: impl Into<String>) -> &mut Self {
        self.axis_labels = Some((x.into(), y.into()));
        self
    }

    /// Returns the legend entries, in drawing order: series first, then points.
    pub fn legend(&self) -> Vec<LegendEntry<'_>> {
        let lines = self.series.iter()
            .filter_map(|series| series.label.as_deref().map(|label| LegendEntry::Line(label, series.color)));
        let markers = self.points.iter()
            .filter_map(|point| point.label.as_deref().map(|label| LegendEntry::Marker(label, point.color)));
        lines.chain(markers).collect()
    }

    /// Returns the smallest `((x_min, x_max), (y_min, y_max))` box containing every series point,
    /// marker, and shaded region, or [`None`] if the graph is empty.
    pub fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let series_points = self.series.iter().flat_map(Series::points);
        let markers = self.points.iter().map(|point| point.coordinates);
        let fills = self.fills.iter().flat_map(|fill| fill.polygons().into_iter().flatten());

        series_points.chain(markers)
            .chain(fills)
            .filter(|point| point.0.is_finite() && point.1.is_finite())
            .fold(None, |bounds, GraphPoint(x, y)| match bounds {
                None => Some(((x, x), (y, y))),
                Some(((x_min, x_max), (y_min, y_max))) => Some((
                    (f64::min(x_min, x), f64::max(x_max, x)),
                    (f64::min(y_min, y), f64::max(y_max, y)),
                )),
            })
    }

    /// Center the graph on its data and scale it so that all of it is visible, with a margin of
    /// 5% of the data range on each side.
    ///
    /// Returns a mutable reference to the graph to allow chaining.
    pub fn fit_to_data(&mut self) -> &mut Self {
        fn padded((min, max): (f64, f64)) -> (f64, f64) {
            let span = max - min;
            let padding = if span > 0.0 { span * 0.05 } else { 1.0 };
            (min - padding, max + padding)
        }

        if let Some((x, y)) = self.data_bounds() {
            self.options = self.options.view(padded(x), padded(y));
        }
        self
    }

    /// Creates an [`ImageSurface`] with the graph's canvas size and draws the graph to it.
    ///
    /// The resulting [`ImageSurface`] can be written to a file or manipulated further.
    pub fn draw(&self) -> Result<ImageSurface, Error> {
        debug!(
            "drawing graph {:?}: {} series, {} points, {} fills",
            self.title, self.series.len(), self.points.len(), self.fills.len(),
        );

        let surface = ImageSurface::create(
            Format::ARgb32,
            self.options.canvas_size.0 as i32,
            self.options.canvas_size.1 as i32,
        )?;
        let context = Context::new(&surface)?;

        set_color(&context, WHITE);
        context.paint()?;

        context.select_font_face("sans-serif", FontSlant::Normal, FontWeight::Normal);

        // everything in graph space is clipped to the plot area
        context.save()?;
        let (width, height) = self.options.plot_size();
        context.rectangle(self.options.margin, self.options.margin, width, height);
        context.clip();

        self.draw_grid_lines(&context)?;
        self.draw_fills(&context)?;
        self.draw_origin_axes(&context)?;
        self.draw_series(&context)?;
        self.draw_points(&context)?;
        context.restore()?;

        self.draw_frame(&context)?;
        self.draw_tick_numbers(&context)?;
        self.draw_titles(&context)?;
        self.draw_legend(&context)?;

        Ok(surface)
    }

    /// Draws the graph and writes it to a PNG file at the given path.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), IoError> {
        let surface = self.draw()?;
        let mut file = File::create(path.as_ref())?;
        surface.write_to_png(&mut file)?;
        debug!("wrote graph to {}", path.as_ref().display());
        Ok(())
    }

    /// Returns the grid line positions along the x- and y-axes.
    fn grid(&self) -> (Vec<f64>, Vec<f64>) {
        let (x_min, x_max) = self.options.x_range();
        let (y_min, y_max) = self.options.y_range();
        let x_step = ticks::nice_step(x_max - x_min, self.options.grid_lines);
        let y_step = ticks::nice_step(y_max - y_min, self.options.grid_lines);
        (ticks::ticks(x_min, x_max, x_step), ticks::ticks(y_min, y_max, y_step))
    }

    /// Draw grid lines.
    fn draw_grid_lines(&self, context: &Context) -> Result<(), Error> {
        let (r, g, b) = GRAY;
        context.set_source_rgba(r, g, b, self.options.grid_opacity);
        context.set_line_width(1.5);

        let (x_min, x_max) = self.options.x_range();
        let (y_min, y_max) = self.options.y_range();
        let (xs, ys) = self.grid();

        // vertical grid lines (x = ...)
        for x in xs {
            let x_canvas = self.options.x_to_canvas(x);
            context.move_to(x_canvas, self.options.y_to_canvas(y_max));
            context.line_to(x_canvas, self.options.y_to_canvas(y_min));
            context.stroke()?;
        }

        // horizontal grid lines (y = ...)
        for y in ys {
            let y_canvas = self.options.y_to_canvas(y);
            context.move_to(self.options.x_to_canvas(x_min), y_canvas);
            context.line_to(self.options.x_to_canvas(x_max), y_canvas);
            context.stroke()?;
        }

        Ok(())
    }

    /// Draw the origin axes if applicable.
    fn draw_origin_axes(&self, context: &Context) -> Result<(), Error> {
        set_color(context, GRAY);
        context.set_line_width(2.0);

        let (x_min, x_max) = self.options.x_range();
        let (y_min, y_max) = self.options.y_range();
        let origin_canvas = self.options.to_canvas(GraphPoint(0.0, 0.0));

        // vertical axis (x = 0)
        if (x_min..=x_max).contains(&0.0) {
            context.move_to(origin_canvas.0, self.options.y_to_canvas(y_max));
            context.line_to(origin_canvas.0, self.options.y_to_canvas(y_min));
            context.stroke()?;
        }

        // horizontal axis (y = 0)
        if (y_min..=y_max).contains(&0.0) {
            context.move_to(self.options.x_to_canvas(x_min), origin_canvas.1);
            context.line_to(self.options.x_to_canvas(x_max), origin_canvas.1);
            context.stroke()?;
        }

        Ok(())
    }

    /// Draw the shaded regions.
    fn draw_fills(&self, context: &Context) -> Result<(), Error> {
        for fill in self.fills.iter() {
            let (r, g, b) = fill.color;
            context.set_source_rgba(r, g, b, fill.opacity);
            for polygon in fill.polygons() {
                let mut canvas_points = polygon.into_iter().map(|point| self.options.to_canvas(point));
                let Some(first) = canvas_points.next() else {
                    continue;
                };
                context.move_to(first.0, first.1);
                for point in canvas_points {
                    context.line_to(point.0, point.1);
                }
                context.close_path();
                context.fill()?;
            }
        }

        Ok(())
    }

    /// Draw the line series.
    fn draw_series(&self, context: &Context) -> Result<(), Error> {
        context.set_line_width(self.options.line_width);

        for series in self.series.iter() {
            set_color(context, series.color);
            for segment in series.segments.iter() {
                let mut first_point = true;
                for point in segment.iter() {
                    let canvas = self.options.to_canvas(*point);
                    if first_point {
                        context.move_to(canvas.0, canvas.1);
                        first_point = false;
                    } else {
                        context.line_to(canvas.0, canvas.1);
                    }
                }
                context.stroke()?;
            }
        }

        Ok(())
    }

    /// Draw the points in the graph.
    fn draw_points(&self, context: &Context) -> Result<(), Error> {
        for point in self.points.iter() {
            let canvas = self.options.to_canvas(point.coordinates);
            set_color(context, point.color);
            context.arc(canvas.0, canvas.1, MARKER_RADIUS, 0.0, 2.0 * PI);
            context.fill()?;
        }

        Ok(())
    }

    /// Draw the border of the plot area.
    fn draw_frame(&self, context: &Context) -> Result<(), Error> {
        set_color(context, BLACK);
        context.set_line_width(2.0);
        let (width, height) = self.options.plot_size();
        context.rectangle(self.options.margin, self.options.margin, width, height);
        context.stroke()
    }

    /// Draw grid line numbers along the bottom and left edges of the plot area.
    fn draw_tick_numbers(&self, context: &Context) -> Result<(), Error> {
        set_color(context, BLACK);
        context.set_font_size(20.0);

        let padding = 8.0;
        let (_, height) = self.options.plot_size();
        let bottom = self.options.margin + height;
        let left = self.options.margin;
        let (xs, ys) = self.grid();

        for x in xs {
            context.show_text_align(
                &ticks::format_tick(x),
                (self.options.x_to_canvas(x), bottom + padding),
                (0.5, 1.0),
            )?;
        }

        for y in ys {
            context.show_text_align(
                &ticks::format_tick(y),
                (left - padding, self.options.y_to_canvas(y)),
                (1.0, 0.5),
            )?;
        }

        Ok(())
    }

    /// Draw the title and the axis labels.
    fn draw_titles(&self, context: &Context) -> Result<(), Error> {
        set_color(context, BLACK);
        let (width, height) = self.options.plot_size();
        let center_x = self.options.margin + width / 2.0;
        let center_y = self.options.margin + height / 2.0;

        if let Some(title) = &self.title {
            context.set_font_size(30.0);
            context.show_text_align(title, (center_x, self.options.margin / 2.0), (0.5, 0.5))?;
        }

        if let Some((x_label, y_label)) = &self.axis_labels {
            context.set_font_size(24.0);
            let canvas_height = self.options.canvas_size.1 as f64;
            context.show_text_align(x_label, (center_x, canvas_height - self.options.margin / 4.0), (0.5, 0.0))?;

            // vertical text, reading bottom to top
            context.save()?;
            context.translate(self.options.margin / 4.0, center_y);
            context.rotate(-PI / 2.0);
            context.show_text_align(y_label, (0.0, 0.0), (0.5, 1.0))?;
            context.restore()?;
        }

        Ok(())
    }

    /// Draw the legend in the top right corner of the plot area.
    fn draw_legend(&self, context: &Context) -> Result<(), Error> {
        let entries = self.legend();
        if entries.is_empty() {
            return Ok(());
        }

        context.set_font_size(20.0);
        let padding = 12.0;
        let swatch = 30.0;
        let line_height = 30.0;

        let mut text_width: f64 = 0.0;
        for entry in entries.iter() {
            let (LegendEntry::Line(label, _) | LegendEntry::Marker(label, _)) = entry;
            text_width = text_width.max(context.text_extents(label)?.width());
        }

        let (width, _) = self.options.plot_size();
        let box_width = padding * 3.0 + swatch + text_width;
        let box_height = padding * 2.0 + line_height * entries.len() as f64;
        let box_x = self.options.margin + width - box_width - padding;
        let box_y = self.options.margin + padding;

        context.set_source_rgba(1.0, 1.0, 1.0, 0.85);
        context.rectangle(box_x, box_y, box_width, box_height);
        context.fill_preserve()?;
        set_color(context, GRAY);
        context.set_line_width(1.0);
        context.stroke()?;

        for (i, entry) in entries.iter().enumerate() {
            let row_y = box_y + padding + line_height * (i as f64 + 0.5);
            let swatch_x = box_x + padding;
            let label = match entry {
                LegendEntry::Line(label, color) => {
                    set_color(context, *color);
                    context.set_line_width(self.options.line_width);
                    context.move_to(swatch_x, row_y);
                    context.line_to(swatch_x + swatch, row_y);
                    context.stroke()?;
                    label
                },
                LegendEntry::Marker(label, color) => {
                    set_color(context, *color);
                    context.arc(swatch_x + swatch / 2.0, row_y, MARKER_RADIUS / 1.5, 0.0, 2.0 * PI);
                    context.fill()?;
                    label
                },
            };

            set_color(context, BLACK);
            context.show_text_align(label, (swatch_x + swatch + padding, row_y), (0.0, 0.5))?;
        }

        Ok(())
    }
}

fn set_color(context: &Context, (r, g, b): Color) {
    context.set_source_rgb(r, g, b);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::color::{GREEN, RED};
    use super::*;

    #[test]
    fn legend_lists_labeled_items() {
        let mut graph = Graph::new();
        graph.add_series(Series::new([(0.0, 0.0), (1.0, 1.0)]).with_label("y = x"))
            .add_series(Series::new([(0.0, 1.0), (1.0, 1.0)]))
            .add_point(Point::new((0.0, 0.0)).with_label("Vertex"))
            .add_point((1.0, 1.0));

        assert_eq!(graph.legend(), vec![
            LegendEntry::Line("y = x", color::BLUE),
            LegendEntry::Marker("Vertex", RED),
        ]);
    }

    #[test]
    fn data_bounds_cover_everything() {
        let mut graph = Graph::new();
        graph.add_series(Series::new([(-2.0, 4.0), (2.0, 4.0)]))
            .add_point(Point::new((0.0, -1.0)).with_color(GREEN))
            .add_fill(Fill::to_level(vec![-3.0, 3.0], vec![0.0, 0.0], 6.0));

        assert_eq!(graph.data_bounds(), Some(((-3.0, 3.0), (-1.0, 6.0))));
        assert_eq!(Graph::new().data_bounds(), None);
    }

    #[test]
    fn fit_pads_data() {
        let mut graph = Graph::new();
        graph.add_series(Series::new([(-10.0, 0.0), (10.0, 100.0)])).fit_to_data();
        assert_eq!(graph.options.x_range(), (-11.0, 11.0));
        assert_eq!(graph.options.y_range(), (-5.0, 105.0));
    }

    #[test]
    fn fit_flat_data() {
        let mut graph = Graph::new();
        graph.add_series(Series::new([(0.0, 3.0), (4.0, 3.0)])).fit_to_data();
        assert_eq!(graph.options.y_range(), (2.0, 4.0));
    }

    #[test]
    fn builder_sets_titles() {
        let mut graph = Graph::new();
        graph.title("System of Equations").labels("x", "y");
        assert_eq!(graph.title.as_deref(), Some("System of Equations"));
        assert_eq!(graph.axis_labels, Some(("x".to_string(), "y".to_string())));
    }
}
