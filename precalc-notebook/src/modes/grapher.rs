//! Mode 1: graph an equation and print a table of its values.

use crate::{
    controls::{Control, Slider, TextBox},
    event::Action,
    output::ViewOutput,
};
use log::{debug, info};
use precalc_compute::{
    numerical::{ctxt::Ctxt, eval::Eval, value::Value},
    primitive::rational,
    sample::{linspace, sample_expr, SampleSet},
};
use precalc_graph::{color::BLUE, Fill, Graph, Series};
use precalc_parser::parser::{expr::Expr, Parser};
use std::slice;
use super::{report, Mode, Settings};

/// The integers the table of values is printed for.
const TABLE_RANGE: std::ops::RangeInclusive<i32> = -5..=5;

/// An expression that was submitted, with the text it was parsed from.
#[derive(Debug, Clone)]
struct Submission {
    source: String,
    expr: Expr,
}

/// Graphs a single expression in `x` and prints a table of its values.
///
/// The zoom control is only displayed once an expression has been submitted, and changing it
/// redraws the last submitted expression without parsing it again.
#[derive(Debug)]
pub struct Grapher {
    settings: Settings,
    ctxt: Ctxt,
    input: TextBox,
    zoom: Option<Slider>,
    submission: Option<Submission>,
}

impl Grapher {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ctxt: Ctxt::default(),
            input: TextBox::new("y", "y ="),
            zoom: None,
            submission: None,
        }
    }

    /// Parses the text box, prints the table of values, and draws the graph.
    fn submit(&mut self, output: &mut ViewOutput) {
        let source = self.input.value().to_string();
        let expr = match Parser::new(&source).try_parse_full::<Expr>() {
            Ok(expr) => expr,
            Err(errs) => {
                output.main.print("Invalid equation.");
                report(&mut output.main, &self.settings, "y", &source, &errs.into_iter().map(Into::into).collect::<Vec<_>>());
                return;
            },
        };
        debug!("graphing `{}` parsed as {:?}", source, expr);

        output.main.print("Table of Values");
        output.main.print("x\t\ty");
        for x in TABLE_RANGE {
            let value = expr.eval(&self.ctxt.with_var("x", Value::Exact(rational(x))));
            let y = match value {
                Ok(value) => value.to_string(),
                Err(err) => {
                    debug!("`{}` at x = {}: {:?}", source, x, err.kind);
                    "undefined".to_string()
                },
            };
            output.main.print(format!("{}\t\t{}", x, y));
        }

        self.submission = Some(Submission { source, expr });
        self.zoom = Some(Slider::int("zoom", 5, 30, 10));
        self.draw(output);
    }

    /// Samples the submitted expression over the zoom range and draws it.
    fn draw(&self, output: &mut ViewOutput) {
        let (Some(submission), Some(zoom)) = (&self.submission, &self.zoom) else {
            return;
        };

        output.widget.clear();
        let zoom = zoom.value_f64();
        let xs = linspace(-zoom, zoom, self.settings.sample_count);
        match sample_expr(&submission.expr, &self.ctxt, "x", xs) {
            Ok(samples) => {
                info!("graphing `{}` over [{}, {}]", submission.expr, -zoom, zoom);
                output.widget.plot(self.graph(&submission.expr, &samples));
            },
            Err(err) => {
                output.widget.print("Could not graph the equation.");
                report(&mut output.widget, &self.settings, "y", &submission.source, slice::from_ref(&err));
            },
        }
    }

    /// Builds the graph of the samples, shading between the curve and its largest value.
    fn graph(&self, expr: &Expr, samples: &SampleSet) -> Graph {
        let label = format!("y = {}", expr);
        let segments = samples.segments();

        let mut graph = Graph::with_opts(self.settings.graph);
        if let Some(max) = samples.max_y() {
            for segment in segments.iter() {
                let (xs, ys): (Vec<f64>, Vec<f64>) = segment.iter().copied().unzip();
                graph.add_fill(Fill::to_level(xs, ys, max).with_color(BLUE).with_opacity(0.1));
            }
        }
        graph.add_series(Series::from_segments(segments).with_color(BLUE).with_label(label.clone()))
            .title(format!("Graph of {}", label))
            .labels("x", "y")
            .fit_to_data();
        graph
    }
}

impl Mode for Grapher {
    fn controls(&self) -> Vec<&dyn Control> {
        let mut controls: Vec<&dyn Control> = vec![&self.input];
        if let Some(zoom) = &self.zoom {
            controls.push(zoom);
        }
        controls
    }

    fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control> {
        match name {
            "y" => Some(&mut self.input),
            "zoom" => self.zoom.as_mut().map(|zoom| zoom as &mut dyn Control),
            _ => None,
        }
    }

    fn handle(&mut self, action: Action<'_>, output: &mut ViewOutput) {
        match action {
            Action::Submitted("y") => self.submit(output),
            Action::Changed("zoom") => self.draw(output),
            _ => {},
        }
    }
}
