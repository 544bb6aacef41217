//! Mode 4: analyze the quadratic function `y = a*x**2 + b*x + c`.

use crate::{
    controls::{Control, Slider},
    event::Action,
    output::ViewOutput,
};
use log::debug;
use precalc_compute::{
    sample::{linspace, sample_with},
    solve::{Quadratic, QuadraticAnalysis},
};
use precalc_graph::{color::{BLUE, GREEN, RED}, Graph, Point, Series};
use super::{Mode, Settings};

/// Prints the vertex, discriminant, and real roots of a quadratic function, and graphs it around
/// its vertex.
#[derive(Debug)]
pub struct QuadraticAnalyzer {
    settings: Settings,
    a: Slider,
    b: Slider,
    c: Slider,
    zoom: Slider,
}

impl QuadraticAnalyzer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            a: Slider::float("a", "-10", "10", "0.1", "1"),
            b: Slider::float("b", "-10", "10", "0.1", "0"),
            c: Slider::float("c", "-10", "10", "0.1", "0"),
            zoom: Slider::int("zoom", 5, 30, 10),
        }
    }

    fn render(&self, output: &mut ViewOutput) {
        output.widget.clear();

        let quadratic = match Quadratic::new(
            self.a.value().clone(),
            self.b.value().clone(),
            self.c.value().clone(),
        ) {
            Ok(quadratic) => quadratic,
            Err(err) => {
                debug!("not analyzing: {:?}", err);
                output.widget.print("'a' cannot be zero in a quadratic function.");
                return;
            },
        };

        let analysis = quadratic.analyze();
        let (vx, vy) = &analysis.vertex;
        output.widget.print(format!("Vertex: ({}, {})", vx, vy));
        output.widget.print(format!("Discriminant: {}", analysis.discriminant));
        if analysis.roots.is_empty() {
            output.widget.print("No real roots.");
        } else {
            let roots = analysis.roots.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            output.widget.print(format!("Roots: [{}]", roots));
        }

        output.widget.plot(self.graph(&quadratic, &analysis));
    }

    fn graph(&self, quadratic: &Quadratic, analysis: &QuadraticAnalysis) -> Graph {
        let vx = analysis.vertex.0.to_f64();
        let vy = analysis.vertex.1.to_f64();
        let zoom = self.zoom.value_f64();
        let samples = sample_with(
            linspace(vx - zoom, vx + zoom, self.settings.sample_count),
            |x| Some(quadratic.eval_f64(x)),
        );

        let label = format!(
            "y = {:?}x² + {:?}x + {:?}",
            self.a.value_f64(),
            self.b.value_f64(),
            self.c.value_f64(),
        );

        let mut graph = Graph::with_opts(self.settings.graph);
        graph.add_series(Series::new(samples.points()).with_color(BLUE).with_label(label))
            .add_point(Point::new((vx, vy)).with_color(RED).with_label("Vertex"));
        for root in analysis.roots.iter().map(|root| root.to_f64()) {
            graph.add_point(Point::new((root, 0.0))
                .with_color(GREEN)
                .with_label(format!("Root: {:.2}", root)));
        }
        graph.title("Quadratic Function")
            .labels("x", "y")
            .fit_to_data();
        graph
    }
}

impl Mode for QuadraticAnalyzer {
    fn activate(&mut self, output: &mut ViewOutput) {
        self.render(output);
    }

    fn controls(&self) -> Vec<&dyn Control> {
        vec![&self.a, &self.b, &self.c, &self.zoom]
    }

    fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control> {
        let slider = match name {
            "a" => &mut self.a,
            "b" => &mut self.b,
            "c" => &mut self.c,
            "zoom" => &mut self.zoom,
            _ => return None,
        };
        Some(slider)
    }

    fn handle(&mut self, action: Action<'_>, output: &mut ViewOutput) {
        if let Action::Changed(_) = action {
            self.render(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use crate::output::Cell;
    use pretty_assertions::assert_eq;
    use precalc_graph::GraphPoint;
    use super::*;

    fn analyze(a: &str, b: &str, c: &str) -> ViewOutput {
        let mut analyzer = QuadraticAnalyzer::new(Settings::default());
        let mut output = ViewOutput::default();
        analyzer.activate(&mut output);
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            analyzer.control_mut(name).unwrap().set(value).unwrap();
            analyzer.handle(Action::Changed(name), &mut output);
        }
        output
    }

    fn texts(output: &ViewOutput) -> Vec<&str> {
        output.cells().filter_map(Cell::as_text).collect()
    }

    #[test]
    fn two_roots() {
        let output = analyze("1", "0", "-4");
        assert_eq!(texts(&output), vec![
            "Vertex: (0, -4)",
            "Discriminant: 16",
            "Roots: [2, -2]",
        ]);

        let graph = output.cells().find_map(Cell::as_plot).unwrap();
        assert_eq!(graph.title.as_deref(), Some("Quadratic Function"));
        assert_eq!(graph.series[0].label.as_deref(), Some("y = 1.0x² + 0.0x + -4.0"));
        let labels = graph.points.iter().map(|p| p.label.as_deref().unwrap()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Vertex", "Root: 2.00", "Root: -2.00"]);
        assert_eq!(graph.points[0].coordinates, GraphPoint(0.0, -4.0));
        assert_eq!(graph.points[0].color, RED);
        assert_eq!(graph.points[1].color, GREEN);
    }

    #[test]
    fn no_real_roots() {
        let output = analyze("1", "0", "4");
        assert_eq!(texts(&output), vec![
            "Vertex: (0, 4)",
            "Discriminant: -16",
            "No real roots.",
        ]);
        let graph = output.cells().find_map(Cell::as_plot).unwrap();
        assert_eq!(graph.points.len(), 1);
    }

    #[test]
    fn irrational_roots() {
        let output = analyze("1", "0", "-2");
        assert_eq!(texts(&output)[2], "Roots: [sqrt(2), -sqrt(2)]");
        let graph = output.cells().find_map(Cell::as_plot).unwrap();
        assert_eq!(graph.points[1].label.as_deref(), Some("Root: 1.41"));
    }

    #[test]
    fn zero_leading_coefficient() {
        let output = analyze("0", "2", "1");
        assert_eq!(texts(&output), vec!["'a' cannot be zero in a quadratic function."]);
        assert!(output.cells().find_map(Cell::as_plot).is_none());
    }

    #[test]
    fn samples_around_vertex() {
        let output = analyze("1", "-4", "0");
        let graph = output.cells().find_map(Cell::as_plot).unwrap();
        let first = graph.series[0].points().next().unwrap();
        let last = graph.series[0].points().last().unwrap();
        assert_float_relative_eq!(first.0, -8.0);
        assert_float_relative_eq!(last.0, 12.0);
        assert_eq!(graph.series[0].points().count(), 400);
    }
}
