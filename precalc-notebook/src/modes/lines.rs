//! Mode 3: graph two lines and mark where they intersect.

use crate::{
    controls::{Control, Slider},
    event::Action,
    output::ViewOutput,
};
use log::debug;
use precalc_compute::{
    sample::{linspace, sample_with},
    solve::{Intersection, Line},
};
use precalc_graph::{color::{BLUE, GREEN, PURPLE, RED}, Fill, Graph, Point, Series};

use super::{Mode, Settings};

/// Graphs the lines `y = m1*x + b1` and `y = m2*x + b2`, redrawing them whenever a slider
/// changes.
#[derive(Debug)]
pub struct TwoLines {
    settings: Settings,
    m1: Slider,
    b1: Slider,
    m2: Slider,
    b2: Slider,
    zoom: Slider,
}

impl TwoLines {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            m1: Slider::float("m1", "-10", "10", "0.1", "1"),
            b1: Slider::float("b1", "-10", "10", "0.1", "0"),
            m2: Slider::float("m2", "-10", "10", "0.1", "-1"),
            b2: Slider::float("b2", "-10", "10", "0.1", "0"),
            zoom: Slider::int("zoom", 5, 30, 10),
        }
    }

    fn lines(&self) -> (Line, Line) {
        (
            Line::new(self.m1.value().clone(), self.b1.value().clone()),
            Line::new(self.m2.value().clone(), self.b2.value().clone()),
        )
    }

    /// Returns the legend label of a line, with its parameters printed as floats.
    fn label(m: &Slider, b: &Slider) -> String {
        format!("y = {:?}x + {:?}", m.value_f64(), b.value_f64())
    }

    fn render(&self, output: &mut ViewOutput) {
        output.widget.clear();

        let (first, second) = self.lines();
        let zoom = self.zoom.value_f64();
        let xs = linspace(-zoom, zoom, self.settings.sample_count);
        let first_ys = sample_with(xs.clone(), |x| Some(first.eval_f64(x)));
        let second_ys = sample_with(xs.clone(), |x| Some(second.eval_f64(x)));

        let mut graph = Graph::with_opts(self.settings.graph);
        graph.add_series(Series::new(first_ys.points()).with_color(BLUE).with_label(Self::label(&self.m1, &self.b1)))
            .add_series(Series::new(second_ys.points()).with_color(GREEN).with_label(Self::label(&self.m2, &self.b2)));

        let upper = first_ys.points().map(|(_, y)| y).collect();
        let lower = second_ys.points().map(|(_, y)| y).collect();
        graph.add_fill(Fill::between(xs, upper, lower).where_above().with_color(PURPLE).with_opacity(0.1));

        match first.intersect(&second) {
            Intersection::Point { x, y } => {
                let (x, y) = (x.to_f64(), y.to_f64());
                debug!("lines intersect at ({}, {})", x, y);
                graph.add_point(Point::new((x, y))
                    .with_color(RED)
                    .with_label(format!("Intersection ({:.2}, {:.2})", x, y)));
            },
            Intersection::Parallel => {
                output.widget.print("No intersection: the lines are parallel.");
            },
            Intersection::Coincident => {
                output.widget.print("Infinitely many intersections: the lines are identical.");
            },
        }

        graph.title("System of Equations")
            .labels("x", "y")
            .fit_to_data();
        output.widget.plot(graph);
    }
}

impl Mode for TwoLines {
    fn activate(&mut self, output: &mut ViewOutput) {
        self.render(output);
    }

    fn controls(&self) -> Vec<&dyn Control> {
        vec![&self.m1, &self.b1, &self.m2, &self.b2, &self.zoom]
    }

    fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control> {
        let slider = match name {
            "m1" => &mut self.m1,
            "b1" => &mut self.b1,
            "m2" => &mut self.m2,
            "b2" => &mut self.b2,
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
