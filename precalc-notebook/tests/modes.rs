//! Drives whole notebook sessions through the event API.

use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
use precalc_graph::{color::RED, GraphPoint};
use precalc_notebook::{
    event::Event,
    notebook::{Notebook, Update},
    output::Cell,
};
use pretty_assertions::assert_eq;

fn run(events: impl IntoIterator<Item = Event>) -> (Notebook, Vec<Update>) {
    let mut notebook = Notebook::default();
    let updates = events.into_iter()
        .map(|event| notebook.handle(event).unwrap())
        .collect();
    (notebook, updates)
}

fn texts(notebook: &Notebook) -> Vec<String> {
    notebook.output()
        .into_iter()
        .filter_map(Cell::as_text)
        .map(str::to_string)
        .collect()
}

#[test]
fn table_of_squares() {
    let (notebook, _) = run([Event::set("menu", "1"), Event::submit("y", "x**2")]);
    let texts = texts(&notebook);
    let values = texts[2..].iter()
        .map(|row| row.split("\t\t").nth(1).unwrap().parse::<i32>().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(values, vec![25, 16, 9, 4, 1, 0, 1, 4, 9, 16, 25]);

    let plots = notebook.output().into_iter().filter_map(Cell::as_plot).collect::<Vec<_>>();
    assert_eq!(plots.len(), 1);
    assert_eq!(plots[0].series[0].label.as_deref(), Some("y = x**2"));
}

#[test]
fn invalid_equation_stops_early() {
    let (notebook, _) = run([Event::set("menu", "1"), Event::submit("y", "x**")]);
    assert_eq!(texts(&notebook), vec!["Invalid equation."]);
    assert_eq!(notebook.output().into_iter().filter_map(Cell::as_plot).count(), 0);
    assert_eq!(notebook.controls().len(), 2);
}

#[test]
fn misspelled_function() {
    let (notebook, _) = run([Event::set("menu", "1"), Event::submit("y", "sqr(x)")]);
    let texts = texts(&notebook);
    assert_eq!(texts[2], "-5\t\tundefined");
    assert_eq!(
        notebook.output().into_iter().filter_map(Cell::as_text).last(),
        Some("Could not graph the equation."),
    );
}

#[test]
fn unique_solution() {
    let (notebook, _) = run([
        Event::set("menu", "2"),
        Event::set("eq1", "x + y - 3"),
        Event::set("eq2", "x - y - 1"),
        Event::click("solve"),
    ]);
    assert_eq!(texts(&notebook), vec!["Solution: {x: 2, y: 1}"]);
}

#[test]
fn empty_solution_set() {
    let (notebook, _) = run([
        Event::set("menu", "2"),
        Event::set("eq1", "y - x"),
        Event::set("eq2", "y - x - 1"),
        Event::click("solve"),
    ]);
    assert_eq!(texts(&notebook), vec!["Solution: []"]);
}

#[test]
fn lines_cross_at_origin() {
    let (notebook, _) = run([
        Event::set("menu", "3"),
        Event::set("m1", "1"),
        Event::set("b1", "0"),
        Event::set("m2", "-1"),
        Event::set("b2", "0"),
    ]);
    let graph = notebook.output().into_iter().find_map(Cell::as_plot).unwrap();
    assert_eq!(graph.points.len(), 1);
    assert_eq!(graph.points[0].coordinates, GraphPoint(0.0, 0.0));
    assert_eq!(graph.points[0].color, RED);
}

#[test]
fn parallel_lines_are_handled() {
    let (notebook, _) = run([
        Event::set("menu", "3"),
        Event::set("m2", "1"),
        Event::set("b2", "1"),
    ]);
    assert_eq!(texts(&notebook), vec!["No intersection: the lines are parallel."]);
    let graph = notebook.output().into_iter().find_map(Cell::as_plot).unwrap();
    assert!(graph.points.is_empty());
    assert_eq!(graph.series.len(), 2);
}

#[test]
fn quadratic_with_two_roots() {
    let (notebook, _) = run([
        Event::set("menu", "4"),
        Event::set("a", "1"),
        Event::set("b", "0"),
        Event::set("c", "-4"),
    ]);
    assert_eq!(texts(&notebook), vec!["Vertex: (0, -4)", "Discriminant: 16", "Roots: [2, -2]"]);

    let graph = notebook.output().into_iter().find_map(Cell::as_plot).unwrap();
    let roots = graph.points[1..].iter().map(|p| p.coordinates.0).collect::<Vec<_>>();
    assert_float_relative_eq!(roots[0], 2.0);
    assert_float_relative_eq!(roots[1], -2.0);
}

#[test]
fn quadratic_without_real_roots() {
    let (notebook, _) = run([Event::set("menu", "4"), Event::set("c", "4")]);
    assert_eq!(texts(&notebook), vec!["Vertex: (0, 4)", "Discriminant: -16", "No real roots."]);
}

#[test]
fn zero_leading_coefficient_recovers() {
    let (mut notebook, _) = run([Event::set("menu", "4"), Event::set("a", "0")]);
    assert_eq!(texts(&notebook), vec!["'a' cannot be zero in a quadratic function."]);
    assert_eq!(notebook.output().into_iter().filter_map(Cell::as_plot).count(), 0);

    notebook.handle(Event::set("a", "2")).unwrap();
    assert_eq!(texts(&notebook)[0], "Vertex: (0, 0)");
}

#[test]
fn slider_values_snap_to_step() {
    let (notebook, _) = run([Event::set("menu", "4"), Event::set("b", "1.04")]);
    // -1/(2*1) with b = 1
    assert_eq!(texts(&notebook)[0], "Vertex: (-1/2, -1/4)");
}

#[test]
fn same_input_gives_same_output() {
    let events = || [
        Event::set("menu", "1"),
        Event::submit("y", "x^2 - 2x + 1"),
        Event::set("zoom", "15"),
        Event::set("menu", "4"),
        Event::set("b", "-3.5"),
        Event::set("menu", "2"),
        Event::set("eq1", "2x + 3y = 6"),
        Event::set("eq2", "x - y = 2"),
        Event::click("solve"),
    ];
    let (first, first_updates) = run(events());
    let (second, second_updates) = run(events());
    assert_eq!(first_updates, second_updates);
    assert_eq!(first.output(), second.output());
    assert_eq!(texts(&first), vec!["Solution: {x: 12/5, y: 2/5}"]);
}

#[test]
fn resubmitting_repeats_the_output() {
    let (mut notebook, updates) = run([Event::set("menu", "1"), Event::submit("y", "2x + 1")]);
    let again = notebook.handle(Event::submit("y", "2x + 1")).unwrap();
    assert_eq!(updates[1].cells, again.cells);
}
