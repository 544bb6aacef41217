//! Mode 2: solve a system of two linear equations in `x` and `y`.

use crate::{
    controls::{Button, Control, TextBox},
    event::Action,
    output::ViewOutput,
};
use log::info;
use precalc_compute::{solve::system::solve_linear, symbolic::LinearForm};
use precalc_error::Error;
use precalc_parser::parser::{equation::Equation, Parser};
use super::{report, Mode, Settings};

/// The unknowns every equation is solved for.
const UNKNOWNS: [&str; 2] = ["x", "y"];

/// Solves the system made of the two equations in its text boxes when the solve button is
/// clicked. The result is displayed in the widget area, which is cleared before every solve.
#[derive(Debug)]
pub struct SystemSolver {
    settings: Settings,
    first: TextBox,
    second: TextBox,
    solve: Button,
}

impl SystemSolver {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            first: TextBox::new("eq1", "Eq1:"),
            second: TextBox::new("eq2", "Eq2:"),
            solve: Button::new("solve", "Solve"),
        }
    }

    /// Parses one equation and puts it in linear form.
    fn linearize(source: &str) -> Result<LinearForm, Vec<Error>> {
        let equation = Parser::new(source).try_parse_full::<Equation>()
            .map_err(|errs| errs.into_iter().map(Error::from).collect::<Vec<_>>())?;
        LinearForm::from_equation(&equation, &UNKNOWNS).map_err(|err| vec![err])
    }

    fn solve(&self, output: &mut ViewOutput) {
        output.widget.clear();

        let sources = [
            (self.first.name(), self.first.value()),
            (self.second.name(), self.second.value()),
        ];
        let mut forms = Vec::with_capacity(2);
        let mut failures = Vec::new();
        for (name, source) in sources {
            match Self::linearize(source) {
                Ok(form) => forms.push(form),
                Err(errs) => failures.push((name, source, errs)),
            }
        }

        match forms.as_slice() {
            [first, second] => {
                let solution = solve_linear(first, second);
                info!("solved `{}`, `{}`: {:?}", sources[0].1, sources[1].1, solution);
                output.widget.print(format!("Solution: {}", solution));
            },
            _ => {
                output.widget.print("Invalid equations.");
                for (name, source, errs) in failures {
                    report(&mut output.widget, &self.settings, name, source, &errs);
                }
            },
        }
    }
}

impl Mode for SystemSolver {
    fn controls(&self) -> Vec<&dyn Control> {
        vec![&self.first, &self.second, &self.solve]
    }

    fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control> {
        match name {
            "eq1" => Some(&mut self.first),
            "eq2" => Some(&mut self.second),
            "solve" => Some(&mut self.solve),
            _ => None,
        }
    }

    fn handle(&mut self, action: Action<'_>, output: &mut ViewOutput) {
        if let Action::Clicked("solve") = action {
            self.solve(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::output::Cell;
    use pretty_assertions::assert_eq;
    use super::*;

    fn solve(first: &str, second: &str) -> ViewOutput {
        let mut solver = SystemSolver::new(Settings::default());
        let mut output = ViewOutput::default();
        solver.control_mut("eq1").unwrap().set(first).unwrap();
        solver.control_mut("eq2").unwrap().set(second).unwrap();
        solver.handle(Action::Clicked("solve"), &mut output);
        output
    }

    fn texts(output: &ViewOutput) -> Vec<&str> {
        output.cells().filter_map(Cell::as_text).collect()
    }

    #[test]
    fn unique_solution() {
        assert_eq!(texts(&solve("x + y - 3", "x - y - 1")), vec!["Solution: {x: 2, y: 1}"]);
    }

    #[test]
    fn equations_with_both_sides() {
        assert_eq!(texts(&solve("2x + y = 7", "x = y + 2")), vec!["Solution: {x: 3, y: 1}"]);
    }

    #[test]
    fn no_solution() {
        assert_eq!(texts(&solve("y - x", "y - x - 1")), vec!["Solution: []"]);
    }

    #[test]
    fn dependent_equations() {
        assert_eq!(texts(&solve("x + y - 3", "2x + 2y - 6")), vec!["Solution: {x: 3 - y}"]);
    }

    #[test]
    fn invalid_equations() {
        assert_eq!(texts(&solve("x + ", "x - y")), vec!["Invalid equations."]);
        assert_eq!(texts(&solve("x*y", "x - y")), vec!["Invalid equations."]);
    }

    #[test]
    fn output_is_cleared_before_each_solve() {
        let mut solver = SystemSolver::new(Settings::default());
        let mut output = ViewOutput::default();
        solver.control_mut("eq1").unwrap().set("x - 1").unwrap();
        solver.control_mut("eq2").unwrap().set("y - 2").unwrap();
        solver.handle(Action::Clicked("solve"), &mut output);
        solver.handle(Action::Clicked("solve"), &mut output);
        assert_eq!(texts(&output), vec!["Solution: {x: 1, y: 2}"]);
    }

    #[test]
    fn typing_does_not_solve() {
        let mut solver = SystemSolver::new(Settings::default());
        let mut output = ViewOutput::default();
        solver.control_mut("eq1").unwrap().set("x - 1").unwrap();
        solver.handle(Action::Changed("eq1"), &mut output);
        assert!(output.widget.is_empty());
    }
}
