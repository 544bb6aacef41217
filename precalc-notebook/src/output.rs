//! Output areas: where text and plots are displayed.

use precalc_graph::Graph;

/// One piece of displayed output.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A line of text.
    Text(String),

    /// A rendered plot.
    Plot(Graph),
}

impl Cell {
    /// Returns the text of the cell, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Plot(_) => None,
        }
    }

    /// Returns the graph of the cell, if it is a plot cell.
    pub fn as_plot(&self) -> Option<&Graph> {
        match self {
            Self::Text(_) => None,
            Self::Plot(graph) => Some(graph),
        }
    }
}

/// A region of the notebook that output is appended to.
///
/// Besides the cells currently displayed, the area keeps the cells added since they were last
/// taken with [`OutputArea::take_new`], so that a front end can show each cell once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputArea {
    cells: Vec<Cell>,
    new: Vec<Cell>,
}

impl OutputArea {
    /// Creates an empty output area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line of text.
    pub fn print(&mut self, text: impl Into<String>) {
        self.push(Cell::Text(text.into()));
    }

    /// Appends a plot.
    pub fn plot(&mut self, graph: Graph) {
        self.push(Cell::Plot(graph));
    }

    fn push(&mut self, cell: Cell) {
        self.new.push(cell.clone());
        self.cells.push(cell);
    }

    /// Removes every cell from the area.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.new.clear();
    }

    /// Returns the cells currently displayed.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cells added since the last call.
    pub fn take_new(&mut self) -> Vec<Cell> {
        std::mem::take(&mut self.new)
    }
}

/// The output of one view.
///
/// The main area collects what the mode prints directly. The widget area belongs to the mode's
/// interactive widgets: it is cleared and redrawn whenever they change, or, for the linear
/// system solver, before every solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOutput {
    pub main: OutputArea,
    pub widget: OutputArea,
}

impl ViewOutput {
    /// Returns every displayed cell, main area first.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.main.cells().iter().chain(self.widget.cells())
    }

    /// Returns the cells added to either area since the last call, main area first.
    pub fn take_new(&mut self) -> Vec<Cell> {
        let mut cells = self.main.take_new();
        cells.extend(self.widget.take_new());
        cells
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn new_cells_are_taken_once() {
        let mut area = OutputArea::new();
        area.print("Table of Values");
        area.print("x\t\ty");
        assert_eq!(area.take_new().len(), 2);
        assert!(area.take_new().is_empty());
        assert_eq!(area.cells().len(), 2);
    }

    #[test]
    fn clear_drops_everything() {
        let mut area = OutputArea::new();
        area.print("Solution: []");
        area.clear();
        assert!(area.is_empty());
        assert!(area.take_new().is_empty());
    }

    #[test]
    fn view_output_order() {
        let mut output = ViewOutput::default();
        output.widget.print("second");
        output.main.print("first");
        let texts = output.cells().filter_map(Cell::as_text).collect::<Vec<_>>();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(output.take_new(), vec![
            Cell::Text("first".to_string()),
            Cell::Text("second".to_string()),
        ]);
    }
}
