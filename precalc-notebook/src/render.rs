//! Writing plots to disk.

use crate::error::NotebookError;
use log::info;
use precalc_graph::Graph;
use std::{fs, path::{Path, PathBuf}};

/// Writes each plot it is given to a new, numbered PNG file: `plot-0001.png`, `plot-0002.png`,
/// and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotWriter {
    dir: PathBuf,
    count: usize,
}

impl PlotWriter {
    /// Creates a writer that writes into the given directory. The directory is created when the
    /// first plot is written.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), count: 0 }
    }

    /// Returns the directory plots are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path the next plot will be written to.
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("plot-{:04}.png", self.count + 1))
    }

    /// Renders the graph and writes it to the next file. Returns the path of the file.
    pub fn write(&mut self, graph: &Graph) -> Result<PathBuf, NotebookError> {
        fs::create_dir_all(&self.dir).map_err(|err| NotebookError::Render(cairo::IoError::Io(err)))?;
        let path = self.next_path();
        graph.save_png(&path)?;
        self.count += 1;
        info!("wrote {:?} to {}", graph.title, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn numbered_paths() {
        let writer = PlotWriter::new("plots");
        assert_eq!(writer.dir(), Path::new("plots"));
        assert_eq!(writer.next_path(), Path::new("plots").join("plot-0001.png"));
    }

    #[test]
    fn directory_failure_is_a_render_error() {
        let file = std::env::temp_dir().join(format!("precalc-render-file-{}", std::process::id()));
        fs::write(&file, "").unwrap();

        let mut writer = PlotWriter::new(file.join("plots"));
        let err = writer.write(&Graph::default()).unwrap_err();
        assert!(matches!(err, NotebookError::Render(_)));
        assert_eq!(writer.next_path(), file.join("plots").join("plot-0001.png"));
    }
}
