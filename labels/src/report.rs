//! Extraction report: what a pipeline run produced and what it dropped.

use std::fmt;
use std::path::PathBuf;

use crate::collect::Collection;

/// Summary of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Classes visited in the ontology.
    pub classes_seen: usize,
    /// Classes written to the output.
    pub labeled: usize,
    /// Names of classes omitted for lack of a label.
    pub excepted: Vec<String>,
    /// The normalized intermediate document.
    pub intermediate: PathBuf,
    /// The JSON output file.
    pub output: PathBuf,
}

impl ExtractionReport {
    /// Builds a report from a finished collection pass.
    pub fn new(collection: &Collection, intermediate: PathBuf, output: PathBuf) -> Self {
        Self {
            classes_seen: collection.seen,
            labeled: collection.labeled.len(),
            excepted: collection.excepted.clone(),
            intermediate,
            output,
        }
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} labeled, {} excepted -> {}",
            self.classes_seen,
            self.labeled,
            self.excepted.len(),
            self.output.display()
        )
    }
}
