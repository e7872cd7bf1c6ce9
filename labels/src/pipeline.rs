//! The extraction pipeline.
//!
//! Runs, in order and stopping at the first failure:
//! 1. datatype normalization of the input into the intermediate document
//! 2. loading classes from the intermediate document
//! 3. collecting labeled classes
//! 4. cleaning the first label of each class
//! 5. stop-word filtering
//! 6. JSON serialization

use std::path::Path;

use tracing::info;

use crate::clean::clean_labels;
use crate::collect::collect_labels;
use crate::config::LabelConfig;
use crate::error::Result;
use crate::loader::Syntax;
use crate::model::LabelMap;
use crate::normalize::normalize_datatype;
use crate::report::ExtractionReport;
use crate::serializer::json::write_label_map;

/// Name of the normalized document the CLI writes in the working directory.
pub const INTERMEDIATE_FILE: &str = "parsed_ontology.owl";

/// A configured extraction run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: LabelConfig,
}

impl Pipeline {
    /// Creates a pipeline with the given settings.
    #[must_use]
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Extracts labels from `input` into `output`, normalizing through `intermediate`.
    ///
    /// The loader is chosen from `input`'s extension, since the intermediate
    /// file name says nothing about its syntax.
    ///
    /// # Errors
    ///
    /// Returns the first failure of normalization, loading or serialization.
    /// No later step runs after a failed one.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        intermediate: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<ExtractionReport> {
        let (input, intermediate, output) = (input.as_ref(), intermediate.as_ref(), output.as_ref());

        let normalized = normalize_datatype(input, Some(intermediate))?;
        let syntax = Syntax::from_path(input);
        let classes = syntax.loader().load_file(&normalized)?;
        info!(?syntax, classes = classes.len(), "loaded ontology classes");

        let collection = collect_labels(classes, self.config.progress_interval);
        let report = ExtractionReport::new(&collection, normalized, output.to_path_buf());
        let map = self.finish(clean_labels(collection));

        write_label_map(&map, output, self.config.pretty)?;
        info!(%report, "extraction complete");
        Ok(report)
    }

    /// Applies the configured stop-word filter to every cleaned label.
    #[must_use]
    pub fn finish(&self, mut map: LabelMap) -> LabelMap {
        let filter = self.config.word_filter();
        if !filter.is_empty() {
            for record in map.values_mut() {
                record.cleaned = filter.filter(&record.cleaned);
            }
        }
        map
    }
}
