//! Class label extraction for OWL/RDF ontologies.
//!
//! The `owl-labels` crate turns a taxonomy export into a flat JSON lookup
//! table: every labeled class maps to a cleaned display label plus the raw
//! labels it was derived from.
//!
//! # Entry Point
//!
//! ```no_run
//! use owl_labels::{LabelConfig, Pipeline};
//!
//! let report = Pipeline::new(LabelConfig::default())
//!     .run("taxonomy.owl", "parsed_ontology.owl", "labels.json")
//!     .expect("extraction failed");
//! println!("{} labeled, {} excepted", report.labeled, report.excepted.len());
//! ```
//!
//! # Cleaning
//!
//! ```
//! assert_eq!(owl_labels::clean::clean_label("123-Widget (new), item"), "Widget new item");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod clean;
pub mod collect;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod serializer;

pub use config::LabelConfig;
pub use error::{Error, Result};
pub use filter::StopWordPreset;
pub use model::{CleanedRecord, LabelMap, LabeledClass, OntologyClass};
pub use pipeline::{Pipeline, INTERMEDIATE_FILE};
pub use report::ExtractionReport;
