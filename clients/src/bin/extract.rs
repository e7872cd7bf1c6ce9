//! `owl-labels` — Extracts cleaned class labels from an OWL ontology.
//!
//! Normalizes the ontology into `parsed_ontology.owl` in the current
//! directory, then writes the label map to the output file.
//!
//! **Usage:**
//! ```
//! owl-labels <ontology_file> <output_file> [--config <toml>] [--stop-word <word>]... [--stop-word-preset <name>] [--pretty]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owl_labels::{LabelConfig, Pipeline, StopWordPreset, INTERMEDIATE_FILE};

/// Extract cleaned class labels from an OWL ontology into JSON.
#[derive(Parser)]
#[command(name = "owl-labels", about = "Extract cleaned class labels from an OWL ontology")]
struct Args {
    /// Ontology file (RDF/XML, or Turtle with a `.ttl` extension).
    ontology: PathBuf,

    /// JSON output file; overwritten if it exists.
    output: PathBuf,

    /// TOML file with extraction settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word to drop from cleaned labels; repeatable.
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// Built-in stop-word list: `matcher` or `ingredient`.
    #[arg(long = "stop-word-preset", value_name = "NAME")]
    preset: Option<StopWordPreset>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_labels_clients::init_logging();

    let mut config = match &args.config {
        Some(path) => LabelConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => LabelConfig::default(),
    };
    config.extend_stop_words(args.stop_words);
    config.pretty |= args.pretty;
    if args.preset.is_some() {
        config.preset = args.preset;
    }

    let report = Pipeline::new(config)
        .run(&args.ontology, INTERMEDIATE_FILE, &args.output)
        .with_context(|| format!("Failed to extract labels from {}", args.ontology.display()))?;

    println!("Written: {}", report.output.display());
    println!(
        "  {} classes, {} labeled, {} excepted",
        report.classes_seen,
        report.labeled,
        report.excepted.len()
    );
    Ok(())
}
