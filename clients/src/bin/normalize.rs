//! `owl-labels-normalize` — Rewrites `rdf:datatype="&xml;string"` label
//! annotations to `xml:lang="en"`.
//!
//! **Usage:**
//! ```
//! owl-labels-normalize <input> [output]
//! ```
//!
//! Without `output` the input file is rewritten in place.

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
use owl_labels::normalize::normalize_datatype;

/// Normalize string datatype annotations in an ontology file.
#[derive(Parser)]
#[command(
    name = "owl-labels-normalize",
    about = "Rewrite &xml;string datatype annotations as English language tags"
)]
struct Args {
    /// Ontology file to read.
    input: PathBuf,

    /// Destination file (default: rewrite the input in place).
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_labels_clients::init_logging();

    let written = normalize_datatype(&args.input, args.output.as_deref())
        .with_context(|| format!("Failed to normalize {}", args.input.display()))?;
    println!("File '{}' has been processed successfully.", written.display());
    Ok(())
}
