//! `owl-labels-dict` — Re-parses a textual label dictionary dump into JSON.
//!
//! Each input line has the form `'key': [locstr('text', 'lang'), 'text', ...]`;
//! every value is cleaned like an extracted label.
//!
//! **Usage:**
//! ```
//! owl-labels-dict <dump_file> <output_file> [--pretty]
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
use owl_labels::dictionary::{read_dictionary, write_dictionary};

/// Clean a textual label dictionary dump.
#[derive(Parser)]
#[command(name = "owl-labels-dict", about = "Re-parse and clean a label dictionary dump")]
struct Args {
    /// Dictionary dump, one `key: [values]` entry per line.
    dump: PathBuf,

    /// JSON output file; overwritten if it exists.
    output: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_labels_clients::init_logging();

    let dictionary = read_dictionary(&args.dump)
        .with_context(|| format!("Failed to read dictionary dump {}", args.dump.display()))?;
    write_dictionary(&dictionary, &args.output, args.pretty)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Written: {} ({} entries)",
        args.output.display(),
        dictionary.len()
    );
    Ok(())
}
