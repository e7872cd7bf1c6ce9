//! Label cleaning.
//!
//! Taxonomy exports decorate labels with numeric codes (`"12-"`, `"7 - "`),
//! parenthetical notes and commas. [`clean_label`] removes that noise:
//!
//! 1. embedded `<digits> -` tokens
//! 2. a leading run of digits and hyphens
//! 3. `(` and `)`
//! 4. `,`
//! 5. surrounding whitespace
//!
//! The passes repeat until the string is stable, so cleaning a cleaned label
//! is a no-op.

use std::sync::OnceLock;

use regex::Regex;

use crate::collect::Collection;
use crate::model::{CleanedRecord, LabelMap, LabeledClass};

// Patterns are literals; compilation cannot fail.
#[allow(clippy::expect_used)]
fn embedded_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+ -").expect("valid regex"))
}

#[allow(clippy::expect_used)]
fn leading_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*[\d\-]+").expect("valid regex"))
}

/// Cleans a raw label into its display form.
///
/// Never fails; a label made only of codes and punctuation cleans to `""`.
#[must_use]
pub fn clean_label(raw: &str) -> String {
    let mut current = clean_pass(raw);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(s: &str) -> String {
    let s = embedded_code().replace_all(s, "");
    let s = leading_code().replace(&s, "");
    s.chars()
        .filter(|c| !matches!(c, '(' | ')' | ','))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Builds the output entry for one class; only its first label is cleaned.
#[must_use]
pub fn clean_class(class: LabeledClass) -> (String, CleanedRecord) {
    let cleaned = clean_label(class.first_label());
    let record = CleanedRecord {
        cleaned,
        labels: class.labels,
    };
    (class.name, record)
}

/// Cleans every collected class, preserving collection order.
#[must_use]
pub fn clean_labels(collection: Collection) -> LabelMap {
    collection.labeled.into_iter().map(clean_class).collect()
}
