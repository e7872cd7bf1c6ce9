//! Re-parsing of textual label dictionary dumps.
//!
//! Earlier exports were written as one `key: [values]` line per class, where
//! values are either `locstr('text', 'lang')` or plain `'text'` literals:
//!
//! ```text
//! 'A0B9Z': [locstr('7 - Dairy Product', 'en'), 'Dairy']
//! ```
//!
//! [`clean_dictionary_content`] recovers the values and cleans them;
//! [`dedup_values`] collapses repeated values to their unique string forms.

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

use crate::clean::clean_label;
use crate::error::{Error, Result};
use crate::serializer::json::write_json;

/// Cleaned dictionary: key to its cleaned values, in dump order.
pub type DictionaryMap = IndexMap<String, Vec<String>>;

// Literal pattern; compilation cannot fail.
#[allow(clippy::expect_used)]
fn value_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"locstr\('([^']*)',\s*'[^']*'\)|'([^']*)'").expect("valid regex")
    })
}

/// Parses a dictionary dump, cleaning every extracted value.
///
/// Lines without a `:` are skipped. The key is everything before the first
/// colon, trimmed and stripped of surrounding quotes. A key seen twice keeps
/// its first position and its last values.
#[must_use]
pub fn clean_dictionary_content(content: &str) -> DictionaryMap {
    let mut cleaned = DictionaryMap::new();
    for line in content.lines() {
        let Some((key, values)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().trim_matches(|c| c == '\'' || c == '"');
        let values: Vec<String> = value_literal()
            .captures_iter(values)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| clean_label(m.as_str()))
            .collect();
        debug!(key, values = values.len(), "parsed dictionary line");
        cleaned.insert(key.to_owned(), values);
    }
    cleaned
}

/// Collapses values to their unique string forms.
///
/// Strings contribute their contents; every other value contributes its JSON
/// text, so `1` and `"1"` collapse together. Original types are lost. The
/// result keeps first-occurrence order.
#[must_use]
pub fn dedup_values(values: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Reads and parses a dictionary dump file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn read_dictionary(path: &Path) -> Result<DictionaryMap> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(clean_dictionary_content(&content))
}

/// Writes a cleaned dictionary as a JSON object.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Json`] if writing fails.
pub fn write_dictionary(map: &DictionaryMap, path: &Path, pretty: bool) -> Result<()> {
    write_json(map, path, pretty)?;
    info!(path = %path.display(), entries = map.len(), "wrote cleaned dictionary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_locstr_and_plain_values() {
        let dump = "'A0B9Z': [locstr('7 - Dairy Product', 'en'), '12-Milk (whole)']\n\
                    \"B1\": ['Cheese, hard']\n\
                    no colon on this line\n";
        let map = clean_dictionary_content(dump);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["A0B9Z", "B1"]);
        assert_eq!(
            map.get("A0B9Z"),
            Some(&vec!["Dairy Product".to_owned(), "Milk whole".to_owned()])
        );
        assert_eq!(map.get("B1"), Some(&vec!["Cheese hard".to_owned()]));
    }

    #[test]
    fn splits_on_first_colon_only() {
        let map = clean_dictionary_content("k: ['a:b']");
        assert_eq!(map.get("k"), Some(&vec!["a:b".to_owned()]));
    }

    #[test]
    fn key_without_values() {
        let map = clean_dictionary_content("'empty': []");
        assert_eq!(map.get("empty"), Some(&Vec::new()));
    }

    #[test]
    fn empty_locstr_text_yields_empty_value() {
        let map = clean_dictionary_content("k: [locstr('', 'en')]");
        assert_eq!(map.get("k"), Some(&vec![String::new()]));
    }

    #[test]
    fn dedup_mixed_values() {
        let mut out = dedup_values(&[json!(1), json!("a"), json!(1)]);
        out.sort();
        assert_eq!(out, ["1", "a"]);
    }

    #[test]
    fn dedup_coerces_to_text() {
        let out = dedup_values(&[json!("1"), json!(1), json!(true), json!(null)]);
        assert_eq!(out, ["1", "true", "null"]);
    }

    #[test]
    fn round_trips_through_files() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let dump = dir.path().join("dump.txt");
        let out = dir.path().join("dict.json");
        std::fs::write(&dump, "'X': [locstr('3 - Bread', 'en')]\n")?;

        write_dictionary(&read_dictionary(&dump)?, &out, false)?;
        assert_eq!(std::fs::read_to_string(&out)?, r#"{"X":["Bread"]}"#);
        Ok(())
    }
}
