//! Extraction settings, optionally read from a TOML file.
//!
//! ```toml
//! stop_words = ["efsa", "foodex2"]
//! preset = "matcher"
//! progress_interval = 5000
//! pretty = true
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::collect::DEFAULT_PROGRESS_INTERVAL;
use crate::error::{Error, Result};
use crate::filter::{StopWordPreset, WordFilter};

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    /// Tokens removed from every cleaned label.
    pub stop_words: Vec<String>,
    /// Built-in stop-word list applied on top of `stop_words`.
    pub preset: Option<StopWordPreset>,
    /// Classes between progress log lines; `0` disables them.
    pub progress_interval: usize,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            stop_words: Vec::new(),
            preset: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            pretty: false,
        }
    }
}

impl LabelConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid TOML or names an
    /// unknown setting. `origin` is only used for the error message.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Config`]
    /// if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text, path)
    }

    /// Adds stop-words, skipping ones already configured.
    pub fn extend_stop_words<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            if !self.stop_words.contains(&word) {
                self.stop_words.push(word);
            }
        }
    }

    /// Builds the word filter for these settings.
    #[must_use]
    pub fn word_filter(&self) -> WordFilter {
        let preset = self.preset.into_iter().flat_map(StopWordPreset::words);
        WordFilter::new(self.stop_words.iter().cloned().chain(preset.map(str::to_owned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LabelConfig::default();
        assert!(config.stop_words.is_empty());
        assert_eq!(config.progress_interval, 1000);
        assert!(!config.pretty);
        assert!(config.word_filter().is_empty());
    }

    #[test]
    fn parses_partial_toml() {
        let config =
            LabelConfig::from_toml_str(r#"stop_words = ["efsa", "food"]"#, Path::new("x.toml"));
        let config = config.unwrap_or_default();
        assert_eq!(config.stop_words, ["efsa", "food"]);
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn preset_joins_stop_words() -> Result<()> {
        let config = LabelConfig::from_toml_str(
            "stop_words = [\"efsa\"]\npreset = \"matcher\"\n",
            Path::new("x.toml"),
        )?;
        assert_eq!(config.preset, Some(StopWordPreset::Matcher));
        let filter = config.word_filter();
        assert_eq!(filter.filter("efsa milk with the cream"), "milk cream");
        Ok(())
    }

    #[test]
    fn rejects_unknown_preset() {
        let err = LabelConfig::from_toml_str(r#"preset = "recipes""#, Path::new("bad.toml"));
        assert!(matches!(err, Err(Error::Config { .. })));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = LabelConfig::from_toml_str("stopwords = []", Path::new("bad.toml"));
        assert!(matches!(err, Err(Error::Config { .. })));
    }

    #[test]
    fn extend_skips_duplicates() {
        let mut config = LabelConfig::default();
        config.extend_stop_words(["of".to_owned(), "the".to_owned(), "of".to_owned()]);
        assert_eq!(config.stop_words, ["of", "the"]);
    }

    #[test]
    fn load_reads_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("labels.toml");
        std::fs::write(&path, "progress_interval = 10\npretty = true\n")?;
        let config = LabelConfig::load(&path)?;
        assert_eq!(config.progress_interval, 10);
        assert!(config.pretty);
        Ok(())
    }
}
