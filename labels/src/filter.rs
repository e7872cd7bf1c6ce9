//! Stop-word removal for cleaned labels.
//!
//! Besides user-supplied words, two named presets carry the stop lists of the
//! downstream label matcher: [`StopWordPreset::Matcher`] for taxonomy labels
//! and [`StopWordPreset::Ingredient`] for free-text ingredient lines.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

const MATCHER_WORDS: &[&str] = &[
    "about", "all", "any", "as", "but", "can", "choice", "extra", "for", "free", "from", "good",
    "i", "if", "in", "inch", "into", "is", "like", "more", "none", "not", "of", "on", "one",
    "optional", "other", "pieces", "plus", "possibly", "removed", "size", "such", "the", "to",
    "up", "use", "very", "weight", "with", "you", "your",
];

const INGREDIENT_WORDS: &[&str] = &[
    "bag", "bell", "bottle", "box", "cans", "coarsely", "cubes", "cut", "dry", "fine", "finely",
    "freshly", "grams", "jar", "lbs", "ounce", "ounces", "pinch", "plain", "pound", "pounds",
    "slices", "stock", "sweet", "t", "tablespoon", "tablespoons", "taste", "teaspoons", "thick",
    "thin", "thinly",
];

/// A named, built-in stop-word list.
///
/// Preset words are lowercase; since filtering is case-sensitive they only
/// remove lowercase tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordPreset {
    /// Filler words of taxonomy labels and product names.
    Matcher,
    /// The matcher list plus units, containers and preparation words.
    Ingredient,
}

impl StopWordPreset {
    /// Every word of the preset.
    pub fn words(self) -> impl Iterator<Item = &'static str> {
        let extra = match self {
            StopWordPreset::Matcher => &[][..],
            StopWordPreset::Ingredient => INGREDIENT_WORDS,
        };
        MATCHER_WORDS.iter().chain(extra).copied()
    }
}

impl FromStr for StopWordPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "matcher" => Ok(StopWordPreset::Matcher),
            "ingredient" => Ok(StopWordPreset::Ingredient),
            other => Err(format!(
                "unknown stop-word preset `{other}` (expected `matcher` or `ingredient`)"
            )),
        }
    }
}

impl fmt::Display for StopWordPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopWordPreset::Matcher => "matcher",
            StopWordPreset::Ingredient => "ingredient",
        })
    }
}

/// Removes configured stop-words from labels.
///
/// Matching is exact and case-sensitive on whitespace-separated tokens.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    stop_words: HashSet<String>,
}

impl WordFilter {
    /// Creates a filter for the given stop-words.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if no stop-words are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Drops stop-word tokens and joins the rest with single spaces.
    ///
    /// With no stop-words configured the label is returned unchanged.
    #[must_use]
    pub fn filter(&self, label: &str) -> String {
        if self.is_empty() {
            return label.to_owned();
        }
        label
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_stop_words() {
        let filter = WordFilter::new(["the", "of"]);
        assert_eq!(filter.filter("Taste of the Wild"), "Taste Wild");
    }

    #[test]
    fn case_sensitive() {
        let filter = WordFilter::new(["the"]);
        assert_eq!(filter.filter("The end of the line"), "The end of line");
    }

    #[test]
    fn empty_set_passes_through() {
        let filter = WordFilter::default();
        assert_eq!(filter.filter("Cheese  hard"), "Cheese  hard");
    }

    #[test]
    fn ingredient_preset_extends_matcher() {
        let matcher: HashSet<_> = StopWordPreset::Matcher.words().collect();
        let ingredient: HashSet<_> = StopWordPreset::Ingredient.words().collect();
        assert_eq!(matcher.len(), 42);
        assert!(matcher.is_subset(&ingredient));
        assert!(ingredient.contains("tablespoons"));
        assert!(!matcher.contains("tablespoons"));
    }

    #[test]
    fn preset_names_parse() {
        for preset in [StopWordPreset::Matcher, StopWordPreset::Ingredient] {
            assert_eq!(preset.to_string().parse::<StopWordPreset>(), Ok(preset));
        }
        assert!("Matcher".parse::<StopWordPreset>().is_err());
    }

    #[test]
    fn preset_filters_lowercase_only() {
        let filter = WordFilter::new(StopWordPreset::Matcher.words());
        assert_eq!(filter.filter("Milk with the cream"), "Milk cream");
        assert_eq!(filter.filter("The Milk"), "The Milk");
    }

    #[test]
    fn all_words_removed() {
        let filter = WordFilter::new(["food", "product"]);
        assert_eq!(filter.filter("food product"), "");
    }
}
