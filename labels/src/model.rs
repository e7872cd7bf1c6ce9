//! Core label model types.
//!
//! An [`OntologyClass`] is what a loader hands over; a [`LabeledClass`] is the
//! collector's view of a class that survived; a [`CleanedRecord`] is the unit
//! written to output, keyed by class name inside a [`LabelMap`].

use indexmap::IndexMap;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// A named OWL class as produced by an ontology loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyClass {
    /// Full IRI (e.g., `"http://example.org/food#A0B9Z"`).
    pub iri: String,
    /// Local name of the IRI, used as the output key.
    pub name: String,
    /// Raw `rdfs:label` values in document order. May be empty.
    pub labels: Vec<String>,
}

impl OntologyClass {
    /// Creates a class from its IRI, deriving the name from the IRI's local part.
    pub fn new(iri: impl Into<String>, labels: Vec<String>) -> Self {
        let iri = iri.into();
        let name = local_name(&iri).to_owned();
        Self { iri, name, labels }
    }

    /// Returns true if the class carries at least one non-empty label.
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.labels.iter().any(|l| !l.is_empty())
    }
}

/// Returns the fragment after the last `#` or `/` of an IRI.
///
/// IRIs that end in a separator yield the whole IRI, so the name is never empty
/// for a non-empty IRI.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    match iri.rfind(['#', '/']) {
        Some(i) if i + 1 < iri.len() => &iri[i + 1..],
        _ => iri,
    }
}

/// A class that has at least one label, keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledClass {
    /// Class name (output key).
    pub name: String,
    /// Every raw label of the class, untouched; at least one is non-empty.
    pub labels: Vec<String>,
}

impl LabeledClass {
    /// The label cleaning is derived from.
    #[must_use]
    pub fn first_label(&self) -> &str {
        self.labels.first().map_or("", String::as_str)
    }
}

/// A cleaned label paired with the raw labels it came from.
///
/// Serializes as the 2-element array `[cleaned, [raw, ...]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedRecord {
    /// Normalized display label.
    pub cleaned: String,
    /// Raw labels, untouched.
    pub labels: Vec<String>,
}

impl Serialize for CleanedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.cleaned)?;
        tuple.serialize_element(&self.labels)?;
        tuple.end()
    }
}

/// The final output mapping, in ontology declaration order.
///
/// Re-inserting a key replaces its value but keeps its original position.
pub type LabelMap = IndexMap<String, CleanedRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_after_hash_or_slash() {
        assert_eq!(local_name("http://example.org/food#A0B9Z"), "A0B9Z");
        assert_eq!(local_name("http://example.org/food/Dairy"), "Dairy");
        assert_eq!(local_name("Plain"), "Plain");
        assert_eq!(local_name("http://example.org/"), "http://example.org/");
    }

    #[test]
    fn class_without_labels_is_unlabeled() {
        let c = OntologyClass::new("http://ex.org/#X", vec![]);
        assert_eq!(c.name, "X");
        assert!(!c.has_label());
        assert!(!OntologyClass::new("http://ex.org/#Y", vec![String::new()]).has_label());
    }

    #[test]
    fn record_serializes_as_pair() {
        let record = CleanedRecord {
            cleaned: "Dairy Product".into(),
            labels: vec!["7 - Dairy Product".into()],
        };
        let json = serde_json::to_string(&record).unwrap_or_default();
        assert_eq!(json, r#"["Dairy Product",["7 - Dairy Product"]]"#);
    }

    #[test]
    fn first_label_is_untouched() {
        let class = LabeledClass {
            name: "M".into(),
            labels: vec![String::new(), "12-Milk".into()],
        };
        assert_eq!(class.first_label(), "");
    }

    #[test]
    fn label_map_serializes_in_insertion_order() {
        let mut map = LabelMap::new();
        for name in ["zeta", "alpha"] {
            map.insert(
                name.to_owned(),
                CleanedRecord {
                    cleaned: name.to_uppercase(),
                    labels: vec![name.to_owned()],
                },
            );
        }
        let json = serde_json::to_string(&map).unwrap_or_default();
        assert_eq!(json, r#"{"zeta":["ZETA",["zeta"]],"alpha":["ALPHA",["alpha"]]}"#);
    }
}
