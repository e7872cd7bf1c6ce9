//! Ontology loaders.
//!
//! A loader turns a source document into the sequence of named classes with
//! their raw labels; nothing downstream depends on a particular RDF toolkit.
//!
//! - [`rdfxml`] — RDF/XML (`.owl`, `.rdf`, `.xml`) via `sophia_xml`
//! - [`turtle`] — Turtle (`.ttl`) via `sophia_turtle`

pub mod rdfxml;
pub mod turtle;

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexSet;
use sophia_iri::Iri;
use sophia_api::ns::{owl, rdf, rdfs};
use sophia_api::term::Term;
use sophia_api::triple::Triple;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::OntologyClass;

pub use rdfxml::RdfXmlLoader;
pub use turtle::TurtleLoader;

/// Produces the named classes of an ontology document.
pub trait OntologyLoader {
    /// Parses `document`, resolving relative IRIs against `base`.
    ///
    /// Without a base, relative IRIs such as `rdf:about="#X"` only resolve if
    /// the document declares its own `xml:base` or `@base`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OntologyParse`] if `base` is not an absolute IRI or
    /// the document is malformed.
    fn load_with_base(&self, document: &str, base: Option<&str>) -> Result<Vec<OntologyClass>>;

    /// Parses `document` and returns its classes in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OntologyParse`] if the document is malformed.
    fn load(&self, document: &str) -> Result<Vec<OntologyClass>> {
        self.load_with_base(document, None)
    }

    /// Reads and parses an ontology file, using its `file:` IRI as the base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::OntologyParse`] if it is malformed.
    fn load_file(&self, path: &Path) -> Result<Vec<OntologyClass>> {
        let document = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let base = file_iri(path)?;
        let classes = self.load_with_base(&document, Some(&base))?;
        debug!(path = %path.display(), classes = classes.len(), "loaded ontology");
        Ok(classes)
    }
}

/// Builds the `file:` IRI of a path, percent-encoding everything outside
/// the unreserved set and `/`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path cannot be made absolute.
pub fn file_iri(path: &Path) -> Result<String> {
    let absolute = std::fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
    let text = absolute.to_string_lossy().replace('\\', "/");
    let mut iri = String::from("file://");
    if !text.starts_with('/') {
        iri.push('/');
    }
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' | b':' => {
                iri.push(char::from(byte));
            }
            _ => iri.push_str(&format!("%{byte:02X}")),
        }
    }
    Ok(iri)
}

/// Parses a base IRI for the sophia parsers.
pub(crate) fn base_iri(base: Option<&str>) -> Result<Option<Iri<String>>> {
    base.map(|b| Iri::new(b.to_owned()).map_err(Error::parse))
        .transpose()
}

/// Serialization syntax of an ontology document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// RDF/XML, the usual OWL export format.
    RdfXml,
    /// Turtle.
    Turtle,
}

impl Syntax {
    /// Picks the syntax from a file extension; anything but `.ttl` is RDF/XML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ttl") => Syntax::Turtle,
            _ => Syntax::RdfXml,
        }
    }

    /// Returns a loader for this syntax.
    #[must_use]
    pub fn loader(self) -> Box<dyn OntologyLoader> {
        match self {
            Syntax::RdfXml => Box::new(RdfXmlLoader),
            Syntax::Turtle => Box::new(TurtleLoader),
        }
    }
}

/// Gathers class declarations and labels from a triple stream.
///
/// A class is any IRI subject typed `owl:Class`; blank-node classes are
/// skipped. Labels may appear before or after the declaration.
#[derive(Debug, Default)]
pub(crate) struct ClassAccumulator {
    declared: IndexSet<String>,
    labels: HashMap<String, Vec<String>>,
}

impl ClassAccumulator {
    pub(crate) fn visit<T: Triple>(&mut self, triple: T) {
        let subject = triple.s();
        let Some(iri) = subject.iri() else {
            return;
        };
        let predicate = triple.p();
        let object = triple.o();

        if Term::eq(&predicate, rdf::type_) && Term::eq(&object, owl::Class) {
            self.declared.insert(iri.as_str().to_owned());
        } else if Term::eq(&predicate, rdfs::label) {
            if let Some(lex) = object.lexical_form() {
                self.labels
                    .entry(iri.as_str().to_owned())
                    .or_default()
                    .push(lex.to_string());
            }
        }
    }

    pub(crate) fn finish(mut self) -> Vec<OntologyClass> {
        self.declared
            .into_iter()
            .map(|iri| {
                let labels = self.labels.remove(&iri).unwrap_or_default();
                OntologyClass::new(iri, labels)
            })
            .collect()
    }
}
