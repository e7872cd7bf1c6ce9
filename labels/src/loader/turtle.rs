//! Turtle loader backed by `sophia_turtle`.

use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_turtle::parser::turtle::TurtleParser;

use super::{base_iri, ClassAccumulator, OntologyLoader};
use crate::error::{Error, Result};
use crate::model::OntologyClass;

/// Loads classes from Turtle documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurtleLoader;

impl OntologyLoader for TurtleLoader {
    fn load_with_base(&self, document: &str, base: Option<&str>) -> Result<Vec<OntologyClass>> {
        let mut classes = ClassAccumulator::default();
        let parser = TurtleParser {
            base: base_iri(base)?,
        };
        parser
            .parse_str(document)
            .for_each_triple(|t| classes.visit(t))
            .map_err(Error::parse)?;
        Ok(classes.finish())
    }
}
