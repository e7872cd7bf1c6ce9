//! RDF/XML loader backed by `sophia_xml`.

use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_xml::parser::RdfXmlParser;

use super::{base_iri, ClassAccumulator, OntologyLoader};
use crate::error::{Error, Result};
use crate::model::OntologyClass;

/// Loads classes from RDF/XML documents such as OWL exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct RdfXmlLoader;

impl OntologyLoader for RdfXmlLoader {
    fn load_with_base(&self, document: &str, base: Option<&str>) -> Result<Vec<OntologyClass>> {
        let mut classes = ClassAccumulator::default();
        let parser = RdfXmlParser {
            base: base_iri(base)?,
        };
        parser
            .parse_str(document)
            .for_each_triple(|t| classes.visit(t))
            .map_err(Error::parse)?;
        Ok(classes.finish())
    }
}
