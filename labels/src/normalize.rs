//! Datatype normalization of raw ontology text.
//!
//! Some exports annotate labels with `rdf:datatype="&xml;string"`, which
//! depends on a DOCTYPE entity and hides the label's language. Rewriting the
//! attribute to `xml:lang="en"` turns every such label into a plain
//! language-tagged literal before the document is parsed.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Attribute replaced by [`normalize_datatype_str`], including its leading space.
pub const XML_STRING_DATATYPE: &str = r#" rdf:datatype="&xml;string""#;

/// Replacement attribute.
pub const ENGLISH_LANG: &str = r#" xml:lang="en""#;

/// Rewrites every `rdf:datatype="&xml;string"` attribute to `xml:lang="en"`.
///
/// The rest of the text is untouched; nothing is parsed. Borrows the input
/// when there is nothing to replace.
#[must_use]
pub fn normalize_datatype_str(content: &str) -> Cow<'_, str> {
    if content.contains(XML_STRING_DATATYPE) {
        Cow::Owned(content.replace(XML_STRING_DATATYPE, ENGLISH_LANG))
    } else {
        Cow::Borrowed(content)
    }
}

/// Normalizes `input` and writes the result to `output`, or back to `input`
/// when `output` is `None`. Returns the path written.
///
/// The output file is overwritten unconditionally.
///
/// # Errors
///
/// Returns [`Error::Io`] if the input cannot be read as UTF-8 text or the
/// output cannot be written.
pub fn normalize_datatype(input: impl AsRef<Path>, output: Option<&Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output.unwrap_or(input);

    let content = std::fs::read_to_string(input).map_err(|e| Error::io(input, e))?;
    let normalized = normalize_datatype_str(&content);
    let replaced = content.matches(XML_STRING_DATATYPE).count();
    std::fs::write(output, normalized.as_bytes()).map_err(|e| Error::io(output, e))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        replaced,
        "normalized datatype annotations"
    );
    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_xml_string_datatype() {
        let out = normalize_datatype_str(r#"foo rdf:datatype="&xml;string" bar"#);
        assert_eq!(out, r#"foo xml:lang="en" bar"#);
    }

    #[test]
    fn replaces_every_occurrence() {
        let text = r#"<a rdf:datatype="&xml;string">x</a><b rdf:datatype="&xml;string">y</b>"#;
        let out = normalize_datatype_str(text);
        assert_eq!(out, r#"<a xml:lang="en">x</a><b xml:lang="en">y</b>"#);
    }

    #[test]
    fn leaves_other_datatypes_alone() {
        let text = r#"<a rdf:datatype="&xsd;integer">4</a>"#;
        assert!(matches!(normalize_datatype_str(text), Cow::Borrowed(_)));
    }

    #[test]
    fn writes_in_place_by_default() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("onto.owl");
        std::fs::write(&path, r#"<l rdf:datatype="&xml;string">Milk</l>"#)?;

        let written = normalize_datatype(&path, None)?;
        assert_eq!(written, path);
        assert_eq!(
            std::fs::read_to_string(&path)?,
            r#"<l xml:lang="en">Milk</l>"#
        );
        Ok(())
    }

    #[test]
    fn missing_input_is_typed_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("absent.owl");
        let out = dir.path().join("out.owl");
        let err = normalize_datatype(&missing, Some(&out));
        assert!(matches!(err, Err(Error::Io { ref path, .. }) if *path == missing));
        assert!(!out.exists());
        Ok(())
    }
}
