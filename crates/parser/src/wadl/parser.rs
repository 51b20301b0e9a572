//! WADL parser entry point

use super::extractor;
use crate::completeness::check_completeness;
use fdsn_wadl_common::{Diagnostic, ParamDescriptor, ResourceKind, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// FDSN web service WADL parser
///
/// Parsing is eager: the constructor fully consumes the document text and
/// either fails or yields a completed parameter mapping plus any
/// completeness diagnostics. The result holds no reference to the input
/// text, and parsing the same text twice yields equal mappings.
pub struct WadlParser {
    /// Extracted parameters, keyed by canonical long-form name.
    parameters: BTreeMap<String, ParamDescriptor>,

    /// Completeness diagnostics, at most one per detected resource kind.
    diagnostics: Vec<Diagnostic>,

    /// Detected service kind, `None` when the document matched no marker.
    kind: Option<ResourceKind>,
}

impl WadlParser {
    /// Load and parse a WADL document from a file path.
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = WadlParser::from_file("dataselect.wadl")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_xml(&content)
    }

    /// Parse a WADL document from its XML text.
    ///
    /// Fails on malformed XML or on a declared default value that does not
    /// parse as its parameter's type. Missing canonical parameters do not
    /// fail the parse; they surface through [`diagnostics`].
    ///
    /// [`diagnostics`]: WadlParser::diagnostics
    pub fn from_xml(wadl_text: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(wadl_text)?;

        let kind = extractor::detect_resource_kind(&doc);
        let parameters = extractor::extract_parameters(&doc)?;

        // Unknown service kinds skip the completeness check entirely.
        let diagnostics = kind
            .and_then(|k| check_completeness(k, &parameters))
            .into_iter()
            .collect();

        Ok(Self {
            parameters,
            diagnostics,
            kind,
        })
    }

    /// Extracted parameters, keyed by canonical long-form name.
    pub fn parameters(&self) -> &BTreeMap<String, ParamDescriptor> {
        &self.parameters
    }

    /// Completeness diagnostics emitted during the parse.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Detected service kind, if any.
    pub fn resource_kind(&self) -> Option<ResourceKind> {
        self.kind
    }

    /// Consume the parser, yielding the mapping and diagnostics.
    pub fn into_parts(self) -> (BTreeMap<String, ParamDescriptor>, Vec<Diagnostic>) {
        (self.parameters, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_wadl() {
        let wadl = r#"<?xml version="1.0" encoding="UTF-8"?>
            <application xmlns="http://wadl.dev.java.net/2009/02">
                <resources base="http://service.example.org/fdsnws/dataselect/1/">
                    <resource path="query"/>
                </resources>
            </application>"#;

        let parser = WadlParser::from_xml(wadl).unwrap();
        assert_eq!(parser.resource_kind(), Some(ResourceKind::DataSelect));
        assert!(parser.parameters().is_empty());
        // Every canonical dataselect parameter is missing.
        assert_eq!(parser.diagnostics().len(), 1);
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        let result = WadlParser::from_xml("<application><resources>");
        assert!(result.is_err());
    }
}
