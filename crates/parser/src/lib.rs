//! WADL parsing for FDSN web services
//!
//! This crate parses the WADL self-description documents published by FDSN
//! seismological web services (dataselect, station, event) into a typed
//! schema of the query parameters each service accepts.
//!
//! Real-world WADL documents disagree on namespace prefixes, parameter
//! naming (short vs. long forms), and whether type annotations are present
//! at all, so parsing here means normalizing:
//! - short server-specific names resolve to the canonical long forms used
//!   by every FDSN client,
//! - missing type annotations fall back to a table of per-parameter
//!   defaults,
//! - canonical parameters absent from the document are reported as
//!   diagnostics without aborting the parse.

mod completeness;
mod normalize;
pub mod wadl;

pub use completeness::check_completeness;
pub use normalize::ParamNormalizer;
pub use wadl::WadlParser;

use fdsn_wadl_common::{Diagnostic, ParamDescriptor, Result};
use std::collections::BTreeMap;

/// Parse WADL document text into a parameter schema.
///
/// Convenience wrapper around [`WadlParser::from_xml`] for callers that
/// only want the mapping and diagnostics.
pub fn parse_wadl(wadl_text: &str) -> Result<(BTreeMap<String, ParamDescriptor>, Vec<Diagnostic>)> {
    let parser = WadlParser::from_xml(wadl_text)?;
    Ok(parser.into_parts())
}
