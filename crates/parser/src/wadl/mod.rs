//! WADL document parser
//!
//! Parses the WADL self-description document of an FDSN web service into a
//! canonical parameter schema.
//!
//! ## Format
//! A WADL document contains:
//! - A `<resources>` element whose `base` URL identifies the service.
//! - Nested `<resource>` elements for the query endpoints.
//! - `<param>` elements declaring query parameters, either directly under a
//!   method's `<request>` or inside a shared `<representation>` subtree.
//!
//! ## Usage
//! ```rust,ignore
//! use fdsn_wadl_parser::WadlParser;
//!
//! let parser = WadlParser::from_file("dataselect.wadl")?;
//! let start = &parser.parameters()["starttime"];
//! ```

mod extractor;
mod parser;

pub use parser::WadlParser;
