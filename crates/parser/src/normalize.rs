//! Name and type normalization tables
//!
//! Maps server-specific short parameter names to the canonical long forms,
//! and canonical names to their default types for documents that omit
//! explicit type annotations. Both tables are exhaustively enumerated data
//! so new aliases can be added without touching the extraction logic.

use fdsn_wadl_common::ParamType;

/// Short-form alias to canonical long-form name.
const ALIASES: &[(&str, &str)] = &[
    ("start", "starttime"),
    ("end", "endtime"),
    ("minlat", "minlatitude"),
    ("maxlat", "maxlatitude"),
    ("minlon", "minlongitude"),
    ("maxlon", "maxlongitude"),
    ("lat", "latitude"),
    ("lon", "longitude"),
    ("minmag", "minmagnitude"),
    ("maxmag", "maxmagnitude"),
    ("magtype", "magnitudetype"),
    ("net", "network"),
    ("sta", "station"),
    ("loc", "location"),
    ("cha", "channel"),
];

/// Canonical name to the type assumed when the document declares none.
const DEFAULT_TYPES: &[(&str, ParamType)] = &[
    ("starttime", ParamType::Timestamp),
    ("endtime", ParamType::Timestamp),
    ("startbefore", ParamType::Timestamp),
    ("startafter", ParamType::Timestamp),
    ("endbefore", ParamType::Timestamp),
    ("endafter", ParamType::Timestamp),
    ("updatedafter", ParamType::Timestamp),
    ("network", ParamType::Text),
    ("station", ParamType::Text),
    ("location", ParamType::Text),
    ("channel", ParamType::Text),
    ("quality", ParamType::Text),
    ("level", ParamType::Text),
    ("magnitudetype", ParamType::Text),
    ("catalog", ParamType::Text),
    ("contributor", ParamType::Text),
    ("orderby", ParamType::Text),
    ("eventid", ParamType::Text),
    ("originid", ParamType::Text),
    ("format", ParamType::Text),
    ("minlatitude", ParamType::FloatingPoint),
    ("maxlatitude", ParamType::FloatingPoint),
    ("latitude", ParamType::FloatingPoint),
    ("minlongitude", ParamType::FloatingPoint),
    ("maxlongitude", ParamType::FloatingPoint),
    ("longitude", ParamType::FloatingPoint),
    ("minradius", ParamType::FloatingPoint),
    ("maxradius", ParamType::FloatingPoint),
    ("mindepth", ParamType::FloatingPoint),
    ("maxdepth", ParamType::FloatingPoint),
    ("minmagnitude", ParamType::FloatingPoint),
    ("maxmagnitude", ParamType::FloatingPoint),
    ("minimumlength", ParamType::FloatingPoint),
    ("limit", ParamType::FloatingPoint),
    ("offset", ParamType::FloatingPoint),
    ("longestonly", ParamType::Boolean),
    ("includerestricted", ParamType::Boolean),
    ("includeavailability", ParamType::Boolean),
    ("matchtimeseries", ParamType::Boolean),
    ("includeallorigins", ParamType::Boolean),
    ("includeallmagnitudes", ParamType::Boolean),
    ("includearrivals", ParamType::Boolean),
];

/// Resolves parameter names and default types against the static tables
pub struct ParamNormalizer;

impl ParamNormalizer {
    /// Resolve a declared name to its canonical long form.
    ///
    /// Unrecognized names pass through unchanged: unknown parameters are
    /// kept, not dropped, so clients can still use them.
    ///
    /// # Examples
    /// ```
    /// use fdsn_wadl_parser::ParamNormalizer;
    ///
    /// assert_eq!(ParamNormalizer::canonical_name("start"), "starttime");
    /// assert_eq!(ParamNormalizer::canonical_name("starttime"), "starttime");
    /// assert_eq!(ParamNormalizer::canonical_name("customflag"), "customflag");
    /// ```
    pub fn canonical_name(declared: &str) -> &str {
        ALIASES
            .iter()
            .find(|(short, _)| *short == declared)
            .map(|(_, long)| *long)
            .unwrap_or(declared)
    }

    /// Default type for a canonical name when the document omits one.
    /// Unknown names default to `Text`.
    pub fn default_type(canonical: &str) -> ParamType {
        DEFAULT_TYPES
            .iter()
            .find(|(name, _)| *name == canonical)
            .map(|(_, ty)| *ty)
            .unwrap_or(ParamType::Text)
    }

    /// Map an explicit XSD-style type attribute to a parameter type.
    ///
    /// The namespace prefix (`xs:`, `xsd:`, or none) is ignored. Integer
    /// declarations map to `FloatingPoint` since the schema model has no
    /// integer kind. Returns `None` for unrecognized tokens, which callers
    /// treat the same as a missing type attribute.
    pub fn explicit_type(declared: &str) -> Option<ParamType> {
        let local = declared.rsplit(':').next().unwrap_or(declared);
        match local.to_ascii_lowercase().as_str() {
            "date" | "datetime" | "time" => Some(ParamType::Timestamp),
            "string" => Some(ParamType::Text),
            "float" | "double" | "decimal" => Some(ParamType::FloatingPoint),
            "int" | "integer" | "long" => Some(ParamType::FloatingPoint),
            "boolean" => Some(ParamType::Boolean),
            _ => None,
        }
    }
}
