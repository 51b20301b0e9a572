//! Completeness checking against canonical parameter sets
//!
//! Every FDSN service kind has a canonical set of query parameters a
//! conforming server is expected to advertise. Real servers omit some;
//! clients want to know which, without the parse failing.

use fdsn_wadl_common::{Diagnostic, ParamDescriptor, ResourceKind};
use std::collections::BTreeMap;

const DATASELECT_PARAMETERS: &[&str] = &[
    "starttime",
    "endtime",
    "network",
    "station",
    "location",
    "channel",
    "quality",
    "minimumlength",
    "longestonly",
];

const STATION_PARAMETERS: &[&str] = &[
    "starttime",
    "endtime",
    "startbefore",
    "startafter",
    "endbefore",
    "endafter",
    "network",
    "station",
    "location",
    "channel",
    "minlatitude",
    "maxlatitude",
    "minlongitude",
    "maxlongitude",
    "latitude",
    "longitude",
    "minradius",
    "maxradius",
    "level",
    "includerestricted",
    "includeavailability",
    "updatedafter",
];

const EVENT_PARAMETERS: &[&str] = &[
    "starttime",
    "endtime",
    "minlatitude",
    "maxlatitude",
    "minlongitude",
    "maxlongitude",
    "latitude",
    "longitude",
    "minradius",
    "maxradius",
    "mindepth",
    "maxdepth",
    "minmagnitude",
    "maxmagnitude",
    "magnitudetype",
    "catalog",
    "contributor",
    "includeallorigins",
    "includeallmagnitudes",
    "includearrivals",
    "eventid",
    "limit",
    "offset",
    "orderby",
    "updatedafter",
];

/// Canonical parameter names for a service kind, in reference order.
pub fn canonical_parameters(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::DataSelect => DATASELECT_PARAMETERS,
        ResourceKind::Station => STATION_PARAMETERS,
        ResourceKind::Event => EVENT_PARAMETERS,
    }
}

/// Compare extracted parameters against the canonical set for `kind`.
///
/// Returns at most one diagnostic, enumerating every missing canonical
/// name in reference-set order. A complete document yields `None`.
pub fn check_completeness(
    kind: ResourceKind,
    parameters: &BTreeMap<String, ParamDescriptor>,
) -> Option<Diagnostic> {
    let missing: Vec<String> = canonical_parameters(kind)
        .iter()
        .filter(|name| !parameters.contains_key(**name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(Diagnostic { kind, missing })
    }
}
