//! XML tree traversal and per-parameter extraction
//!
//! Works on element local names only: real-world documents use the WADL
//! namespace with or without a prefix, and some omit it altogether.

use crate::normalize::ParamNormalizer;
use fdsn_wadl_common::{ParamDescriptor, ParamValue, ResourceKind, Result, WadlError};
use roxmltree::{Document, Node};
use std::collections::BTreeMap;

/// Status-code documentation pseudo-parameter, not a query parameter.
const NODATA_PARAMETER: &str = "nodata";

/// Classify the document by the service markers in its resource URLs.
///
/// Checks the `<resources>` `base` URL first, then each `<resource>`
/// `path`, in document order. `None` when nothing matches.
pub(super) fn detect_resource_kind(doc: &Document) -> Option<ResourceKind> {
    doc.descendants()
        .filter(Node::is_element)
        .filter_map(|node| match node.tag_name().name() {
            "resources" => node.attribute("base"),
            "resource" => node.attribute("path"),
            _ => None,
        })
        .find_map(kind_from_marker)
}

fn kind_from_marker(segment: &str) -> Option<ResourceKind> {
    if segment.contains("dataselect") {
        Some(ResourceKind::DataSelect)
    } else if segment.contains("station") {
        Some(ResourceKind::Station)
    } else if segment.contains("event") {
        Some(ResourceKind::Event)
    } else {
        None
    }
}

/// Build a descriptor for every `<param>` element inside the `<resources>`
/// subtree.
///
/// Parameters declared directly under a method's `<request>` and those
/// inside shared `<representation>` subtrees are both picked up; anything
/// outside `<resources>` (grammars, top-level docs) is not. Documents
/// redundantly declaring a parameter for several HTTP methods resolve
/// last-wins, so iteration stays in document order.
pub(super) fn extract_parameters(doc: &Document) -> Result<BTreeMap<String, ParamDescriptor>> {
    let mut parameters = BTreeMap::new();

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "resources")
        .flat_map(|resources| resources.descendants())
        .filter(|n| n.is_element() && n.tag_name().name() == "param")
    {
        // A param with no name is malformed but harmless.
        let Some(declared) = node.attribute("name") else {
            continue;
        };
        if declared == NODATA_PARAMETER {
            continue;
        }

        let descriptor = extract_param(node, declared)?;
        parameters.insert(descriptor.name.clone(), descriptor);
    }

    Ok(parameters)
}

fn extract_param(node: Node, declared: &str) -> Result<ParamDescriptor> {
    let name = ParamNormalizer::canonical_name(declared).to_string();

    // Explicit type attribute wins; otherwise the per-name default table,
    // which falls back to text for unknown names.
    let param_type = node
        .attribute("type")
        .and_then(ParamNormalizer::explicit_type)
        .unwrap_or_else(|| ParamNormalizer::default_type(&name));

    let required = node
        .attribute("required")
        .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");

    let options: Vec<String> = node
        .children()
        .filter(|c| c.is_element() && c.tag_name().name() == "option")
        .filter_map(|c| c.attribute("value").map(str::to_string))
        .collect();

    let default_value = node
        .attribute("default")
        .map(|raw| {
            ParamValue::coerce(param_type, raw).ok_or_else(|| WadlError::InvalidDefaultValue {
                parameter: name.clone(),
                raw: raw.to_string(),
                expected: param_type,
            })
        })
        .transpose()?;

    let (doc_title, doc) = extract_doc(node);

    Ok(ParamDescriptor {
        name,
        param_type,
        required,
        default_value,
        options,
        doc_title,
        doc,
    })
}

/// Read a param's `<doc>` child: `title` attribute and free-text body.
fn extract_doc(node: Node) -> (Option<String>, Option<String>) {
    let Some(doc_node) = node
        .children()
        .find(|c| c.is_element() && c.tag_name().name() == "doc")
    else {
        return (None, None);
    };

    let title = doc_node
        .attribute("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let text = doc_node
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(strip_stray_quote);

    (title, text)
}

/// Some servers leak a single stray quote into the doc text right before
/// the closing tag; drop it, keep everything else verbatim.
fn strip_stray_quote(text: &str) -> String {
    text.strip_suffix('"').unwrap_or(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdsn_wadl_common::ParamType;

    fn parse(xml: &str) -> BTreeMap<String, ParamDescriptor> {
        let doc = Document::parse(xml).unwrap();
        extract_parameters(&doc).unwrap()
    }

    #[test]
    fn test_detect_kind_from_base_url() {
        let doc = Document::parse(
            r#"<application>
                <resources base="http://service.example.org/fdsnws/station/1/"/>
            </application>"#,
        )
        .unwrap();
        assert_eq!(detect_resource_kind(&doc), Some(ResourceKind::Station));
    }

    #[test]
    fn test_detect_kind_from_resource_path() {
        let doc = Document::parse(
            r#"<application>
                <resources base="http://service.example.org/ws/">
                    <resource path="event/1/query"/>
                </resources>
            </application>"#,
        )
        .unwrap();
        assert_eq!(detect_resource_kind(&doc), Some(ResourceKind::Event));
    }

    #[test]
    fn test_unknown_kind() {
        let doc = Document::parse(
            r#"<application><resources base="http://example.org/other/"/></application>"#,
        )
        .unwrap();
        assert_eq!(detect_resource_kind(&doc), None);
    }

    #[test]
    fn test_nameless_param_skipped() {
        let params = parse(
            r#"<application><resources><request><param style="query"/></request></resources></application>"#,
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_duplicate_declaration_last_wins() {
        let params = parse(
            r#"<application>
                <resources>
                    <request>
                        <param name="starttime" style="query" type="xs:date"/>
                        <param name="starttime" style="query" type="xs:date" required="true"/>
                    </request>
                </resources>
            </application>"#,
        );
        assert!(params["starttime"].required);
    }

    #[test]
    fn test_params_outside_resources_subtree_ignored() {
        let params = parse(
            r#"<application>
                <grammars>
                    <param name="network" style="query"/>
                </grammars>
                <resources>
                    <request>
                        <param name="starttime" style="query"/>
                    </request>
                </resources>
            </application>"#,
        );
        assert!(params.contains_key("starttime"));
        assert!(!params.contains_key("network"));
    }

    #[test]
    fn test_stray_quote_trimmed_once() {
        let params = parse(
            r#"<application><resources><request>
                <param name="magtype" style="query">
                    <doc title="magnitude type">Examples: Ml,Ms,mb,Mw"</doc>
                </param>
            </request></resources></application>"#,
        );
        let descriptor = &params["magnitudetype"];
        assert_eq!(descriptor.doc.as_deref(), Some("Examples: Ml,Ms,mb,Mw"));
        assert_eq!(descriptor.doc_title.as_deref(), Some("magnitude type"));
    }

    #[test]
    fn test_options_do_not_change_declared_type() {
        let params = parse(
            r#"<application><resources><request>
                <param name="quality" style="query" type="xs:string" default="B">
                    <option value="D"/>
                    <option value="R"/>
                    <option value="B"/>
                </param>
            </request></resources></application>"#,
        );
        let quality = &params["quality"];
        assert_eq!(quality.param_type, ParamType::Text);
        assert_eq!(quality.options, vec!["D", "R", "B"]);
        assert_eq!(
            quality.default_value,
            Some(ParamValue::Text("B".to_string()))
        );
    }

    #[test]
    fn test_invalid_default_is_fatal() {
        let doc = Document::parse(
            r#"<application><resources><request>
                <param name="minimumlength" style="query" type="xs:double" default="shortest"/>
            </request></resources></application>"#,
        )
        .unwrap();
        let err = extract_parameters(&doc).unwrap_err();
        match err {
            WadlError::InvalidDefaultValue { parameter, raw, .. } => {
                assert_eq!(parameter, "minimumlength");
                assert_eq!(raw, "shortest");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
