//! Helper functions for the TypeScript extractor
//!
//! Modifier checks, type annotation text and type parameter lists shared by
//! the interface, class and member extraction modules.

use crate::extractors::base::{BaseExtractor, TypeParameter, Visibility};
use tree_sitter::Node;

/// Check if a node has a modifier child of the given kind
///
/// Useful for checking for 'static', 'readonly', 'abstract', '?', etc.
pub(super) fn has_modifier(node: Node, modifier_kind: &str) -> bool {
    node.children(&mut node.walk())
        .any(|child| child.kind() == modifier_kind)
}

/// Visibility from an `accessibility_modifier` child
pub(super) fn extract_visibility(base: &BaseExtractor, node: Node) -> Option<Visibility> {
    base.find_child_by_type(&node, "accessibility_modifier")
        .and_then(|modifier| Visibility::from_modifier(&base.get_node_text(&modifier)))
}

/// The type inside a `type_annotation` (without the leading `:`)
pub(super) fn type_annotation_text(base: &BaseExtractor, node: Option<Node>) -> Option<String> {
    let node = node?;
    if node.kind() == "type_annotation" {
        base.first_named_child(&node)
            .map(|inner| base.get_node_text(&inner))
    } else {
        Some(base.get_node_text(&node))
    }
}

/// `(params): Return` for anything with a call signature
pub(super) fn call_signature_text(base: &BaseExtractor, node: Node) -> Option<String> {
    let parameters = base.get_field_text(&node, "parameters")?;
    let return_type = base.get_field_text(&node, "return_type").unwrap_or_default();
    Some(format!("{}{}", parameters, return_type))
}

/// Declared type parameters of a node with a `type_parameters` field
pub(super) fn extract_type_parameters(base: &BaseExtractor, node: Node) -> Vec<TypeParameter> {
    let Some(params) = node.child_by_field_name("type_parameters") else {
        return Vec::new();
    };

    let mut cursor = params.walk();
    params
        .named_children(&mut cursor)
        .filter(|param| param.kind() == "type_parameter")
        .filter_map(|param| {
            let name = base.get_field_text(&param, "name")?;
            // constraint is `extends T`, value is `= T`
            let constraint = param
                .child_by_field_name("constraint")
                .and_then(|c| base.first_named_child(&c))
                .map(|c| base.get_node_text(&c));
            let default = param
                .child_by_field_name("value")
                .and_then(|v| base.first_named_child(&v))
                .map(|v| base.get_node_text(&v));
            Some(TypeParameter {
                name,
                constraint,
                default,
            })
        })
        .collect()
}
