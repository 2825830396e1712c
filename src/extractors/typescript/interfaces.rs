//! Interface, type alias and enum extraction

use super::{helpers, members};
use crate::extractors::base::{EnumVariant, TypeDescription, TypeKind};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract an interface declaration
pub(super) fn extract_interface(extractor: &TypeScriptExtractor, node: Node) -> TypeDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    let mut description = base.create_description(&node, name, TypeKind::Interface);
    description.type_parameters = helpers::extract_type_parameters(base, node);

    if let Some(clause) = base.find_child_by_type(&node, "extends_type_clause") {
        description.extends = base.named_children_text(&clause);
    }

    if let Some(body) = node.child_by_field_name("body") {
        description.members = members::extract_members(extractor, body);
    }

    description
}

/// Extract a type alias declaration
///
/// Object-literal aliases (`type A = { ... }`) also get their members.
pub(super) fn extract_type_alias(extractor: &TypeScriptExtractor, node: Node) -> TypeDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    let mut description = base.create_description(&node, name, TypeKind::TypeAlias);
    description.type_parameters = helpers::extract_type_parameters(base, node);

    if let Some(value) = node.child_by_field_name("value") {
        description.alias_of = Some(base.get_node_text(&value));
        if value.kind() == "object_type" {
            description.members = members::extract_members(extractor, value);
        }
    }

    description
}

/// Extract an enum declaration
pub(super) fn extract_enum(extractor: &TypeScriptExtractor, node: Node) -> TypeDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    let mut description = base.create_description(&node, name, TypeKind::Enum);

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        description.variants = body
            .named_children(&mut cursor)
            .filter(|member| member.kind() != "comment")
            .map(|member| {
                if member.kind() == "enum_assignment" {
                    EnumVariant {
                        name: base.get_field_text(&member, "name").unwrap_or_default(),
                        value: base.get_field_text(&member, "value"),
                    }
                } else {
                    EnumVariant {
                        name: base.get_node_text(&member),
                        value: None,
                    }
                }
            })
            .collect();
    }

    description
}
