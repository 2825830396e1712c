//! Member extraction for interface bodies, object types and class bodies

use super::helpers;
use crate::extractors::base::{MemberDescription, MemberKind};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract members of an `interface_body`, `object_type` or `class_body`, in order
pub(super) fn extract_members(extractor: &TypeScriptExtractor, body: Node) -> Vec<MemberDescription> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "property_signature" | "public_field_definition" => {
                Some(extract_property(extractor, child))
            }
            "method_signature" | "method_definition" | "abstract_method_signature" => {
                Some(extract_method(extractor, child))
            }
            "index_signature" => Some(extract_index_signature(extractor, child)),
            _ => None,
        })
        .collect()
}

fn extract_property(extractor: &TypeScriptExtractor, node: Node) -> MemberDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    MemberDescription {
        name,
        kind: MemberKind::Property,
        type_text: helpers::type_annotation_text(base, node.child_by_field_name("type")),
        optional: helpers::has_modifier(node, "?"),
        readonly: helpers::has_modifier(node, "readonly"),
        is_static: helpers::has_modifier(node, "static"),
        visibility: helpers::extract_visibility(base, node),
        doc_comment: base.find_doc_comment(&node),
    }
}

fn extract_method(extractor: &TypeScriptExtractor, node: Node) -> MemberDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    MemberDescription {
        name,
        kind: MemberKind::Method,
        type_text: helpers::call_signature_text(base, node),
        optional: helpers::has_modifier(node, "?"),
        readonly: false,
        is_static: helpers::has_modifier(node, "static"),
        visibility: helpers::extract_visibility(base, node),
        doc_comment: base.find_doc_comment(&node),
    }
}

fn extract_index_signature(extractor: &TypeScriptExtractor, node: Node) -> MemberDescription {
    let base = extractor.base();
    let key_name = base.get_field_text(&node, "name").or_else(|| {
        base.find_child_by_type(&node, "identifier")
            .map(|identifier| base.get_node_text(&identifier))
    });
    let key = match (key_name, base.get_field_text(&node, "index_type")) {
        (Some(name), Some(index_type)) => format!("{}: {}", name, index_type),
        _ => base
            .find_child_by_type(&node, "mapped_type_clause")
            .map(|clause| base.get_node_text(&clause))
            .unwrap_or_default(),
    };

    MemberDescription {
        name: format!("[{}]", key),
        kind: MemberKind::IndexSignature,
        type_text: helpers::type_annotation_text(base, node.child_by_field_name("type")),
        optional: false,
        readonly: helpers::has_modifier(node, "readonly"),
        is_static: false,
        visibility: None,
        doc_comment: base.find_doc_comment(&node),
    }
}
