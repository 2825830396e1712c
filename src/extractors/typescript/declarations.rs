//! Core declaration walk
//!
//! Visits the tree in source order and routes type declarations to the
//! specialised extraction modules. Function bodies and type bodies are not
//! descended into: local types are not part of a file's schema.

use super::{classes, interfaces};
use crate::extractors::base::TypeDescription;
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::{Node, Tree};

const OPAQUE_SUBTREES: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "arrow_function",
    "method_definition",
    "class_body",
    "interface_body",
    "object_type",
    "enum_body",
];

/// Extract all type descriptions from the syntax tree
pub(super) fn extract_descriptions(
    extractor: &TypeScriptExtractor,
    tree: &Tree,
) -> Vec<TypeDescription> {
    let mut descriptions = Vec::new();
    visit_node(extractor, tree.root_node(), &mut descriptions);
    descriptions
}

fn visit_node(extractor: &TypeScriptExtractor, node: Node, descriptions: &mut Vec<TypeDescription>) {
    let description = match node.kind() {
        "interface_declaration" => Some(interfaces::extract_interface(extractor, node)),
        "type_alias_declaration" => Some(interfaces::extract_type_alias(extractor, node)),
        "enum_declaration" => Some(interfaces::extract_enum(extractor, node)),
        "class_declaration" | "abstract_class_declaration" => {
            Some(classes::extract_class(extractor, node))
        }
        _ => None,
    };

    if let Some(description) = description {
        descriptions.push(description);
    }

    if OPAQUE_SUBTREES.contains(&node.kind()) {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit_node(extractor, child, descriptions);
    }
}
