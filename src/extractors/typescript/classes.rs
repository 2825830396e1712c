//! Class extraction
//!
//! Handles class declarations including heritage clauses and abstract classes.

use super::{helpers, members};
use crate::extractors::base::{TypeDescription, TypeKind};
use crate::extractors::typescript::TypeScriptExtractor;
use tree_sitter::Node;

/// Extract a class or abstract class declaration
pub(super) fn extract_class(extractor: &TypeScriptExtractor, node: Node) -> TypeDescription {
    let base = extractor.base();
    let name = base
        .get_field_text(&node, "name")
        .unwrap_or_else(|| "Anonymous".to_string());

    let mut description = base.create_description(&node, name, TypeKind::Class);
    description.type_parameters = helpers::extract_type_parameters(base, node);
    description.is_abstract =
        node.kind() == "abstract_class_declaration" || helpers::has_modifier(node, "abstract");

    if let Some(heritage) = base.find_child_by_type(&node, "class_heritage") {
        if let Some(extends) = base.find_child_by_type(&heritage, "extends_clause") {
            let superclass = base.get_node_text(&extends);
            let superclass = superclass.trim_start_matches("extends").trim();
            if !superclass.is_empty() {
                description.extends.push(superclass.to_string());
            }
        }
        if let Some(implements) = base.find_child_by_type(&heritage, "implements_clause") {
            description.implements = base.named_children_text(&implements);
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        description.members = members::extract_members(extractor, body);
    }

    description
}
