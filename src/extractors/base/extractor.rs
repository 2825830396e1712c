// BaseExtractor: per-file helpers shared by the language extractors
//
// Holds the file being walked and provides node text, doc comment lookup and
// description construction.

use once_cell::sync::Lazy;
use regex::Regex;
use tree_sitter::Node;

use super::types::{TypeDescription, TypeKind};
use crate::program::SourceFile;
use crate::utils::paths::to_unix_style;

/// Comment markers stripped from `/** ... */` blocks, one line at a time
static DOC_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*/\*\*+\s?|\s*\*+/\s*$|^\s*\*\s?").expect("doc marker pattern is valid")
});

pub struct BaseExtractor<'a> {
    pub file: &'a SourceFile,
    pub file_path: String,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            file_path: to_unix_style(&file.path),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        self.file.node_text(node).to_string()
    }

    /// Text of the named field child, if present
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Find the `/** */` block directly above a node
    ///
    /// Exported declarations carry their comment above the `export` keyword, so
    /// wrapper nodes (`export_statement`, `ambient_declaration`) are climbed first.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut anchor = *node;
        while let Some(parent) = anchor.parent() {
            if matches!(parent.kind(), "export_statement" | "ambient_declaration") {
                anchor = parent;
            } else {
                break;
            }
        }

        let sibling = anchor.prev_named_sibling()?;
        if sibling.kind() != "comment" {
            return None;
        }

        let text = self.get_node_text(&sibling);
        if !text.trim_start().starts_with("/**") {
            return None;
        }

        Some(clean_doc_comment(&text))
    }

    /// Generate ID for a description (MD5 hash)
    pub fn generate_id(&self, name: &str, line: u32, column: u32) -> String {
        let input = format!("{}:{}:{}:{}", self.file_path, name, line, column);
        let digest = md5::compute(input.as_bytes());
        format!("{:x}", digest)
    }

    /// Create a description for a declaration node with empty detail lists
    pub fn create_description(&self, node: &Node, name: String, kind: TypeKind) -> TypeDescription {
        let start_pos = node.start_position();
        let end_pos = node.end_position();

        TypeDescription {
            id: self.generate_id(&name, start_pos.row as u32, start_pos.column as u32),
            name,
            kind,
            file_path: self.file_path.clone(),
            start_line: (start_pos.row + 1) as u32,
            end_line: (end_pos.row + 1) as u32,
            exported: is_exported(node),
            namespace: self.enclosing_namespace(node),
            doc_comment: self.find_doc_comment(node),
            type_parameters: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            members: Vec::new(),
            alias_of: None,
            variants: Vec::new(),
            is_abstract: false,
        }
    }

    /// Dotted names of the namespaces around a node, outermost first
    pub fn enclosing_namespace(&self, node: &Node) -> Option<String> {
        let mut names = Vec::new();
        let mut current = node.parent();
        while let Some(parent) = current {
            if matches!(parent.kind(), "internal_module" | "module") {
                if let Some(name) = self.get_field_text(&parent, "name") {
                    names.push(name);
                }
            }
            current = parent.parent();
        }

        if names.is_empty() {
            None
        } else {
            names.reverse();
            Some(names.join("."))
        }
    }
}

/// `export` may sit above a `declare` wrapper (`export declare class Foo {}`)
fn is_exported(node: &Node) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        match parent.kind() {
            "export_statement" => return true,
            "ambient_declaration" => current = parent.parent(),
            _ => return false,
        }
    }
    false
}

fn clean_doc_comment(text: &str) -> String {
    text.lines()
        .map(|line| DOC_MARKERS.replace_all(line, "").trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_single_line_doc_comment() {
        assert_eq!(clean_doc_comment("/** A user record */"), "A user record");
    }

    #[test]
    fn test_clean_multi_line_doc_comment() {
        let text = "/**\n * First line.\n *\n * @deprecated use Account\n */";
        assert_eq!(
            clean_doc_comment(text),
            "First line.\n@deprecated use Account"
        );
    }
}
