// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor<'_> {
    /// Find first child by type
    pub fn find_child_by_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// First named child, whatever its kind
    pub fn first_named_child<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let first = node.named_children(&mut cursor).next();
        first
    }

    /// Text of every named child, in order
    pub fn named_children_text(&self, node: &Node) -> Vec<String> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .map(|child| self.get_node_text(&child))
            .collect()
    }
}
