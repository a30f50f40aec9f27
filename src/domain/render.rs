//! Text rendering of annotated ownership trees.

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::entities::TreeNode;

/// Indentation prefix for a node at `level`: `" |"` per level, then `" - "`.
pub fn format_prefix(level: usize) -> String {
    if level == 0 {
        return String::new();
    }
    let mut prefix = " |".repeat(level);
    prefix.push_str(" - ");
    prefix
}

fn format_body(node: &TreeNode) -> String {
    let mut line = format!(
        "{}; {}; owner of {} land parcels",
        node.id, node.name, node.owned_lands_count
    );
    if node.found {
        line.push_str(" ***");
    }
    line
}

pub fn format_line(level: usize, node: &TreeNode) -> String {
    format!("{}{}", format_prefix(level), format_body(node))
}

/// Render `tree` one line per node, every parent ahead of its subtree.
///
/// Items sharing a parent come out last-to-first, and so do top-level
/// entries. Existing reports depend on this layout.
#[instrument(level = "debug", skip(tree))]
pub fn render(tree: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    // forward push onto a LIFO stack yields the last item first
    let mut stack: Vec<(usize, &TreeNode)> = tree.iter().map(|n| (0, n)).collect();

    while let Some((level, node)) = stack.pop() {
        lines.push(format_line(level, node));
        for item in &node.items {
            stack.push((level + 1, item));
        }
    }

    lines.iter().join("\n")
}

/// Render `tree` with box-drawing connectors, items in input order.
pub fn render_boxed(tree: &[TreeNode]) -> String {
    tree.iter()
        .map(|node| to_termtree(node).to_string())
        .map(|s| s.trim_end_matches('\n').to_string())
        .join("\n")
}

fn to_termtree(node: &TreeNode) -> Tree<String> {
    let leaves: Vec<_> = node.items.iter().map(to_termtree).collect();
    Tree::new(format_body(node)).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Company;

    fn node(id: &str, count: usize) -> TreeNode {
        let mut n = TreeNode::from_company(&Company::new(id, id, ""));
        n.owned_lands_count = count;
        n
    }

    #[test]
    fn given_level_zero_when_formatting_prefix_then_empty() {
        assert_eq!(format_prefix(0), "");
    }

    #[test]
    fn given_level_one_when_formatting_prefix_then_single_bar() {
        assert_eq!(format_prefix(1), " | - ");
    }

    #[test]
    fn given_empty_tree_when_rendering_then_empty_string() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn given_siblings_when_rendering_then_last_sibling_first() {
        let tree = vec![node("r", 3).with_items(vec![
            node("x", 1).with_items(vec![node("x1", 1)]),
            node("y", 1),
        ])];
        let expected = [
            "r; r; owner of 3 land parcels",
            " | - y; y; owner of 1 land parcels",
            " | - x; x; owner of 1 land parcels",
            " | | - x1; x1; owner of 1 land parcels",
        ]
        .join("\n");
        assert_eq!(render(&tree), expected);
    }

    #[test]
    fn given_nested_tree_when_rendering_boxed_then_keeps_input_order() {
        let tree = vec![node("r", 2).with_items(vec![node("x", 1), node("y", 1)])];
        let out = render_boxed(&tree);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "r; r; owner of 2 land parcels");
        assert!(lines[1].ends_with("x; x; owner of 1 land parcels"));
        assert!(lines[2].ends_with("y; y; owner of 1 land parcels"));
    }
}
