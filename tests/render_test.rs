//! Tests for line formatting and tree rendering

use rstest::rstest;

use landtree::domain::{
    format_line, format_prefix, render, render_boxed, Company, Land, Mode, TreeBuilder, TreeNode,
};

fn node(id: &str, name: &str, count: usize) -> TreeNode {
    let mut n = TreeNode::from_company(&Company::new(id, name, ""));
    n.owned_lands_count = count;
    n
}

#[rstest]
#[case(0, "")]
#[case(1, " | - ")]
#[case(3, " | | | - ")]
fn given_level_when_formatting_prefix_then_matches(#[case] level: usize, #[case] expected: &str) {
    assert_eq!(format_prefix(level), expected);
}

#[test]
fn given_level_zero_when_formatting_line_then_no_prefix() {
    let line = format_line(0, &node("1", "FOO", 4));
    assert_eq!(line, "1; FOO; owner of 4 land parcels");
}

#[test]
fn given_level_three_when_formatting_line_then_prefixed() {
    let line = format_line(3, &node("1", "FOO", 4));
    assert_eq!(line, " | | | - 1; FOO; owner of 4 land parcels");
}

#[test]
fn given_found_node_when_formatting_line_then_marked() {
    let line = format_line(3, &node("1", "FOO", 4).with_found(true));
    assert_eq!(line, " | | | - 1; FOO; owner of 4 land parcels ***");
}

#[test]
fn given_three_level_tree_when_rendering_then_root_first_and_indented() {
    let tree = vec![node("1", "a", 5).with_items(vec![
        node("2", "b", 4).with_items(vec![node("3", "c", 0)])
    ])];

    let rendered = render(&tree);

    assert_eq!(
        rendered,
        "1; a; owner of 5 land parcels\n | - 2; b; owner of 4 land parcels\n | | - 3; c; owner of 0 land parcels"
    );
    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn given_from_root_scenario_when_rendering_then_matches_expected_report() {
    let companies = vec![
        Company::new("1", "a", ""),
        Company::new("2", "b", "1"),
        Company::new("3", "c", "2"),
    ];
    let lands = vec![
        Land::new("1", "1"),
        Land::new("2", "2"),
        Land::new("3", "2"),
        Land::new("4", "3"),
        Land::new("5", "3"),
    ];
    let tree = TreeBuilder::new(&companies, &lands)
        .build("3", Mode::FromRoot)
        .unwrap();

    assert_eq!(
        render(&tree),
        "1; a; owner of 5 land parcels\n | - 2; b; owner of 4 land parcels\n | | - 3; c; owner of 2 land parcels ***"
    );
}

#[test]
fn given_expanded_scenario_when_rendering_then_children_reversed() {
    let companies = vec![
        Company::new("P", "parent", ""),
        Company::new("X", "x", "P"),
        Company::new("Y", "y", "P"),
    ];
    let lands = vec![Land::new("1", "X"), Land::new("2", "Y"), Land::new("3", "Y")];
    let tree = TreeBuilder::new(&companies, &lands)
        .build("P", Mode::Expanded)
        .unwrap();

    assert_eq!(
        render(&tree),
        "P; parent; owner of 3 land parcels ***\n | - Y; y; owner of 2 land parcels\n | - X; x; owner of 1 land parcels"
    );
}

#[test]
fn given_found_node_when_rendering_boxed_then_marks_label() {
    let tree = vec![node("1", "a", 2).with_items(vec![node("2", "b", 2).with_found(true)])];

    let rendered = render_boxed(&tree);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "1; a; owner of 2 land parcels");
    assert!(lines[1].ends_with("2; b; owner of 2 land parcels ***"));
}
