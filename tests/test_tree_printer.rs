use avl_collections::tree_printer::{PrinterConfig, TreePrinter};
use rand::{Rng, SeedableRng, XorShiftRng};

struct Node {
    value: u32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

// Plain, unbalanced binary search tree insertion so that the printer sees lopsided shapes.
fn insert(tree: &mut Option<Box<Node>>, value: u32) {
    match *tree {
        Some(ref mut node) => {
            if value < node.value {
                insert(&mut node.left, value);
            } else if value > node.value {
                insert(&mut node.right, value);
            }
        },
        None => {
            *tree = Some(Box::new(Node {
                value,
                left: None,
                right: None,
            }))
        },
    }
}

fn render(tree: &Option<Box<Node>>, config: PrinterConfig) -> Vec<String> {
    let mut printer = TreePrinter::new(
        |node: &Node| node.value.to_string(),
        |node: &Node| node.left.as_deref(),
        |node: &Node| node.right.as_deref(),
        Vec::new(),
    );
    printer.set_config(config).unwrap();
    printer.print_tree(tree.as_deref()).unwrap();

    String::from_utf8(printer.into_inner())
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

fn configs() -> Vec<PrinterConfig> {
    let mut configs = Vec::new();
    for &square_branches in &[false, true] {
        for &lr_agnostic in &[false, true] {
            for hspace in 1..5 {
                configs.push(PrinterConfig {
                    square_branches,
                    lr_agnostic,
                    hspace,
                });
            }
        }
    }
    configs
}

#[test]
fn int_test_random_trees() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);

    for _ in 0..100 {
        let mut tree = None;
        let mut expected = Vec::new();
        for _ in 0..rng.gen_range(1, 40) {
            let value = rng.gen_range(0, 1000);
            if !expected.contains(&value) {
                expected.push(value);
            }
            insert(&mut tree, value);
        }
        expected.sort();

        for config in configs() {
            let lines = render(&tree, config);

            // Every row is padded to the same width.
            let width = lines[0].chars().count();
            assert!(lines.iter().all(|line| line.chars().count() == width));
            assert!(lines.iter().any(|line| !line.starts_with(' ')));
            assert!(lines.iter().any(|line| !line.ends_with(' ')));

            // Labels never touch or overlap, so every label survives as its own token.
            let mut labels: Vec<u32> = lines
                .iter()
                .flat_map(|line| line.split_whitespace())
                .filter_map(|token| token.parse().ok())
                .collect();
            labels.sort();
            assert_eq!(labels, expected);
        }
    }
}

#[test]
fn int_test_empty_tree() {
    for config in configs() {
        assert!(render(&None, config).is_empty());
    }
}

#[test]
fn int_test_degenerate_chain() {
    let mut tree = None;
    for value in 0..4 {
        insert(&mut tree, value);
    }

    assert_eq!(
        render(&tree, PrinterConfig::default()),
        vec!["0      ", " \\     ", "  1    ", "   \\   ", "    2  ", "     \\ ", "      3"],
    );
}
