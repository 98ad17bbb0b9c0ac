use crate::tree_printer::line::{spaces, TreeLine};
use crate::tree_printer::{PrinterConfig, Result};
use log::debug;
use std::cmp;
use std::io::Write;

type LabelFn<'a, N> = Box<dyn Fn(&N) -> String + 'a>;
type ChildFn<'a, N> = Box<dyn Fn(&N) -> Option<&N> + 'a>;

/// Writes binary trees of `N` nodes to `W` as ASCII diagrams.
///
/// The printer never inspects a node directly. `label`, `left` and `right` must return the same
/// values for the same node during a call to `print_tree`, and may be called several times per
/// node.
///
/// # Examples
/// ```
/// use avl_collections::tree_printer::TreePrinter;
///
/// struct Node {
///     value: u32,
///     left: Option<Box<Node>>,
///     right: Option<Box<Node>>,
/// }
///
/// let leaf = |value| Some(Box::new(Node { value, left: None, right: None }));
/// let root = Node { value: 2, left: leaf(1), right: leaf(3) };
///
/// let mut out = Vec::new();
/// {
///     let mut printer = TreePrinter::new(
///         |node: &Node| node.value.to_string(),
///         |node: &Node| node.left.as_deref(),
///         |node: &Node| node.right.as_deref(),
///         &mut out,
///     );
///     printer.print_tree(Some(&root)).unwrap();
/// }
///
/// assert_eq!(String::from_utf8(out).unwrap(), "  2  \n / \\ \n1   3\n");
/// ```
pub struct TreePrinter<'a, N, W> {
    label: LabelFn<'a, N>,
    left: ChildFn<'a, N>,
    right: ChildFn<'a, N>,
    out: W,
    config: PrinterConfig,
}

impl<'a, N, W> TreePrinter<'a, N, W>
where
    W: Write,
{
    /// Constructs a new `TreePrinter` writing to `out` with the default `PrinterConfig`.
    pub fn new<FN, FL, FR>(label: FN, left: FL, right: FR, out: W) -> Self
    where
        FN: Fn(&N) -> String + 'a,
        FL: Fn(&N) -> Option<&N> + 'a,
        FR: Fn(&N) -> Option<&N> + 'a,
    {
        TreePrinter {
            label: Box::new(label),
            left: Box::new(left),
            right: Box::new(right),
            out,
            config: PrinterConfig::default(),
        }
    }

    pub fn set_square_branches(&mut self, square_branches: bool) {
        self.config.square_branches = square_branches;
    }

    pub fn set_lr_agnostic(&mut self, lr_agnostic: bool) {
        self.config.lr_agnostic = lr_agnostic;
    }

    /// Sets the minimum gap between sibling subtrees. Returns `Error::InvalidHspace` if `hspace`
    /// is 0 or larger than `MAX_HSPACE`, leaving the previous value in place.
    pub fn set_hspace(&mut self, hspace: usize) -> Result<()> {
        self.set_config(PrinterConfig {
            hspace,
            ..self.config
        })
    }

    pub fn set_config(&mut self, config: PrinterConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Consumes the printer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the tree rooted at `root`, one row per line. Every row is padded with spaces to
    /// the width of the widest row. An empty tree writes nothing.
    pub fn print_tree(&mut self, root: Option<&N>) -> Result<()> {
        let tree_lines = self.tree_lines(root);
        debug!("printing tree of {} rows", tree_lines.len());
        self.print_tree_lines(&tree_lines)
    }

    fn print_tree_lines(&mut self, tree_lines: &[TreeLine]) -> Result<()> {
        let min_left = match tree_lines.iter().map(|line| line.left_offset).min() {
            Some(min_left) => min_left,
            None => return Ok(()),
        };
        let max_right = tree_lines
            .iter()
            .map(|line| line.right_offset)
            .max()
            .unwrap_or(min_left);

        for line in tree_lines {
            writeln!(
                self.out,
                "{}{}{}",
                spaces(line.left_offset - min_left),
                line.text,
                spaces(max_right - line.right_offset),
            )?;
        }
        Ok(())
    }

    /// Lays out the tree rooted at `root` without writing it. Offsets are relative to the center
    /// line of the root label.
    pub fn tree_lines(&self, root: Option<&N>) -> Vec<TreeLine> {
        let root = match root {
            Some(root) => root,
            None => return Vec::new(),
        };

        let left_lines = self.tree_lines((self.left)(root));
        let right_lines = self.tree_lines((self.right)(root));

        // The closest the two center lines can be without the subtrees touching on any row.
        let max_root_spacing = left_lines
            .iter()
            .zip(right_lines.iter())
            .map(|(left, right)| left.right_offset - right.left_offset)
            .fold(0, cmp::max);

        // An odd spacing gives the parent a single center column.
        let mut root_spacing = max_root_spacing + self.config.hspace as isize;
        if root_spacing % 2 == 0 {
            root_spacing += 1;
        }

        let mut tree_lines = vec![TreeLine::centered((self.label)(root))];
        let (left_adjust, right_adjust) = self.push_branches(
            &mut tree_lines,
            !left_lines.is_empty(),
            !right_lines.is_empty(),
            root_spacing,
        );

        let adjusted_root_spacing = match root_spacing {
            1 if self.config.square_branches => 1,
            1 => 3,
            _ => root_spacing,
        };

        let mut left_iter = left_lines.into_iter();
        let mut right_iter = right_lines.into_iter();
        loop {
            let line = match (left_iter.next(), right_iter.next()) {
                (Some(left), Some(right)) => {
                    let gap = adjusted_root_spacing - left.right_offset + right.left_offset;
                    TreeLine::join(&left, &right, gap, left_adjust, right_adjust)
                },
                (Some(left), None) => left.shifted(left_adjust),
                (None, Some(right)) => right.shifted(right_adjust),
                (None, None) => break,
            };
            tree_lines.push(line);
        }

        tree_lines
    }

    /// Appends the branch rows below a root label and returns how far the left and right
    /// subtrees must be shifted to hang from them.
    fn push_branches(
        &self,
        tree_lines: &mut Vec<TreeLine>,
        has_left: bool,
        has_right: bool,
        root_spacing: isize,
    ) -> (isize, isize) {
        let PrinterConfig {
            square_branches,
            lr_agnostic,
            ..
        } = self.config;

        match (has_left, has_right) {
            (false, false) => (0, 0),
            (false, true) => {
                if !square_branches {
                    tree_lines.push(TreeLine::new("\\", 1, 1));
                    (0, 2)
                } else if lr_agnostic {
                    tree_lines.push(TreeLine::new("|", 0, 0));
                    (0, 0)
                } else {
                    tree_lines.push(TreeLine::new("+--+", 0, 3));
                    (0, 3)
                }
            },
            (true, false) => {
                if !square_branches {
                    tree_lines.push(TreeLine::new("/", -1, -1));
                    (-2, 0)
                } else if lr_agnostic {
                    tree_lines.push(TreeLine::new("|", 0, 0));
                    (0, 0)
                } else {
                    tree_lines.push(TreeLine::new("+--+", -3, 0));
                    (-3, 0)
                }
            },
            (true, true) => {
                let adjust = root_spacing / 2 + 1;
                if square_branches {
                    let horizontal = "-".repeat((root_spacing / 2) as usize);
                    let branch = format!("+{}+{}+", horizontal, horizontal);
                    tree_lines.push(TreeLine::new(branch, -adjust, adjust));
                    (-adjust, adjust)
                } else if root_spacing == 1 {
                    tree_lines.push(TreeLine::new("/ \\", -1, 1));
                    (-2, 2)
                } else {
                    for i in (1..root_spacing).step_by(2) {
                        let branch = format!("/{}\\", spaces(i));
                        let offset = (i + 1) / 2;
                        tree_lines.push(TreeLine::new(branch, -offset, offset));
                    }
                    (-adjust, adjust)
                }
            },
        }
    }
}
