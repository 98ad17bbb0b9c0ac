use std::iter;

/// A rendered row of a subtree.
///
/// `left_offset` is the column of the first character of `text` and `right_offset` the column
/// of its last character, both relative to the center line of the subtree the row belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeLine {
    pub text: String,
    pub left_offset: isize,
    pub right_offset: isize,
}

pub(crate) fn spaces(n: isize) -> String {
    iter::repeat(' ').take(n.max(0) as usize).collect()
}

impl TreeLine {
    pub fn new<S>(text: S, left_offset: isize, right_offset: isize) -> Self
    where
        S: Into<String>,
    {
        TreeLine {
            text: text.into(),
            left_offset,
            right_offset,
        }
    }

    /// Centers `label` on column 0. Even-length labels lean one column to the right.
    ///
    /// An empty label is rendered as a single space.
    pub fn centered(label: String) -> Self {
        let label = if label.is_empty() { String::from(" ") } else { label };
        let len = label.chars().count() as isize;
        TreeLine::new(label, -((len - 1) / 2), len / 2)
    }

    /// Moves the row `adjust` columns to the right.
    pub fn shifted(mut self, adjust: isize) -> Self {
        self.left_offset += adjust;
        self.right_offset += adjust;
        self
    }

    /// Places `right` `gap` columns to the right of `left` and returns the combined row, with its
    /// offsets relative to the parent's center line.
    pub(crate) fn join(
        left: &TreeLine,
        right: &TreeLine,
        gap: isize,
        left_adjust: isize,
        right_adjust: isize,
    ) -> Self {
        let mut text =
            String::with_capacity(left.text.len() + gap.max(0) as usize + right.text.len());
        text.push_str(&left.text);
        text.push_str(&spaces(gap));
        text.push_str(&right.text);
        TreeLine::new(text, left.left_offset + left_adjust, right.right_offset + right_adjust)
    }
}
