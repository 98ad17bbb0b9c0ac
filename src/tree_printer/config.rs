use crate::tree_printer::{Error, Result};

/// The widest gap a `TreePrinter` accepts between sibling subtrees.
pub const MAX_HSPACE: usize = u16::MAX as usize;

/// Layout options of a `TreePrinter`.
///
/// # Examples
/// ```
/// use avl_collections::tree_printer::PrinterConfig;
///
/// let config = PrinterConfig::default();
/// assert!(!config.square_branches);
/// assert!(!config.lr_agnostic);
/// assert_eq!(config.hspace, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Draw branches as `+---+---+` brackets instead of `/` and `\` slopes.
    pub square_branches: bool,
    /// Draw a single child of a squared branch as a centered `|`. Ignored for sloped branches.
    pub lr_agnostic: bool,
    /// Minimum number of blank columns between two sibling subtrees on their closest row.
    pub hspace: usize,
}

impl PrinterConfig {
    /// Returns `Error::InvalidHspace` unless `1 <= hspace <= MAX_HSPACE`.
    pub fn validate(&self) -> Result<()> {
        if self.hspace == 0 || self.hspace > MAX_HSPACE {
            return Err(Error::InvalidHspace(self.hspace));
        }
        Ok(())
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        PrinterConfig {
            square_branches: false,
            lr_agnostic: false,
            hspace: 2,
        }
    }
}
