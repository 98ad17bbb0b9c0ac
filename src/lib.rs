//! An ordered set backed by an avl tree, together with a printer that renders any binary tree as
//! an ASCII diagram.
//!
//! # Examples
//! ```
//! use avl_collections::avl_tree::AvlSet;
//!
//! let mut set = AvlSet::new();
//! for value in &[10, 20, 30, 40, 50, 25] {
//!     set.insert(*value);
//! }
//!
//! assert!(set.contains(&30));
//! assert!(!set.contains(&35));
//!
//! set.remove(&30);
//! let mut values = Vec::new();
//! set.inorder(|value| values.push(*value));
//! assert_eq!(values, vec![10, 20, 25, 40, 50]);
//! ```

pub mod avl_tree;
pub mod tree_printer;
