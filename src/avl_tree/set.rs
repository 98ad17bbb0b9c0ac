use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::tree_printer::{self, TreePrinter};
use std::fmt::{self, Debug, Display};
use std::io::Write;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.contains(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was added. If an equal value
    /// already exists in the set, the stored value is kept and `false` is returned.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.tree, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the set. If an equal value exists in the set, it will return the
    /// stored value. Otherwise it will return `None`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let removed = tree::remove(&mut self.tree, value);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value that is equal to a particular value. Returns
    /// `None` if no such value exists.
    ///
    /// When the ordering of `T` only considers part of the value, the returned value may differ
    /// from `value` in the remaining fields.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    /// use std::cmp::Ordering;
    ///
    /// #[derive(Debug)]
    /// struct Account {
    ///     id: u32,
    ///     owner: &'static str,
    /// }
    ///
    /// impl PartialEq for Account {
    ///     fn eq(&self, other: &Self) -> bool { self.id == other.id }
    /// }
    /// impl Eq for Account {}
    /// impl PartialOrd for Account {
    ///     fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    /// }
    /// impl Ord for Account {
    ///     fn cmp(&self, other: &Self) -> Ordering { self.id.cmp(&other.id) }
    /// }
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(Account { id: 7, owner: "alice" });
    ///
    /// let stored = set.get(&Account { id: 7, owner: "" }).unwrap();
    /// assert_eq!(stored.owner, "alice");
    /// assert!(set.get(&Account { id: 8, owner: "" }).is_none());
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::get(&self.tree, value)
    }

    /// Calls `visit` on every value in the set in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut values = Vec::new();
    /// set.inorder(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn inorder<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        tree::inorder(&self.tree, &mut visit);
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the underlying tree. An empty set has a height of 0.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), 0);
    /// for value in 0..7 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Writes a diagram of the underlying tree followed by the in-order traversal of the set.
    ///
    /// Every node is labelled with its value and its balance factor.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut out = Vec::new();
    /// set.print(&mut out).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Tree structure:\n1[-1]   \n  +--+  \n    2[0]\n\nInorder traversal: 1 2 \n",
    /// );
    /// ```
    pub fn print<W>(&self, out: &mut W) -> tree_printer::Result<()>
    where
        T: Display,
        W: Write,
    {
        writeln!(out, "Tree structure:")?;

        {
            let mut printer: TreePrinter<Node<T>, &mut W> = TreePrinter::new(
                |node: &Node<T>| format!("{}[{}]", node.value, node.balance()),
                |node: &Node<T>| node.left.as_deref(),
                |node: &Node<T>| node.right.as_deref(),
                &mut *out,
            );
            printer.set_square_branches(true);
            printer.set_hspace(3)?;
            printer.print_tree(self.tree.as_deref())?;
        }

        write!(out, "\nInorder traversal: ")?;
        let mut res = Ok(());
        self.inorder(|value| {
            if res.is_ok() {
                res = write!(out, "{} ", value);
            }
        });
        res?;
        writeln!(out)?;

        Ok(())
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for AvlSet<T>
where
    T: Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut values = Vec::with_capacity(self.len);
        self.inorder(|value| values.push(value));
        f.debug_set().entries(values).finish()
    }
}
