use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

/// Left rotates the subtree rooted at `node` around its right child and returns the new root.
///
/// ```text
///      x                                  y
///     / \                               /   \
///    1   y         Rotate Left         x     z
///       / \      --------------->     / \   / \
///      2   z                         1   2 3   4
///         / \
///        3   4
/// ```
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

/// Right rotates the subtree rooted at `node` around its left child and returns the new root.
///
/// ```text
///          y                              x
///         / \                           /   \
///        x   4     Rotate Right        w     y
///       / \      --------------->     / \   / \
///      w   3                         1   2 3   4
///     / \
///    1   2
/// ```
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Recomputes the height of the root of `tree` and restores the avl invariant at the root with
/// at most two rotations. Both subtrees must already be balanced.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("left-right rotation at subtree of height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        trace!("right rotation at subtree of height {}", node.height);
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("right-left rotation at subtree of height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        trace!("left rotation at subtree of height {}", node.height);
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(ref mut node) = *tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            balance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(node) => {
            let Node { value, right, .. } = *node;
            *tree = right;
            value
        },
        None => unreachable!(),
    }
}

// precondition: the root of the tree holds the value being removed
fn unlink<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    match (node.left.take(), node.right.take()) {
        (None, right) => {
            *tree = right;
            node.value
        },
        (left, None) => {
            *tree = left;
            node.value
        },
        (left, mut right) => {
            // The in-order successor takes the place of the removed value.
            let successor = remove_min(&mut right);
            let value = mem::replace(&mut node.value, successor);
            node.left = left;
            node.right = right;
            *tree = Some(node);
            balance(tree);
            value
        },
    }
}

/// Inserts `value` into `tree`. Returns `false` and leaves the tree untouched if an equal value
/// is already present.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let inserted = match *tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let node = tree.as_mut()?;
    let removed = match value.cmp(&node.value) {
        Ordering::Less => remove(&mut node.left, value)?,
        Ordering::Greater => remove(&mut node.right, value)?,
        Ordering::Equal => return Some(unlink(tree)),
    };

    balance(tree);
    Some(removed)
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn inorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = *tree {
        inorder(&node.left, visit);
        visit(&node.value);
        inorder(&node.right, visit);
    }
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}
