//! An unbalanced binary search tree that counts duplicate records
//!
//! Every distinct record lives in exactly one node together with the number of times it has been
//! inserted and not yet removed. Equal records never become separate nodes. The tree owns every
//! record it holds, hands out shared references only, and drops a record once its count reaches
//! zero.
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    occurrences: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, occurrences: usize) -> Box<Self> {
        Box::new(Node {
            value,
            occurrences,
            left: None,
            right: None,
        })
    }
}

/// A key ordered store of records with occurrence counts
///
/// The store never rebalances, so inserting records in sorted order produces a tree as deep as
/// it is long. All walks are iterative, so deep trees cost time but never stack space.
///
/// # Example
///
/// ```
/// # use stockroom::OrderedStore;
/// let mut store: OrderedStore<u32> = [5, 3, 8, 3, 1, 8, 8].into_iter().collect();
/// assert_eq!(store.occurrence(&8), 3);
/// assert!(store.remove(&5));
/// let keys: Vec<_> = store.iter().map(|(key, _)| *key).collect();
/// assert_eq!(keys, [1, 3, 8]);
/// ```
#[derive(Debug)]
pub struct OrderedStore<T> {
    root: Link<T>,
    len: usize,
}

impl<T> OrderedStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        OrderedStore { root: None, len: 0 }
    }

    /// The number of distinct records
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the store holds nothing
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The sum of every record's occurrence count
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Iterate over records and their occurrence counts in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Drop every node and record, leaving the store empty
    ///
    /// Children are always released before their parent.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => drop(node),
                (left, right) => {
                    stack.push(node);
                    stack.extend(left);
                    stack.extend(right);
                }
            }
        }
        self.len = 0;
    }
}

impl<T: Ord> OrderedStore<T> {
    /// Insert a record
    ///
    /// If an equal record is already stored its count goes up by one and `value` is dropped.
    /// Otherwise `value` becomes a new node with a count of one. Either way the store now owns
    /// the record, and this returns true.
    pub fn insert(&mut self, value: T) -> bool {
        self.insert_many(value, 1)
    }

    /// Insert `count` occurrences of a record in a single walk
    ///
    /// Returns false and stores nothing when `count` is zero.
    pub fn insert_many(&mut self, value: T, count: usize) -> bool {
        if count == 0 {
            return false;
        }
        let link = Self::seek_mut(&mut self.root, &value);
        match link.as_mut() {
            Some(node) => node.occurrences += count,
            None => {
                *link = Some(Node::new(value, count));
                self.len += 1;
            }
        }
        true
    }

    /// Find the stored record equal to `target`
    pub fn retrieve(&self, target: &T) -> Option<&T> {
        self.find(target).map(|node| &node.value)
    }

    /// How many occurrences of `target` are stored, zero if none
    pub fn occurrence(&self, target: &T) -> usize {
        self.find(target).map_or(0, |node| node.occurrences)
    }

    /// True if at least one occurrence of `target` is stored
    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }

    /// Remove one occurrence of `target`
    ///
    /// Returns false if no equal record is stored. When the last occurrence is removed the node
    /// is unlinked and its record dropped.
    pub fn remove(&mut self, target: &T) -> bool {
        let link = Self::seek_mut(&mut self.root, target);
        let node = match link.as_mut() {
            Some(node) => node,
            None => return false,
        };
        if node.occurrences > 1 {
            node.occurrences -= 1;
            return true;
        }
        Self::unlink(link);
        self.len -= 1;
        true
    }

    fn find(&self, target: &T) -> Option<&Node<T>> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match target.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// The link holding a record equal to `target`, or the empty link where it belongs
    fn seek_mut<'a>(mut link: &'a mut Link<T>, target: &T) -> &'a mut Link<T> {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => target.cmp(&node.value),
                None => return link,
            };
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Delete the node held by `link`
    ///
    /// A node with two children takes over the record and count of its in-order successor, and
    /// the successor's node is spliced out of the right subtree instead.
    fn unlink(link: &mut Link<T>) {
        let mut node = match link.take() {
            Some(node) => node,
            None => return,
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                if let Some(successor) = Self::take_leftmost(&mut right) {
                    let Node {
                        value, occurrences, ..
                    } = *successor;
                    node.value = value;
                    node.occurrences = occurrences;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
    }

    /// Detach the leftmost node of a subtree, promoting its right child into its place
    fn take_leftmost(mut link: &mut Link<T>) -> Link<T> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }
        let mut node = link.take()?;
        *link = node.right.take();
        Some(node)
    }
}

impl<T> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedStore<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Copy a subtree node by node, filling each empty slot of the copy from an explicit stack
fn clone_link<T: Clone>(source: &Link<T>) -> Link<T> {
    let mut root = None;
    {
        let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(node) = source.as_deref() {
            stack.push((node, &mut root));
        }
        while let Some((node, slot)) = stack.pop() {
            let copy = slot.insert(Node::new(node.value.clone(), node.occurrences));
            if let Some(left) = node.left.as_deref() {
                stack.push((left, &mut copy.left));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, &mut copy.right));
            }
        }
    }
    root
}

impl<T: Clone> Clone for OrderedStore<T> {
    fn clone(&self) -> Self {
        OrderedStore {
            root: clone_link(&self.root),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = clone_link(&source.root);
        self.len = source.len;
    }
}

impl<T: PartialEq> PartialEq for OrderedStore<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedStore<T> {}

impl<T: Ord> FromIterator<T> for OrderedStore<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut store = OrderedStore::new();
        store.extend(iter);
        store
    }
}

impl<T: Ord> Extend<T> for OrderedStore<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedStore<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes every record on its own line, in ascending order
impl<T: Display> Display for OrderedStore<T> {
    fn fmt(&self, out: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        for (value, _) in self.iter() {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}

/// An in-order iterator over an [OrderedStore]
///
/// Yields each record with its occurrence count.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.value, node.occurrences))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
