// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Ordered multiset backed by an unbalanced binary search tree.
//!
//! Every distinct key is stored exactly once, in its own node, together with
//! an occurrence count. Inserting a key that is already present bumps the
//! count; removing decrements it and unlinks the node once the last unit is
//! gone.
//!
//! ```text
//!              (5, x1)
//!             /       \
//!        (3, x2)     (8, x1)
//!        /     \
//!   (1, x1)   (4, x3)
//! ```
//!
//! The tree is never rebalanced, so its shape (and therefore [`height`] and
//! structural equality) depends on insertion order.
//!
//! # Example
//!
//! ```
//! use collectible_store::OrderedMultiset;
//!
//! let mut set = OrderedMultiset::new();
//! assert!(set.insert("lincoln"));
//! assert!(!set.insert("lincoln"));
//! assert_eq!(set.count(&"lincoln"), 2);
//!
//! assert!(set.remove(&"lincoln"));
//! assert_eq!(set.count(&"lincoln"), 1);
//! ```
//!
//! [`height`]: OrderedMultiset::height

use crate::error::StoreError;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    key: T,
    /// Always at least 1.
    count: u32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(key: T, count: u32) -> Box<Self> {
        Box::new(Self {
            key,
            count,
            left: None,
            right: None,
        })
    }

    fn children(&self) -> impl Iterator<Item = &Node<T>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Height of the subtree rooted here. A leaf has height 0.
    fn height(&self) -> usize {
        let mut level = vec![self];
        let mut height = 0;
        loop {
            let next: Vec<&Node<T>> = level.iter().copied().flat_map(Node::children).collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            level = next;
        }
    }

    /// Unlinks the leftmost node below `link` and splices its right child
    /// into its place. Returns `None` if `link` is empty.
    fn take_leftmost(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            match link {
                Some(node) => link = &mut node.left,
                None => break,
            }
        }
        let mut leftmost = link.take()?;
        *link = leftmost.right.take();
        Some(leftmost)
    }
}

/// A multiset of `T` kept in key order by an unbalanced binary search tree.
///
/// Keys are compared with [`Ord`] only: two values are "the same key" when
/// `cmp` returns [`Ordering::Equal`], regardless of any fields the ordering
/// ignores.
///
/// # Ownership
///
/// The multiset owns every key it stores. A duplicate insert drops the
/// caller's value and keeps the one already in the tree.
///
/// # Equality
///
/// `==` is *structural*: two multisets are equal only if their trees have the
/// same shape and every pair of corresponding nodes holds equal keys with
/// equal counts. Multisets with identical contents built in a different order
/// may therefore compare unequal.
pub struct OrderedMultiset<T> {
    root: Link<T>,
    /// Number of distinct keys (nodes).
    len: usize,
}

impl<T> OrderedMultiset<T> {
    /// Creates an empty multiset.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` when the multiset holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Sum of the occurrence counts of all keys.
    pub fn total_units(&self) -> u64 {
        self.iter().map(|(_, count)| u64::from(count)).sum()
    }

    /// Drops every key and node.
    pub fn clear(&mut self) {
        // Explicit stack so that deep (degenerate) trees don't exhaust the call stack.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Iterates over distinct keys in ascending order with their counts.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterates over keys in ascending order, yielding each key once per
    /// occurrence.
    pub fn units(&self) -> impl Iterator<Item = &T> {
        self.iter()
            .flat_map(|(key, count)| std::iter::repeat_n(key, count as usize))
    }
}

impl<T: Ord> OrderedMultiset<T> {
    /// Inserts one occurrence of `key`.
    ///
    /// Returns `true` if a new node was created, `false` if `key` was already
    /// present (its count is incremented and the passed value is dropped).
    ///
    /// A count already at `u32::MAX` is left as is and `false` is returned;
    /// use [`insert_units`](Self::insert_units) to observe
    /// [`StoreError::CountOverflow`].
    pub fn insert(&mut self, key: T) -> bool {
        match self.insert_units(key, 1) {
            Ok(inserted) => inserted,
            Err(_) => false,
        }
    }

    /// Inserts `units` occurrences of `key`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidArgument`] if `units` is zero.
    /// - [`StoreError::CountOverflow`] if the stored count would overflow.
    ///
    /// The multiset is unchanged when an error is returned.
    pub fn insert_units(&mut self, key: T, units: u32) -> Result<bool, StoreError> {
        if units == 0 {
            return Err(StoreError::InvalidArgument("units must be at least 1"));
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    node.count = node
                        .count
                        .checked_add(units)
                        .ok_or(StoreError::CountOverflow)?;
                    return Ok(false);
                }
            };
        }

        *link = Some(Node::leaf(key, units));
        self.len += 1;
        Ok(true)
    }

    /// Removes one occurrence of `key`.
    ///
    /// Returns `false` (and leaves the tree untouched) if `key` is not
    /// present. When the last occurrence is removed the node is unlinked:
    /// a leaf is dropped, a node with one child is replaced by that child, and
    /// a node with two children takes over the key and count of its in-order
    /// successor, whose node is removed instead.
    pub fn remove(&mut self, key: &T) -> bool {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return false,
            };
            link = match (ordering, link) {
                (Ordering::Equal, found) => {
                    link = found;
                    break;
                }
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, None) => return false,
            };
        }

        let Some(node) = link.as_deref_mut() else {
            return false;
        };
        if node.count > 1 {
            node.count -= 1;
            return true;
        }

        Self::unlink(link);
        self.len -= 1;
        true
    }

    fn unlink(link: &mut Link<T>) {
        let Some(mut node) = link.take() else {
            return;
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, child) => child,
            (Some(left), mut right) => match Node::take_leftmost(&mut right) {
                None => Some(left),
                // Successor splice: the leftmost key of the right subtree is
                // greater than everything on the left and smaller than
                // everything left on the right.
                Some(successor) => {
                    let Node { key, count, .. } = *successor;
                    node.key = key;
                    node.count = count;
                    node.left = Some(left);
                    node.right = right;
                    Some(node)
                }
            },
        };
    }

    fn find(&self, key: &T) -> Option<&Node<T>> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Returns the stored value equal to `key`, if any.
    pub fn retrieve(&self, key: &T) -> Option<&T> {
        self.find(key).map(|node| &node.key)
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Occurrence count of `key`, or 0 when absent.
    pub fn count(&self, key: &T) -> u32 {
        self.find(key).map_or(0, |node| node.count)
    }

    /// Height of the subtree rooted at the node holding `key`.
    ///
    /// A leaf has height 0. Returns `None` if `key` is not present.
    pub fn height(&self, key: &T) -> Option<usize> {
        self.find(key).map(Node::height)
    }
}

/// Deep copy. Walks the source with an explicit stack so that degenerate
/// trees don't exhaust the call stack.
impl<T: Clone> Clone for OrderedMultiset<T> {
    fn clone(&self) -> Self {
        let mut root: Link<T> = None;
        {
            let mut pending: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
            if let Some(source) = self.root.as_deref() {
                pending.push((source, &mut root));
            }
            while let Some((source, slot)) = pending.pop() {
                let node = slot.insert(Node::leaf(source.key.clone(), source.count));
                let Node { left, right, .. } = &mut **node;
                if let Some(child) = source.left.as_deref() {
                    pending.push((child, left));
                }
                if let Some(child) = source.right.as_deref() {
                    pending.push((child, right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> Default for OrderedMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedMultiset<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for OrderedMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root.as_deref(), other.root.as_deref())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    if a.count != b.count || a.key != b.key {
                        return false;
                    }
                    pending.push((a.left.as_deref(), b.left.as_deref()));
                    pending.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for OrderedMultiset<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per distinct key: `<key>; Count: <count>`.
impl<T: fmt::Display> fmt::Display for OrderedMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, count) in self.iter() {
            writeln!(f, "{key}; Count: {count}")?;
        }
        Ok(())
    }
}

impl<T: Ord> Extend<T> for OrderedMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedMultiset<T> {
    type Item = (&'a T, u32);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over `(key, count)` pairs.
///
/// Created by [`OrderedMultiset::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, node.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
