use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A node in the heap. `priority` is used to order nodes (smallest at the root).
#[derive(Debug, Clone)]
struct HeapNode<K, P> {
    key: K,
    priority: P,
}

/// A min-priority queue mapping distinct keys to priorities.
///
/// The heap uses the one-based index layout over a zero-based vector: the
/// children of slot `i` are `2 * i` and `2 * i + 1`, the parent of slot `i` is
/// `i >> 1`. The root therefore has a single child, slot 1.
///
/// Priorities are compared with `<` only. A priority that is not less than
/// another (including incomparable values such as `NaN`) never moves a node.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<K, P> {
    /// The heap storage (array-based).
    nodes: Vec<HeapNode<K, P>>,
    /// Maps keys -> index in the `nodes` vector.
    indices: HashMap<K, usize>,
}

impl<K, P> Default for MinPriorityQueue<K, P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<K, P> MinPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd,
{
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of keys in the queue.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the keys in heap order, which is not sorted order. Takes `O(n)`.
    pub fn keys(&self) -> Vec<K> {
        self.nodes.iter().map(|node| node.key.clone()).collect()
    }

    /// Returns `true` if `key` is in the queue.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(key)
    }

    /// Returns the current priority of `key`, or `None` if it is not queued.
    pub fn priority<Q>(&self, key: &Q) -> Option<&P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &idx = self.indices.get(key)?;
        Some(&self.nodes[idx].priority)
    }

    /// Returns the key with the smallest priority without removing it.
    pub fn min(&self) -> Result<&K> {
        match self.nodes.first() {
            Some(node) => Ok(&node.key),
            None => {
                debug!("min called on an empty queue");
                Err(Error::Underflow)
            }
        }
    }

    /// Returns the root `(key, priority)` pair, or `None` if the queue is empty.
    pub fn peek_min(&self) -> Option<(&K, &P)> {
        self.nodes.first().map(|node| (&node.key, &node.priority))
    }

    /// Inserts `key`, or lowers its priority if it is already queued.
    ///
    /// Returns `true` if the queue was modified. An existing key is only
    /// updated when `priority` is strictly less than its current priority;
    /// an equal or higher priority leaves the queue untouched.
    pub fn set(&mut self, key: K, priority: P) -> bool {
        if let Some(&idx) = self.indices.get(&key) {
            if priority < self.nodes[idx].priority {
                self.nodes[idx].priority = priority;
                self.sift_up(idx);
                trace!(size = self.nodes.len(), "decreased priority");
                true
            } else {
                false
            }
        } else {
            let idx = self.nodes.len();
            self.indices.insert(key.clone(), idx);
            self.nodes.push(HeapNode { key, priority });
            self.sift_up(idx);
            trace!(size = self.nodes.len(), "inserted key");
            true
        }
    }

    /// Removes and returns the key with the smallest priority.
    pub fn remove_min(&mut self) -> Result<K> {
        if self.nodes.is_empty() {
            debug!("remove_min called on an empty queue");
            return Err(Error::Underflow);
        }

        // Moves the last node into the root slot.
        let min_node = self.nodes.swap_remove(0);
        self.indices.remove(&min_node.key);

        if !self.nodes.is_empty() {
            self.reindex(0);
            self.sift_down(0);
        }

        trace!(size = self.nodes.len(), "removed minimum");
        Ok(min_node.key)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx != 0 {
            let parent_idx = parent(idx);
            if self.nodes[idx].priority < self.nodes[parent_idx].priority {
                self.swap(idx, parent_idx);
                idx = parent_idx;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.nodes.len();
        loop {
            let (left_child, right_child) = children(idx);
            let mut smallest = idx;

            if left_child < len && self.nodes[left_child].priority < self.nodes[smallest].priority
            {
                smallest = left_child;
            }
            if right_child < len
                && self.nodes[right_child].priority < self.nodes[smallest].priority
            {
                smallest = right_child;
            }
            if smallest == idx {
                break;
            }
            self.swap(idx, smallest);
            idx = smallest;
        }
    }

    /// Swaps two slots and points both keys at their new slots.
    fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        self.reindex(i);
        self.reindex(j);
    }

    fn reindex(&mut self, idx: usize) {
        if let Some(slot) = self.indices.get_mut(&self.nodes[idx].key) {
            *slot = idx;
        }
    }
}

fn parent(idx: usize) -> usize {
    idx >> 1
}

fn children(idx: usize) -> (usize, usize) {
    (2 * idx, 2 * idx + 1)
}

impl<K, P> Extend<(K, P)> for MinPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd,
{
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.set(key, priority);
        }
    }
}

impl<K, P> FromIterator<(K, P)> for MinPriorityQueue<K, P>
where
    K: Eq + Hash + Clone,
    P: PartialOrd,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}
