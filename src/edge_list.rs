//! Per-vertex storage for outgoing edges.
//!
//! An [`EdgeList`] only ever grows.  Appends take a short write lock on the
//! list itself, never on the graph, so readers iterating over one vertex's
//! edges are not blocked by structural changes elsewhere in the graph and
//! are blocked only momentarily by appends to the same vertex.

use std::{iter::FusedIterator, sync::Arc};

use parking_lot::RwLock;

use crate::edge::Edge;

pub(crate) struct EdgeList<V> {
    edges: RwLock<Vec<Edge<V>>>,
}

impl<V> EdgeList<V> {
    pub fn new() -> Self {
        Self {
            edges: RwLock::new(Vec::new()),
        }
    }

    pub fn push(&self, edge: Edge<V>) {
        self.edges.write().push(edge);
    }

    pub fn len(&self) -> usize {
        self.edges.read().len()
    }

    pub fn get(&self, index: usize) -> Option<Edge<V>>
    where
        V: Clone,
    {
        self.edges.read().get(index).cloned()
    }
}

/// An iterator over the outgoing edges of one vertex, in insertion order.
///
/// The iterator covers the edges present when it was created.  Edges
/// appended afterwards by other threads are not yielded, so iteration
/// always terminates even while the list keeps growing.  No lock is held
/// between calls to `next`.
pub struct EdgeIter<V> {
    list: Arc<EdgeList<V>>,
    next: usize,
    end: usize,
}

impl<V> EdgeIter<V> {
    pub(crate) fn new(list: Arc<EdgeList<V>>) -> Self {
        let end = list.len();
        Self { list, next: 0, end }
    }
}

impl<V: Clone> Iterator for EdgeIter<V> {
    type Item = Edge<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let edge = self.list.get(self.next);
        debug_assert!(edge.is_some(), "edge list shrank during iteration");
        self.next += 1;
        edge
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<V: Clone> ExactSizeIterator for EdgeIter<V> {}

impl<V: Clone> FusedIterator for EdgeIter<V> {}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_iterates_in_insertion_order() {
        let list = Arc::new(EdgeList::new());
        list.push(Edge::new(0, 1));
        list.push(Edge::new(0, 2));
        list.push(Edge::new(0, 1));
        let targets: Vec<_> = EdgeIter::new(list).map(|e| *e.to()).collect();
        assert_eq!(targets, vec![1, 2, 1]);
    }

    #[test]
    fn test_append_during_iteration_is_not_observed() {
        let list = Arc::new(EdgeList::new());
        list.push(Edge::new(0, 1));
        list.push(Edge::new(0, 2));
        let mut iter = EdgeIter::new(list.clone());
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(Edge::new(0, 1)));
        list.push(Edge::new(0, 3));
        assert_eq!(iter.next(), Some(Edge::new(0, 2)));
        assert_eq!(iter.next(), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_concurrent_appends_while_iterating() {
        let list = Arc::new(EdgeList::new());
        for i in 0..100 {
            list.push(Edge::new(0, i));
        }
        let writer = {
            let list = list.clone();
            thread::spawn(move || {
                for i in 100..10_000 {
                    list.push(Edge::new(0, i));
                }
            })
        };
        for _ in 0..50 {
            let seen: Vec<_> = EdgeIter::new(list.clone()).collect();
            assert!(seen.len() >= 100);
            assert!(seen.iter().enumerate().all(|(i, e)| *e.to() == i));
        }
        writer.join().unwrap();
        assert_eq!(list.len(), 10_000);
    }
}
