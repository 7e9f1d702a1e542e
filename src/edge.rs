use std::{fmt::Debug, hash::Hash};

use derivative::Derivative;

/// A directed edge between two vertices.  Edges carry no identity beyond
/// their endpoints: two edges are equal exactly when both ends are equal.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Copy(bound = "V: Copy"),
    Debug(bound = "V: Debug"),
    Hash(bound = "V: Hash"),
    PartialEq(bound = "V: PartialEq"),
    Eq(bound = "V: Eq"),
    Ord(bound = "V: Ord"),
    PartialOrd(bound = "V: PartialOrd")
)]
pub struct Edge<V> {
    from: V,
    to: V,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }

    /// The vertex this edge leaves.
    pub fn from(&self) -> &V {
        &self.from
    }

    /// The vertex this edge enters.
    pub fn to(&self) -> &V {
        &self.to
    }

    pub fn ends(&self) -> (&V, &V) {
        (&self.from, &self.to)
    }

    pub fn into_ends(self) -> (V, V) {
        (self.from, self.to)
    }

    /// Returns the same connection pointing the other way.
    pub fn reversed(&self) -> Self
    where
        V: Clone,
    {
        Self::new(self.to.clone(), self.from.clone())
    }

    pub fn into_reversed(self) -> Self {
        Self::new(self.to, self.from)
    }

    /// Returns true if the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool
    where
        V: Eq,
    {
        self.from == self.to
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((from, to): (V, V)) -> Self {
        Self::new(from, to)
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(edge: Edge<V>) -> Self {
        edge.into_ends()
    }
}
