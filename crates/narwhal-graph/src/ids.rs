//! Node identity.
//!
//! Every distinct [`Point`] gets exactly one [`NodeId`], assigned in first-seen order. Graph
//! algorithms only ever deal in ids; geometry is looked up through the [`NodeSet`].

use crate::error::{Error, Result};
use crate::geom::Point;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The node universe: an insertion-ordered, deduplicated set of points.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    points: IndexSet<Point, FxBuildHasher>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the universe from `points`, keeping the first occurrence of duplicates.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut set = Self::new();
        for p in points {
            set.insert(p.into());
        }
        set
    }

    /// Returns the id of `point`, adding it when it is new.
    pub fn insert(&mut self, point: Point) -> NodeId {
        let (ix, _) = self.points.insert_full(point);
        NodeId(ix)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.points.len()
    }

    pub fn id_of(&self, point: &Point) -> Option<NodeId> {
        self.points.get_index_of(point).map(NodeId)
    }

    pub fn point(&self, id: NodeId) -> Option<Point> {
        self.points.get_index(id.0).copied()
    }

    /// Like [`NodeSet::id_of`], but a missing point is an error.
    pub fn require_point(&self, point: &Point) -> Result<NodeId> {
        self.id_of(point)
            .ok_or(Error::UnknownPoint { point: *point })
    }

    /// Like [`NodeSet::point`], but a missing id is an error.
    pub fn require(&self, id: NodeId) -> Result<Point> {
        self.point(id).ok_or(Error::UnknownNode {
            node: id,
            node_count: self.len(),
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.points.len()).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.points.iter().enumerate().map(|(ix, p)| (NodeId(ix), *p))
    }
}
