//! Disjoint-set forest over [`NodeId`]s.

use crate::error::{Error, Result};
use crate::ids::NodeId;

/// Union-find with path compression and union by size.
///
/// Union by size only changes which representative survives a merge, never the partition
/// itself, so Kruskal picks the same edges either way.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    fn check(&self, node: NodeId) -> Result<usize> {
        let ix = node.index();
        if ix < self.parent.len() {
            Ok(ix)
        } else {
            Err(Error::UnknownNode {
                node,
                node_count: self.parent.len(),
            })
        }
    }

    /// Representative of `node`'s set. Compresses the walked path.
    pub fn find(&mut self, node: NodeId) -> Result<NodeId> {
        let start = self.check(node)?;
        let mut root = start;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = start;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        Ok(NodeId::new(root))
    }

    /// Merges the sets of `a` and `b`. Returns `false` when they were already joined.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        let ra = self.find(a)?.index();
        let rb = self.find(b)?.index();
        if ra == rb {
            return Ok(false);
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.components -= 1;
        Ok(true)
    }

    pub fn connected(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}
