//! Rooting an undirected forest.
//!
//! Each connected component becomes one tree. The preferred root (when given) roots the first
//! tree; every other component is rooted at its lowest node id. Children are discovered
//! breadth-first, in adjacency order, and adjacency follows the order of the input edges.

use crate::error::{Error, Result};
use narwhal_graph::{Edge, NodeId, NodeSet};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RootedForest {
    children: Vec<Vec<NodeId>>,
    parent: Vec<Option<NodeId>>,
    roots: Vec<NodeId>,
}

impl RootedForest {
    /// Directs `edges` away from the roots.
    ///
    /// A preferred root outside `nodes` is treated as absent. Endpoints outside `nodes` fail
    /// with a lookup error, and edge sets that are not a forest (cycles, repeated edges, self
    /// loops) with [`Error::NotAForest`].
    pub fn build(nodes: &NodeSet, edges: &[Edge], preferred_root: Option<NodeId>) -> Result<Self> {
        let n = nodes.len();
        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for e in edges {
            nodes.require(e.source)?;
            nodes.require(e.target)?;
            adjacency[e.source.index()].push(e.target);
            adjacency[e.target.index()].push(e.source);
        }

        let mut forest = Self {
            children: vec![Vec::new(); n],
            parent: vec![None; n],
            roots: Vec::new(),
        };
        let mut visited = vec![false; n];

        let preferred = preferred_root.filter(|r| nodes.contains(*r));
        for root in preferred.into_iter().chain(nodes.ids()) {
            if visited[root.index()] {
                continue;
            }
            forest.roots.push(root);
            visited[root.index()] = true;

            let mut queue = VecDeque::from([root]);
            while let Some(u) = queue.pop_front() {
                for &v in &adjacency[u.index()] {
                    if visited[v.index()] {
                        continue;
                    }
                    visited[v.index()] = true;
                    forest.children[u.index()].push(v);
                    forest.parent[v.index()] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        if edges.len() + forest.roots.len() != n {
            return Err(Error::NotAForest {
                nodes: n,
                edges: edges.len(),
                trees: forest.roots.len(),
            });
        }

        tracing::debug!(
            nodes = n,
            trees = forest.roots.len(),
            preferred_root = ?preferred,
            "forest rooted"
        );
        Ok(forest)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent.get(node.index()).copied().flatten()
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.children(node).is_empty()
    }

    /// Subtree of `root` in pre-order (parent before children, children in order).
    pub fn pre_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            out.push(u);
            stack.extend(self.children(u).iter().rev());
        }
        out
    }

    /// Subtree of `root` in post-order (children in order, then the parent).
    pub fn post_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![(root, false)];
        while let Some((u, expanded)) = stack.pop() {
            if expanded {
                out.push(u);
                continue;
            }
            stack.push((u, true));
            stack.extend(self.children(u).iter().rev().map(|&c| (c, false)));
        }
        out
    }

    /// Subtree of `root` grouped by depth relative to `root`; `levels[0] == [root]`.
    pub fn levels(&self, root: NodeId) -> Vec<Vec<NodeId>> {
        let mut levels: Vec<Vec<NodeId>> = Vec::new();
        let mut current = vec![root];
        while !current.is_empty() {
            let next: Vec<NodeId> = current
                .iter()
                .flat_map(|&u| self.children(u).iter().copied())
                .collect();
            levels.push(current);
            current = next;
        }
        levels
    }

    /// Depth of every node in its own tree (roots are 0), indexed by node id.
    pub fn depths(&self) -> Vec<usize> {
        let mut depths = vec![0; self.node_count()];
        for &root in &self.roots {
            for u in self.pre_order(root) {
                let d = self.parent(u).map_or(0, |p| depths[p.index()] + 1);
                depths[u.index()] = d;
            }
        }
        depths
    }
}
