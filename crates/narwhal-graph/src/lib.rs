#![forbid(unsafe_code)]

//! Visibility graphs and minimum spanning forests over 2D point sets.
//!
//! The pipeline is: build a [`NodeSet`] from the input points, collect candidate edges with
//! [`visibility_edges`] (pairs whose connecting segment is not blocked by an obstacle), then
//! select a [`Forest`] with [`minimum_spanning_forest`]. `narwhal` lays the result out.

pub mod edge;
pub mod error;
pub mod geom;
pub mod ids;
pub mod mst;
pub mod union_find;
pub mod visibility;

pub use edge::Edge;
pub use error::{Error, Result};
pub use geom::{Contact, Orientation, Point, Segment, orientation};
pub use ids::{NodeId, NodeSet};
pub use mst::{Forest, minimum_spanning_forest};
pub use union_find::UnionFind;
pub use visibility::{VisibilityChecker, candidate_edges, visibility_edges};
