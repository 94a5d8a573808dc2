use crate::geom::Point;
use crate::ids::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edge endpoint {node} is not part of the node universe ({node_count} nodes)")]
    UnknownNode { node: NodeId, node_count: usize },

    #[error("point {point} is not part of the node universe")]
    UnknownPoint { point: Point },
}

pub type Result<T> = std::result::Result<T, Error>;
