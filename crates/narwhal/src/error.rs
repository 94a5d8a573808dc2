#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] narwhal_graph::Error),

    #[error("edges do not form a forest: {edges} edges over {nodes} nodes in {trees} trees")]
    NotAForest {
        nodes: usize,
        edges: usize,
        trees: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
