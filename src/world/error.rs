use thiserror::Error;

/// Errors raised by graph construction and traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A room with this name is already registered.
    #[error("duplicate room: {0}")]
    DuplicateNode(String),

    /// No room with this name exists in the graph.
    #[error("unknown room: {0}")]
    UnknownNode(String),
}

/// Errors that can arise while loading a world file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file parsed but its contents are not a usable world.
    #[error("invalid world: {0}")]
    Invalid(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
