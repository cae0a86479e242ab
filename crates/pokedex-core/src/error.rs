/// Failures talking to the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing query")]
    MissingQuery,

    #[error("Not found (HTTP {status})")]
    NotFound { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    #[error("Species index unavailable: {0}")]
    IndexUnavailable(#[source] CatalogError),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
