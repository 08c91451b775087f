use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] crafto_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Could not read image {path}: {source}")]
    ImageRead { path: PathBuf, source: io::Error },
    #[error("Not signed in")]
    NotAuthenticated,
    #[error("Fetching quotes failed after {loaded} quotes")]
    FeedFetch { loaded: usize },
}
