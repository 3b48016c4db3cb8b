use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce the visitor list. Either way no report can be built.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse visitors from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
