use std::io;
use std::path::PathBuf;

use numguess_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read statistics file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("statistics file {path} is malformed")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("statistics file {path} is inconsistent")]
    Invalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
    #[error("failed to write statistics file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode statistics")]
    Encode(#[from] serde_json::Error),
}
