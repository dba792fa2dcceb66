use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("failed to read input {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed literal list: {0}")]
    MalformedBody(String),

    #[error("malformed header: {0}")]
    MalformedHeader(String),
}

pub type Result<T> = std::result::Result<T, EmbedError>;
