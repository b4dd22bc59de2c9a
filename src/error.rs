use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid log line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read log input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
