use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, parsing or writing SRT subtitles
#[derive(Error, Debug)]
pub enum SrtError {
    /// A timestamp did not look like `HH:MM:SS,mmm`, or does not fit in a millisecond count
    #[error("malformed timestamp: {text:?}")]
    MalformedTimestamp { text: String },

    /// A load or save against the file system failed
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SrtError>;
