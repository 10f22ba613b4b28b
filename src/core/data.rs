use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use super::error::{Result, SrtError};

/// Marker path meaning stdin or stdout on the command line
pub const STDIO_PATH: &str = "-";

pub fn load(path: &Path) -> Result<String> {
    log::debug!("reading subtitles from {path:#?}");
    std::fs::read_to_string(path).map_err(|source| SrtError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, text: &str) -> Result<()> {
    log::debug!("writing {0} bytes of subtitles to {path:#?}", text.len());
    std::fs::write(path, text).map_err(|source| SrtError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Where subtitle text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleSource {
    File(PathBuf),
    Stdin,
}

impl SubtitleSource {
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new(STDIO_PATH) {
            SubtitleSource::Stdin
        } else {
            SubtitleSource::File(path.to_path_buf())
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            SubtitleSource::File(path) => load(path),
            SubtitleSource::Stdin => {
                log::debug!("reading subtitles from stdin");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| SrtError::Io {
                        path: PathBuf::from(STDIO_PATH),
                        source,
                    })?;
                Ok(text)
            }
        }
    }

    /// The matching destination for writing the result back in place
    pub fn in_place(&self) -> SubtitleSink {
        match self {
            SubtitleSource::File(path) => SubtitleSink::File(path.clone()),
            SubtitleSource::Stdin => SubtitleSink::Stdout,
        }
    }
}

/// Where rendered subtitle text is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtitleSink {
    File(PathBuf),
    Stdout,
}

impl SubtitleSink {
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new(STDIO_PATH) {
            SubtitleSink::Stdout
        } else {
            SubtitleSink::File(path.to_path_buf())
        }
    }

    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            SubtitleSink::File(path) => save(path, text),
            SubtitleSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|source| SrtError::Io {
                        path: PathBuf::from(STDIO_PATH),
                        source,
                    })
            }
        }
    }
}
