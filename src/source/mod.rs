//! Input acquisition
//!
//! Puzzle text comes from a file or from standard input. Either way it is read
//! fully into memory before parsing starts.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::DialError;

/// Where puzzle text is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`
    Stdin,
    /// A file on disk
    Path(PathBuf),
}

impl InputSource {
    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, DialError> {
        match self {
            InputSource::Stdin => read_from(io::stdin().lock(), self),
            InputSource::Path(path) => {
                let file = File::open(path).map_err(|source| DialError::Io {
                    origin: self.to_string(),
                    source,
                })?;
                read_from(file, self)
            }
        }
    }
}

impl From<PathBuf> for InputSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::Path(path)
        }
    }
}

impl From<&Path> for InputSource {
    fn from(path: &Path) -> Self {
        InputSource::from(path.to_path_buf())
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read all text from an arbitrary reader, naming it `origin` in errors.
pub fn read_from<R: Read>(mut reader: R, origin: impl fmt::Display) -> Result<String, DialError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| DialError::Io {
            origin: origin.to_string(),
            source,
        })?;
    debug!(%origin, bytes = contents.len(), "read puzzle input");
    Ok(contents)
}
