//! Value-or-`@file` flag indirection.
//!
//! A flag value starting with `@` names a local file whose contents replace the
//! value. Anything else is used as given.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving a flag value.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a flag value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource<'a> {
    Literal(&'a str),
    File(&'a Path),
}

impl<'a> ValueSource<'a> {
    /// Classify a raw flag value.
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix('@') {
            Some(path) => ValueSource::File(Path::new(path)),
            None => ValueSource::Literal(raw),
        }
    }

    /// Load the effective value. File contents are returned verbatim.
    pub fn load(&self) -> Result<String, ValueError> {
        match self {
            ValueSource::Literal(value) => Ok((*value).to_string()),
            ValueSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ValueError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

/// Resolve a raw flag value to its effective value.
pub fn resolve_value(raw: &str) -> Result<String, ValueError> {
    ValueSource::parse(raw).load()
}
