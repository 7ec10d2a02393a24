use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The record store could not be opened or read. Always fatal for a run.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("Error opening record store {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Error reading record store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    RecordStore(#[from] RecordStoreError),

    #[error("Error loading page template {}: {source}", .path.display())]
    TemplateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing page template: {0}")]
    Template(String),

    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid fix-up for slug {slug}: the searched text is empty or part of its replacement")]
    Fixup { slug: String },
}
