use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Writes rendered pages into the output directory, one file per slug.
pub struct PageWriter {
    output_dir: PathBuf,
}

impl PageWriter {
    /// Creates the output directory if needed.
    pub fn new(output_dir: &Path) -> Result<PageWriter, GenerateError> {
        fs::create_dir_all(output_dir).map_err(|source| GenerateError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        Ok(PageWriter {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Existing files are overwritten.
    pub fn write(&self, file_name: &str, page: &str) -> Result<PathBuf, GenerateError> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, page).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
