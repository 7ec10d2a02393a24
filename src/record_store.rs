use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::error::RecordStoreError;

pub const FIELD_POST_ID: &str = "post_id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_POST_DATE: &str = "post_date";
pub const FIELD_IS_PUBLISHED: &str = "is_published";

/// One row of the record store, keyed by header name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Record {
        Record {
            fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|v| v.as_str())
    }
}

/// Lazy sequence of records. Rows are not validated; a row shorter than the
/// header simply lacks the trailing fields.
pub struct Records<R: io::Read> {
    source: PathBuf,
    headers: StringRecord,
    rows: StringRecordsIntoIter<R>,
}

impl<R: io::Read> Iterator for Records<R> {
    type Item = Result<Record, RecordStoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let item = match row {
            Ok(row) => Ok(Record::from_pairs(self.headers.iter().zip(row.iter()))),
            Err(source) => Err(RecordStoreError::Read {
                path: self.source.clone(),
                source,
            }),
        };
        Some(item)
    }
}

pub struct RecordStore;

impl RecordStore {
    pub fn open(path: &Path) -> Result<Records<File>, RecordStoreError> {
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| RecordStoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::records(reader, path)
    }

    pub fn from_reader<R: io::Read>(rdr: R, label: &str) -> Result<Records<R>, RecordStoreError> {
        let reader = ReaderBuilder::new().flexible(true).from_reader(rdr);
        Self::records(reader, Path::new(label))
    }

    fn records<R: io::Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Records<R>, RecordStoreError> {
        let headers = reader.headers()
            .map_err(|source| RecordStoreError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .clone();

        Ok(Records {
            source: path.to_path_buf(),
            headers,
            rows: reader.into_records(),
        })
    }
}
