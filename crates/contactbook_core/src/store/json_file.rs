//! Single-file JSON contact store.
//!
//! # Responsibility
//! - Persist the collection as one pretty-printed JSON object.
//! - Replace the file atomically so an interrupted save keeps the old copy.
//!
//! # Invariants
//! - Writes go through a temp file in the target directory, then rename.
//! - Emitted log events carry counts and durations only, never field values.

use super::{ContactStore, StoreError, StoreResult};
use crate::model::collection::ContactCollection;
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

const JSON_INDENT: &[u8] = b"    ";

/// Contact store backed by one JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Persistence {
            path: self.path.clone(),
            source,
        }
    }

    fn write_atomically(&self, collection: &ContactCollection) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| self.persistence_error(err))?;

        let tmp = NamedTempFile::new_in(dir).map_err(|err| self.persistence_error(err))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut writer,
                PrettyFormatter::with_indent(JSON_INDENT),
            );
            collection
                .serialize(&mut serializer)
                .map_err(|err| self.persistence_error(err.into()))?;
            writer.flush().map_err(|err| self.persistence_error(err))?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|err| self.persistence_error(err))?;
        // Replacing by rename would otherwise leave the file at the temp mode (0600).
        match fs::metadata(&self.path) {
            Ok(existing) => tmp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|err| self.persistence_error(err))?,
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(self.persistence_error(err)),
        }
        tmp.persist(&self.path)
            .map_err(|err| self.persistence_error(err.error))?;
        Ok(())
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StoreResult<ContactCollection> {
        let started_at = Instant::now();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok source=missing count=0 duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(ContactCollection::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=store_read_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(self.persistence_error(err));
            }
        };

        match serde_json::from_slice::<ContactCollection>(&bytes) {
            Ok(collection) => {
                info!(
                    "event=store_load module=store status=ok source=file count={} duration_ms={}",
                    collection.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(collection)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error error_code=store_corrupt duration_ms={} line={} column={}",
                    started_at.elapsed().as_millis(),
                    err.line(),
                    err.column()
                );
                Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source: err,
                })
            }
        }
    }

    fn save(&self, collection: &ContactCollection) -> StoreResult<()> {
        let started_at = Instant::now();

        match self.write_atomically(collection) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok count={} duration_ms={}",
                    collection.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error error_code=store_write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
