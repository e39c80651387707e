//! File-based backend: one JSON document per storage key.

use std::io::ErrorKind;
use std::path::PathBuf;

use weakspot_core::error::BackendError;
use weakspot_core::status::StatusBackend;

/// Persists each storage key as `<dir>/<key>.json`.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StatusBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<(), BackendError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), payload)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), BackendError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StatusStore;
    use weakspot_core::id::ItemId;
    use weakspot_core::status::Status;

    #[test]
    fn read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.read("weakspot_mastered").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("state"));
        backend.write("k", "[\"a-0-0\"]").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("[\"a-0-0\"]"));
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("k", "[]").unwrap();
        backend.delete("k").unwrap();
        backend.delete("k").unwrap();
        assert!(backend.read("k").unwrap().is_none());
    }

    #[test]
    fn store_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id: ItemId = "D1-LESSON-001-0-2".parse().unwrap();

        let mut store = StatusStore::open(Box::new(FileBackend::new(dir.path())));
        store.mark_mastered(&id);
        assert_eq!(store.persist_failures(), 0);
        drop(store);

        let reopened = StatusStore::open(Box::new(FileBackend::new(dir.path())));
        assert_eq!(reopened.status(&id), Status::Mastered);
    }
}
