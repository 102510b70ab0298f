//! Atomic JSON file operations over a flat directory.
//!
//! One file per key. Writes go through a temporary file, fsync, and an
//! atomic rename under an advisory lock, so a reader never observes a
//! partially written record and concurrent writers for the same key resolve
//! last-write-wins.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use noor_core::error::{NoorError, Result};

/// A flat directory of JSON files, one per storage key.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Loads and deserializes `file_name`.
    ///
    /// Returns `Ok(None)` when the file does not exist or is empty. A file
    /// that exists but fails to parse is a `Serialization` error; callers
    /// on the read path absorb it into a default record.
    pub async fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>> {
        let path = self.path_for(file_name);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content).map_err(|err| NoorError::Serialization {
            message: format!("{}: {}", path.display(), err),
        })?;
        Ok(Some(value))
    }

    /// Serializes `value` and writes it to `file_name` atomically.
    pub async fn save<T: Serialize>(&self, file_name: &str, value: &T) -> Result<()> {
        let path = self.path_for(file_name);
        let json = serde_json::to_string_pretty(value)?;

        tokio::task::spawn_blocking(move || write_atomic(&path, &json))
            .await
            .map_err(|err| NoorError::internal(format!("storage task panicked: {}", err)))?
    }

    /// Removes `file_name`. Not an error if it does not exist.
    pub async fn delete(&self, file_name: &str) -> Result<()> {
        let path = self.path_for(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| NoorError::storage(format!("{}: path has no parent", path.display())))?;
    fs::create_dir_all(parent)?;

    let _lock = FileLock::acquire(path)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| NoorError::storage(format!("{}: path has no file name", path.display())))?;
    let tmp_path = parent.join(format!(".{}.tmp", file_name.to_string_lossy()));

    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    drop(tmp_file);

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Advisory lock guard, released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|err| NoorError::storage(format!("failed to acquire lock: {}", err)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRecord {
        name: String,
        count: u32,
    }

    fn test_storage() -> (JsonDirStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonDirStorage::new(temp_dir.path().join("records"));
        (storage, temp_dir)
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (storage, _temp_dir) = test_storage();
        let record = TestRecord {
            name: "test".to_string(),
            count: 42,
        };

        storage.save("r.json", &record).await.unwrap();
        let loaded: TestRecord = storage.load("r.json").await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let (storage, _temp_dir) = test_storage();
        let loaded: Option<TestRecord> = storage.load("absent.json").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let (storage, _temp_dir) = test_storage();
        fs::create_dir_all(storage.dir()).unwrap();
        fs::write(storage.dir().join("bad.json"), "{not json").unwrap();

        let err = storage.load::<TestRecord>("bad.json").await.unwrap_err();
        assert!(matches!(err, NoorError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (storage, _temp_dir) = test_storage();
        let record = TestRecord {
            name: "gone".to_string(),
            count: 1,
        };
        storage.save("r.json", &record).await.unwrap();

        storage.delete("r.json").await.unwrap();
        storage.delete("r.json").await.unwrap();
        let loaded: Option<TestRecord> = storage.load("r.json").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_no_temp_or_lock_files_left_behind() {
        let (storage, _temp_dir) = test_storage();
        let record = TestRecord {
            name: "clean".to_string(),
            count: 7,
        };
        storage.save("r.json", &record).await.unwrap();

        let names: Vec<String> = fs::read_dir(storage.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["r.json"]);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_whole_value() {
        let (storage, _temp_dir) = test_storage();
        storage
            .save(
                "r.json",
                &TestRecord {
                    name: "first".to_string(),
                    count: 1,
                },
            )
            .await
            .unwrap();
        storage
            .save(
                "r.json",
                &TestRecord {
                    name: "second".to_string(),
                    count: 2,
                },
            )
            .await
            .unwrap();

        let loaded: TestRecord = storage.load("r.json").await.unwrap().unwrap();
        assert_eq!(loaded.name, "second");
        assert_eq!(loaded.count, 2);
    }
}
