//! File-backed key-value store.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::store::{KeyValueStore, StoreError};

/// Key-value store keeping one `<key>.json` file per key under a directory.
///
/// Writes go to a temporary sibling file that is renamed over the target, so readers never
/// observe a partially written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();

        fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');

        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(key, path = %path.display(), bytes = value.len(), "stored value");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn values_survive_reopening() -> TestResult {
        let dir = tempfile::tempdir()?;

        FileStore::open(dir.path())?.set("damageReports", "[]")?;

        let reopened = FileStore::open(dir.path())?;

        assert_eq!(reopened.get("damageReports")?.as_deref(), Some("[]"));
        assert!(dir.path().join("damageReports.json").exists());

        Ok(())
    }

    #[test]
    fn absent_file_is_none() -> TestResult {
        let dir = tempfile::tempdir()?;

        assert_eq!(FileStore::open(dir.path())?.get("products")?, None);

        Ok(())
    }

    #[test]
    fn no_temporary_file_is_left_behind() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;

        store.set("settings", "{}")?;

        let names: Vec<String> = fs::read_dir(dir.path())?
            .map(|entry| entry.map(|entry| entry.file_name().to_string_lossy().into_owned()))
            .collect::<Result<_, _>>()?;

        assert_eq!(names, ["settings.json"]);

        Ok(())
    }

    #[test]
    fn rejects_path_like_keys() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = FileStore::open(dir.path())?;

        assert!(matches!(
            store.set("../escape", "{}"),
            Err(StoreError::InvalidKey(_))
        ));

        Ok(())
    }

    #[test]
    fn creates_missing_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("nested").join("data");

        let store = FileStore::open(&nested)?;

        assert!(store.dir().is_dir());

        Ok(())
    }
}
