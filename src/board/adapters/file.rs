//! File-backed key-value store.
//!
//! Each key maps to `<key>.json` inside the data directory. Writes go to a
//! temporary sibling, are flushed to disk with `sync_all` and only then
//! renamed into place, so a crash mid-write leaves the previous value intact.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::Write;
use std::sync::Mutex;

use crate::board::ports::{KeyValueStore, PersistenceError, PersistenceResult};

/// Durable key-value store rooted at a directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: Utf8PathBuf,
    dir: Dir,
    // Serializes the write-then-rename sequence between threads.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Opens the store, creating the directory when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Backend`] when the directory cannot be
    /// created or opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> PersistenceResult<Self> {
        let root = path.as_ref().to_owned();
        Dir::create_ambient_dir_all(&root, ambient_authority())
            .map_err(PersistenceError::backend)?;
        let dir =
            Dir::open_ambient_dir(&root, ambient_authority()).map_err(PersistenceError::backend)?;
        Ok(Self {
            root,
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Returns the directory backing the store.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

fn file_name(key: &str) -> PersistenceResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if !is_valid {
        return Err(PersistenceError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.json"))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let name = file_name(key)?;
        let staging = format!("{name}.tmp");
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut file = self
            .dir
            .create(&staging)
            .map_err(PersistenceError::backend)?;
        file.write_all(value.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(PersistenceError::backend)?;
        drop(file);
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(PersistenceError::backend)
    }
}
