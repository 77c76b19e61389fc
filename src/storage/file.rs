//! File-backed key-value store
//!
//! Each key is one `<key>.json` file holding the value and its expiry.
//! Writes go to a temporary file that is renamed over the old one.

use super::{KeyValueStore, StorageError};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    expires_at: DateTime<Utc>,
    value: String,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let Ok(envelope) = serde_json::from_str::<Envelope>(&contents) else {
            debug!(path = %path.display(), "unreadable envelope treated as empty");
            return Ok(None);
        };
        if envelope.expires_at <= Utc::now() {
            debug!(key, "entry expired");
            remove_if_present(&path)?;
            return Ok(None);
        }
        Ok(Some(envelope.value))
    }

    fn set(&mut self, key: &str, value: &str, ttl: TimeDelta) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let envelope = Envelope {
            expires_at: Utc::now() + ttl,
            value: value.to_string(),
        };
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&envelope)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        remove_if_present(&self.path_for(key))?;
        Ok(())
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
