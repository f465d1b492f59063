//! Local persistence helpers.
//!
//! Two scopes, matching what they hold:
//! - **local** — survives the browser session. Holds the cached auth profile
//!   so the app can hydrate optimistically before the server reconciles.
//!   Web: `localStorage`. Native: a JSON file per key under the project
//!   config directory.
//! - **session** — page-session lifetime. Holds in-flight wizard drafts so a
//!   refresh mid-flow does not discard earlier answers. Web:
//!   `sessionStorage`. Native: an in-memory map (same lifetime semantics).
//!
//! Values are JSON via serde. Callers treat persistence as best-effort: a
//! failed write degrades the experience (draft lost on refresh) but never
//! blocks the flow.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage backend is not reachable (no window, storage disabled).
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Local,
    Session,
}

pub fn local_read<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    read(Scope::Local, key)
}

pub fn local_write<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    write(Scope::Local, key, value)
}

pub fn local_remove(key: &str) -> Result<(), StorageError> {
    remove(Scope::Local, key)
}

pub fn session_read<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    read(Scope::Session, key)
}

pub fn session_write<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    write(Scope::Session, key, value)
}

pub fn session_remove(key: &str) -> Result<(), StorageError> {
    remove(Scope::Session, key)
}

fn read<T: DeserializeOwned>(scope: Scope, key: &str) -> Result<Option<T>, StorageError> {
    match raw_get(scope, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn write<T: Serialize>(scope: Scope, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    raw_set(scope, key, &raw)
}

fn remove(scope: Scope, key: &str) -> Result<(), StorageError> {
    raw_remove(scope, key)
}

// ---------------------------------------------------------------------------
// web backend
// ---------------------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
fn browser_store(scope: Scope) -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    let store = match scope {
        Scope::Local => window.local_storage(),
        Scope::Session => window.session_storage(),
    };
    store
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn raw_get(scope: Scope, key: &str) -> Result<Option<String>, StorageError> {
    browser_store(scope)?
        .get_item(key)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn raw_set(scope: Scope, key: &str, value: &str) -> Result<(), StorageError> {
    browser_store(scope)?
        .set_item(key, value)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn raw_remove(scope: Scope, key: &str) -> Result<(), StorageError> {
    browser_store(scope)?
        .remove_item(key)
        .map_err(|_| StorageError::Unavailable)
}

// ---------------------------------------------------------------------------
// native backend
// ---------------------------------------------------------------------------

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::StorageError;

    // Session scope has page lifetime on the web; in-memory matches that.
    pub(super) static SESSION: Lazy<Mutex<HashMap<String, String>>> =
        Lazy::new(|| Mutex::new(HashMap::new()));

    pub(super) fn key_path(key: &str) -> Result<PathBuf, StorageError> {
        let dirs = directories::ProjectDirs::from("is", "verki", "verki")
            .ok_or(StorageError::Unavailable)?;
        let dir = dirs.config_dir().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        Ok(dir.join(format!("{file}.json")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_get(scope: Scope, key: &str) -> Result<Option<String>, StorageError> {
    match scope {
        Scope::Local => {
            let path = native::key_path(key)?;
            match std::fs::read_to_string(path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }
        Scope::Session => Ok(native::SESSION
            .lock()
            .map_err(|_| StorageError::Unavailable)?
            .get(key)
            .cloned()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_set(scope: Scope, key: &str, value: &str) -> Result<(), StorageError> {
    match scope {
        Scope::Local => {
            let path = native::key_path(key)?;
            std::fs::write(path, value)?;
            Ok(())
        }
        Scope::Session => {
            native::SESSION
                .lock()
                .map_err(|_| StorageError::Unavailable)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn raw_remove(scope: Scope, key: &str) -> Result<(), StorageError> {
    match scope {
        Scope::Local => {
            let path = native::key_path(key)?;
            match std::fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            }
        }
        Scope::Session => {
            native::SESSION
                .lock()
                .map_err(|_| StorageError::Unavailable)?
                .remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn session_round_trip() {
        let value = Sample {
            name: "pipes".into(),
            count: 3,
        };
        session_write("test.session.roundtrip", &value).unwrap();
        let loaded: Option<Sample> = session_read("test.session.roundtrip").unwrap();
        assert_eq!(loaded, Some(value));
        session_remove("test.session.roundtrip").unwrap();
        let gone: Option<Sample> = session_read("test.session.roundtrip").unwrap();
        assert_eq!(gone, None);
    }

    #[test]
    fn session_read_of_missing_key_is_none() {
        let missing: Option<Sample> = session_read("test.session.never-written").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn session_remove_of_missing_key_is_ok() {
        session_remove("test.session.never-written").unwrap();
    }
}
