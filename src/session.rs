use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::error::Result;

/// Key the token is stored under in the session file.
pub const SESSION_TOKEN_KEY: &str = "admin_token";

/// Holder for the single bearer token slot of this client.
///
/// Clones share the same slot. A file-backed store survives process
/// restarts; a memory store lives as long as its last clone.
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: Option<PathBuf>,
    token: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Inner {
                path: None,
                token: RwLock::new(None),
            }),
        }
    }

    /// Opens the store at `path`, loading any previously persisted token.
    /// A missing file means no session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let token = read_entries(&path)?
            .get(SESSION_TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            inner: Arc::new(Inner {
                path: Some(path),
                token: RwLock::new(token),
            }),
        })
    }

    pub fn get(&self) -> Option<String> {
        self.inner
            .token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    pub fn set(&self, token: &str) -> Result<()> {
        if let Some(path) = &self.inner.path {
            let mut entries = read_entries(path)?;
            entries.insert(SESSION_TOKEN_KEY.to_string(), Value::String(token.to_string()));
            write_entries(path, &entries)?;
        }
        *self.inner.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        tracing::debug!("Session token stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        *self.inner.token.write().unwrap_or_else(|e| e.into_inner()) = None;
        if let Some(path) = &self.inner.path {
            let mut entries = read_entries(path)?;
            if entries.remove(SESSION_TOKEN_KEY).is_some() {
                write_entries(path, &entries)?;
            }
        }
        tracing::debug!("Session token cleared");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.inner.path.as_deref()
    }
}

/// Whole session file. Keys other than the token are carried through as-is,
/// whatever their type.
fn read_entries(path: &Path) -> Result<Map<String, Value>> {
    match fs::read_to_string(path) {
        Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
        Err(e) => Err(e.into()),
    }
}

fn write_entries(path: &Path, entries: &Map<String, Value>) -> Result<()> {
    let raw = serde_json::to_string_pretty(entries)?;
    fs::write(path, raw)?;
    Ok(())
}
