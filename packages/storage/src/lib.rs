//! Key-value slot storage used by the job manager.
//!
//! Goal:
//! - Browser local storage on the web target
//! - On-disk storage for desktop builds and local dev
//! - In-memory storage for tests
//!
//! Every backend stores UTF-8 strings under short keys. Access is synchronous;
//! callers live on a single UI thread.

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

mod backends;

use backends::{FilesystemBackend, MemoryBackend, SlotBackend};

#[cfg(target_arch = "wasm32")]
use backends::BrowserBackend;

/// Directory used by the filesystem backend when none is configured.
pub const DEFAULT_FS_ROOT: &str = "./data/job-man";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage config: {0}")]
    InvalidConfig(String),

    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("browser storage error: {0}")]
    Browser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Browser,
    Filesystem,
    Memory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Browser => "browser",
            StorageKind::Filesystem => "filesystem",
            StorageKind::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendConfig {
    Browser,
    Filesystem { root: PathBuf },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackendConfig,
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: StorageBackendConfig::Memory,
        }
    }

    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackendConfig::Filesystem { root: root.into() },
        }
    }

    pub fn browser() -> Self {
        Self {
            backend: StorageBackendConfig::Browser,
        }
    }

    /// Build a config from environment variables.
    ///
    /// Selection rules:
    /// - If `STORAGE_BACKEND` is set: use it (`filesystem`, `memory`)
    /// - Otherwise: default to filesystem (`./data/job-man`)
    ///
    /// Filesystem env vars:
    /// - `STORAGE_FS_ROOT` (default: `./data/job-man`)
    pub fn from_env() -> Result<Self, StorageError> {
        let backend = std::env::var("STORAGE_BACKEND").ok().and_then(non_empty);

        match backend.as_deref() {
            Some("filesystem") | Some("fs") | None => {
                let root = std::env::var("STORAGE_FS_ROOT")
                    .ok()
                    .and_then(non_empty)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_FS_ROOT));
                Ok(Self::filesystem(root))
            }
            Some("memory") | Some("mem") => Ok(Self::memory()),
            Some(other) => Err(StorageError::InvalidConfig(format!(
                "unsupported STORAGE_BACKEND={other} (expected filesystem|memory)"
            ))),
        }
    }

    /// The natural backend for the compilation target: local storage in the
    /// browser, the environment-driven config everywhere else.
    pub fn platform_default() -> Result<Self, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            Ok(Self::browser())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_env()
        }
    }
}

/// Handle to a slot store. Clones share the same backend.
#[derive(Clone)]
pub struct Storage {
    kind: StorageKind,
    backend: Rc<dyn SlotBackend>,
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").field("kind", &self.kind).finish()
    }
}

impl PartialEq for Storage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl Storage {
    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn new(cfg: StorageConfig) -> Result<Self, StorageError> {
        let (kind, backend) = match cfg.backend {
            StorageBackendConfig::Filesystem { root } => (
                StorageKind::Filesystem,
                Rc::new(FilesystemBackend::new(root)?) as Rc<dyn SlotBackend>,
            ),
            StorageBackendConfig::Memory => (
                StorageKind::Memory,
                Rc::new(MemoryBackend::default()) as Rc<dyn SlotBackend>,
            ),
            StorageBackendConfig::Browser => browser_backend()?,
        };

        tracing::debug!("Opened {} storage", kind);
        Ok(Self { kind, backend })
    }

    /// In-memory storage; never fails.
    pub fn in_memory() -> Self {
        Self {
            kind: StorageKind::Memory,
            backend: Rc::new(MemoryBackend::default()),
        }
    }

    /// Open the platform default backend, falling back to memory when it is
    /// unavailable so the application still runs without durability.
    pub fn open_default() -> Self {
        match StorageConfig::platform_default().and_then(Self::new) {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("Falling back to in-memory storage: {}", e);
                Self::in_memory()
            }
        }
    }

    fn check_key(key: &str) -> Result<(), StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    pub fn get_string(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::check_key(key)?;
        self.backend.get(key)
    }

    pub fn put_string(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::check_key(key)?;
        self.backend.set(key, value)
    }

    /// Remove a slot. Removing an absent slot is not an error.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        Self::check_key(key)?;
        self.backend.remove(key)
    }

    pub fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.put_string(key, &json)
    }

    /// Read and decode a slot; `Ok(None)` when the slot is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_string(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_backend() -> Result<(StorageKind, Rc<dyn SlotBackend>), StorageError> {
    Ok((StorageKind::Browser, Rc::new(BrowserBackend::local()?) as _))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_backend() -> Result<(StorageKind, Rc<dyn SlotBackend>), StorageError> {
    Err(StorageError::InvalidConfig(
        "browser storage is only available on wasm32".to_string(),
    ))
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
