use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::ChatMessage,
};

pub const STORAGE_KEY: &str = "vnr-chat-history";
pub const HISTORY_VERSION: u32 = 1;

/// String key/value storage scoped to one client, in the manner of browser
/// local storage.
pub trait HistoryStore: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

#[derive(Default)]
pub struct MemoryHistoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| AppError::InternalError("history store lock poisoned".to_string()))
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside `dir`.
pub struct FileHistoryStore {
    dir: PathBuf,
}

impl FileHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl HistoryStore for FileHistoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedHistory {
    version: u32,
    saved_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

/// Reads and writes the conversation blob under [`STORAGE_KEY`].
#[derive(Clone)]
pub struct HistoryRepository {
    store: Arc<dyn HistoryStore>,
    key: String,
}

impl HistoryRepository {
    pub fn new(store: Arc<dyn HistoryStore>) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(Arc::new(FileHistoryStore::new(dir.as_ref())))
    }

    /// Stored messages, or an empty list when nothing usable is stored.
    /// Unversioned arrays are accepted as-is; unknown versions are dropped.
    pub fn load(&self) -> AppResult<Vec<ChatMessage>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::error!("Error loading chat history: {}", err);
                return Ok(Vec::new());
            }
        };

        let messages = if value.is_array() {
            serde_json::from_value::<Vec<ChatMessage>>(value)
        } else {
            match value.get("version").and_then(|v| v.as_u64()) {
                Some(v) if v == u64::from(HISTORY_VERSION) => {
                    serde_json::from_value::<PersistedHistory>(value).map(|h| h.messages)
                }
                other => {
                    log::warn!("Discarding chat history with unsupported version {:?}", other);
                    return Ok(Vec::new());
                }
            }
        };

        Ok(messages.unwrap_or_else(|err| {
            log::error!("Error loading chat history: {}", err);
            Vec::new()
        }))
    }

    /// Overwrites the stored blob with `messages`.
    pub fn save(&self, messages: &[ChatMessage]) -> AppResult<()> {
        let blob = PersistedHistory {
            version: HISTORY_VERSION,
            saved_at: Utc::now(),
            messages: messages.to_vec(),
        };
        self.store.set_item(&self.key, &serde_json::to_string(&blob)?)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove_item(&self.key)
    }
}
