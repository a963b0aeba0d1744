//! Campaign history: a bounded, newest-first list persisted in one storage slot.

use crate::{CampaignRecord, Error, Result};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage slot holding the serialized history array
pub const HISTORY_SLOT: &str = "marketgenius_history";

/// Records kept after every append
pub const HISTORY_LIMIT: usize = 5;

/// Records kept after a failed write
pub const DEGRADED_LIMIT: usize = 3;

/// Named-slot key/value store.
pub trait Storage {
    fn read(&self, slot: &str) -> Result<Option<String>>;
    fn write(&mut self, slot: &str, value: &str) -> Result<()>;
    fn remove(&mut self, slot: &str) -> Result<()>;
}

/// In-memory storage. An optional byte capacity makes oversized writes fail.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    pub fn insert(&mut self, slot: &str, value: &str) {
        self.slots.insert(slot.to_string(), value.to_string());
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<()> {
        if let Some(cap) = self.capacity {
            if value.len() > cap {
                return Err(Error::Persistence(format!(
                    "quota exceeded: {} bytes > {} bytes",
                    value.len(),
                    cap
                )));
            }
        }
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// One `<slot>.json` file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }
}

impl Storage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(slot)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(slot);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> Result<()> {
        match fs::remove_file(self.path(slot)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Bounded campaign history over a [`Storage`] slot.
///
/// Storage failures never propagate: corrupt data reads as empty history and
/// a failed write shrinks the in-memory list to [`DEGRADED_LIMIT`].
pub struct HistoryStore<S: Storage> {
    storage: S,
    records: Vec<CampaignRecord>,
}

impl<S: Storage> HistoryStore<S> {
    /// Open the store and load whatever history the slot holds.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            records: Vec::new(),
        };
        store.records = store.load();
        store
    }

    /// Read the slot. Corrupt or non-array content clears the slot and
    /// yields an empty list; individual malformed entries are dropped.
    pub fn load(&mut self) -> Vec<CampaignRecord> {
        let raw = match self.storage.read(HISTORY_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("History read failed: {}", e);
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                debug!("History slot does not hold an array; ignoring");
                return Vec::new();
            }
            Err(e) => {
                warn!("History slot is corrupt ({}); clearing", e);
                if let Err(e) = self.storage.remove(HISTORY_SLOT) {
                    warn!("Failed to clear history slot: {}", e);
                }
                return Vec::new();
            }
        };

        let mut records: Vec<CampaignRecord> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(r) => Some(r),
                Err(e) => {
                    warn!("Dropping malformed history entry: {}", e);
                    None
                }
            })
            .collect();
        records.truncate(HISTORY_LIMIT);
        records
    }

    /// Prepend a record, keep the newest [`HISTORY_LIMIT`] and persist.
    pub fn append(&mut self, record: CampaignRecord) {
        self.records.insert(0, record);
        self.records.truncate(HISTORY_LIMIT);
        self.persist();
    }

    /// Write the current list. On failure the list shrinks to
    /// [`DEGRADED_LIMIT`] and the write is not retried. Returns whether the
    /// write succeeded.
    pub fn persist(&mut self) -> bool {
        if self.records.is_empty() {
            return true;
        }
        let res = serde_json::to_string(&self.records)
            .map_err(Error::from)
            .and_then(|json| self.storage.write(HISTORY_SLOT, &json));
        match res {
            Ok(()) => true,
            Err(e) => {
                warn!("History write failed ({}); keeping {} records", e, DEGRADED_LIMIT);
                self.records.truncate(DEGRADED_LIMIT);
                false
            }
        }
    }

    /// Timestamp for a new record, strictly after the newest one so ids stay unique.
    pub fn next_timestamp(&self, now: u64) -> u64 {
        match self.records.first() {
            Some(newest) if now <= newest.timestamp => newest.timestamp.saturating_add(1),
            _ => now,
        }
    }

    pub fn records(&self) -> &[CampaignRecord] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&CampaignRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
