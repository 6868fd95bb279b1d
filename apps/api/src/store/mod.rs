//! File-backed candidate store: a single pretty-printed JSON array holding
//! every candidate record, read and rewritten whole on each mutation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::info;

/// Key every stored record is addressed by.
pub const CANDIDATE_NUMBER_KEY: &str = "candidate_number";

pub struct CandidateStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles so concurrent in-process
    /// mutations cannot lose updates. The file itself remains
    /// last-writer-wins for external processes.
    write_lock: Mutex<()>,
}

impl CandidateStore {
    /// Opens the store at `path`, creating an empty one if the file is absent.
    pub async fn open(path: PathBuf) -> Result<Self> {
        if tokio::fs::metadata(&path).await.is_err() {
            tokio::fs::write(&path, "[]")
                .await
                .with_context(|| format!("Failed to create store file {}", path.display()))?;
            info!("Created empty candidate store at {}", path.display());
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Reads every record. Fails if the file is missing or malformed.
    pub async fn read_all(&self) -> Result<Vec<Value>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read store file {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Store file {} is not a JSON array", self.path.display()))
    }

    /// Overwrites the whole store, pretty-printed.
    pub async fn write_all(&self, records: &[Value]) -> Result<()> {
        let raw = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, raw)
            .await
            .with_context(|| format!("Failed to write store file {}", self.path.display()))
    }

    /// Appends a record, assigning `candidate_number = record count + 1`,
    /// and returns it as stored.
    ///
    /// Numbers are not gapless identifiers: after a deletion the next
    /// insert derives its number from the shrunk count and may reuse one.
    pub async fn insert(&self, mut record: Map<String, Value>) -> Result<Value> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let number = records.len() as i64 + 1;
        record.insert(CANDIDATE_NUMBER_KEY.to_string(), Value::from(number));
        let stored = Value::Object(record);
        records.push(stored.clone());
        self.write_all(&records).await?;
        Ok(stored)
    }

    /// Replaces the record numbered `number` with `record`, forcing its
    /// `candidate_number` back to `number`. Returns the stored record,
    /// or `None` if no record matches.
    pub async fn update(
        &self,
        number: i64,
        mut record: Map<String, Value>,
    ) -> Result<Option<Value>> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let Some(index) = records
            .iter()
            .position(|r| candidate_number(r) == Some(number))
        else {
            return Ok(None);
        };
        record.insert(CANDIDATE_NUMBER_KEY.to_string(), Value::from(number));
        records[index] = Value::Object(record);
        let stored = records[index].clone();
        self.write_all(&records).await?;
        Ok(Some(stored))
    }

    /// Removes every record numbered `number`. Idempotent: removing an
    /// unknown number rewrites the store unchanged.
    pub async fn delete(&self, number: i64) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        records.retain(|r| candidate_number(r) != Some(number));
        self.write_all(&records).await
    }
}

/// Reads the `candidate_number` field of a stored record.
pub fn candidate_number(record: &Value) -> Option<i64> {
    record.get(CANDIDATE_NUMBER_KEY).and_then(Value::as_i64)
}
