//! String store / 字符串存储
//!
//! Two indexes behind one lock: primary by digest, secondary by raw value.
//! Process memory only, lost on restart.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::StringRecord;

/// Storage interface injected into the service layer / 存储接口
pub trait StringStore: Send + Sync {
    /// Insert a new record; `AlreadyExists` if the value is stored / 插入记录
    fn put(&self, record: StringRecord) -> AnalyzerResult<StringRecord>;

    fn get_by_id(&self, id: &str) -> Option<StringRecord>;

    fn get_by_value(&self, value: &str) -> Option<StringRecord>;

    /// Remove from both indexes / 从两个索引中删除
    fn delete(&self, value: &str) -> AnalyzerResult<StringRecord>;

    /// All records ordered by creation time, then id / 列出全部记录
    fn all(&self) -> Vec<StringRecord>;
}

#[derive(Default)]
struct Indexes {
    by_id: HashMap<String, StringRecord>,
    by_value: HashMap<String, String>,
}

/// In-memory store / 内存存储
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Indexes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StringStore for MemoryStore {
    fn put(&self, record: StringRecord) -> AnalyzerResult<StringRecord> {
        let mut inner = self.inner.write();
        if inner.by_value.contains_key(&record.value) || inner.by_id.contains_key(&record.id) {
            return Err(AnalyzerError::AlreadyExists);
        }
        inner
            .by_value
            .insert(record.value.clone(), record.id.clone());
        inner.by_id.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn get_by_id(&self, id: &str) -> Option<StringRecord> {
        self.inner.read().by_id.get(id).cloned()
    }

    fn get_by_value(&self, value: &str) -> Option<StringRecord> {
        let inner = self.inner.read();
        inner
            .by_value
            .get(value)
            .and_then(|id| inner.by_id.get(id))
            .cloned()
    }

    fn delete(&self, value: &str) -> AnalyzerResult<StringRecord> {
        let mut inner = self.inner.write();
        let id = inner.by_value.remove(value).ok_or(AnalyzerError::NotFound)?;
        inner.by_id.remove(&id).ok_or(AnalyzerError::NotFound)
    }

    fn all(&self) -> Vec<StringRecord> {
        let mut records: Vec<StringRecord> = self.inner.read().by_id.values().cloned().collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        records
    }
}
