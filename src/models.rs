use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived properties of one stored string / 字符串派生属性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Unicode code points, not bytes / 字符数
    pub length: usize,
    pub is_palindrome: bool,
    /// Distinct characters of the raw value / 不同字符数
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<char, usize>,
}

/// One analyzed string, keyed by its digest / 已分析的字符串记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: Properties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Build a record from a value and its analysis / 根据分析结果创建记录
    pub fn new(value: String, properties: Properties) -> Self {
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
