//! String service - use cases over an injected store / 字符串服务
//!
//! Create is validated strictly; listing filters are lenient.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::analyzer;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::filter::{self, FilterPredicateSet};
use crate::models::StringRecord;
use crate::query;
use crate::store::StringStore;

/// Result of an explicit-filter listing / 显式过滤结果
#[derive(Debug, Clone, Serialize)]
pub struct FilteredList {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterPredicateSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterPredicateSet,
}

/// Result of a natural language listing / 自然语言过滤结果
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedList {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Clone)]
pub struct StringService {
    store: Arc<dyn StringStore>,
}

impl StringService {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self { store }
    }

    /// Analyze and store `body.value` / 创建字符串记录
    pub fn create(&self, body: &Value) -> AnalyzerResult<StringRecord> {
        let value = match body.get("value") {
            None | Some(Value::Null) => return Err(AnalyzerError::MissingInput("value")),
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(AnalyzerError::InvalidType {
                    field: "value",
                    expected: "string",
                })
            }
        };

        let properties = analyzer::analyze(value);
        let record = self
            .store
            .put(StringRecord::new(value.clone(), properties))?;
        tracing::info!("Stored string {}", record.id);
        Ok(record)
    }

    pub fn fetch(&self, value: &str) -> AnalyzerResult<StringRecord> {
        self.store.get_by_value(value).ok_or(AnalyzerError::NotFound)
    }

    pub fn delete(&self, value: &str) -> AnalyzerResult<()> {
        let removed = self.store.delete(value)?;
        tracing::info!("Deleted string {}", removed.id);
        Ok(())
    }

    /// List with explicit filter parameters; bad values are ignored / 按参数过滤
    pub fn list(&self, params: &HashMap<String, String>) -> FilteredList {
        let predicates = FilterPredicateSet::from_params(params);
        tracing::debug!("Listing strings with filters {:?}", predicates);

        let (data, filters_applied) = filter::evaluate(self.store.all(), &predicates);
        FilteredList {
            count: data.len(),
            data,
            filters_applied,
        }
    }

    /// List with a free-text query / 按自然语言查询过滤
    pub fn list_by_query(&self, query: Option<&str>) -> AnalyzerResult<InterpretedList> {
        let original = match query.map(str::trim) {
            Some(q) if !q.is_empty() => q,
            _ => return Err(AnalyzerError::MissingInput("query")),
        };

        let predicates = query::interpret(original);
        if predicates.is_empty() {
            tracing::warn!("Unparsable query: {}", original);
            return Err(AnalyzerError::Unparsable(original.to_string()));
        }
        tracing::debug!("Interpreted {:?} as {:?}", original, predicates);

        let (data, parsed_filters) = filter::evaluate(self.store.all(), &predicates);
        Ok(InterpretedList {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: original.to_string(),
                parsed_filters,
            },
        })
    }
}
