//! Error kinds raised by the string service / 字符串服务错误类型
//!
//! Only create, lookup and free-text listing can fail. Malformed filter
//! parameters are dropped silently and never reach this type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// Required field or parameter absent / 缺少必填字段
    #[error("missing required field: {0}")]
    MissingInput(&'static str),

    /// Field present with the wrong shape / 字段类型错误
    #[error("invalid type for field `{field}`: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("string already exists")]
    AlreadyExists,

    #[error("string does not exist")]
    NotFound,

    /// Free-text query produced no filter / 无法解析的查询
    #[error("unable to parse natural language query: {0}")]
    Unparsable(String),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
