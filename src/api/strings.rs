use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::ApiError;
use crate::error::AnalyzerError;
use crate::models::StringRecord;
use crate::service::{FilteredList, InterpretedList};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// POST /strings - 创建字符串
pub async fn create_string(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<StringRecord>), ApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        AnalyzerError::MissingInput("value")
    })?;

    let record = state.service.create(&body)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value - 获取字符串
pub async fn get_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>, ApiError> {
    Ok(Json(state.service.fetch(&value)?))
}

/// DELETE /strings/:value - 删除字符串
pub async fn delete_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(&value)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /strings - 按参数过滤列表
pub async fn list_strings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<FilteredList> {
    Json(state.service.list(&params))
}

/// GET /strings/filter-by-natural-language - 自然语言过滤
pub async fn filter_by_natural_language(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Json<InterpretedList>, ApiError> {
    Ok(Json(state.service.list_by_query(params.query.as_deref())?))
}
