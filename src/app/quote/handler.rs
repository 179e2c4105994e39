//! 报价购物车处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::QuoteItem;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

/// 创建会话的响应
#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

/// 添加报价条目的请求（产品投影）
#[derive(Debug, Deserialize)]
pub struct AddQuoteRequest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// 成员判断的响应
#[derive(Debug, Serialize)]
pub struct ContainsResult {
    pub name: String,
    pub in_quote: bool,
}

/// POST /api/quote/sessions - 创建报价会话
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<SessionCreated>>), CoreError> {
    let session_id = state.quote_service.create_session()?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            SessionCreated { session_id },
            "报价会话创建成功",
        )),
    ))
}

/// DELETE /api/quote/sessions/:session_id - 结束会话
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    state.quote_service.end_session(session_id)?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/quote/sessions/:session_id/items - 获取购物车条目
pub async fn get_items(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<QuoteItem>>>, CoreError> {
    let items = state.quote_service.items(session_id)?;
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/quote/sessions/:session_id/items - 添加条目
///
/// 重复添加同名产品是幂等的，不会产生第二个条目。
pub async fn add_item(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<AddQuoteRequest>,
) -> Result<Json<ApiResponse<Vec<QuoteItem>>>, CoreError> {
    // 验证输入
    if payload.name.trim().is_empty() {
        return Err(CoreError::BadRequest("产品名称不能为空".to_string()));
    }

    let item = QuoteItem {
        name: payload.name,
        category: payload.category,
        description: payload.description,
    };
    let items = state.quote_service.add_item(session_id, item)?;
    Ok(Json(ApiResponse::with_message(items, "产品已加入报价单")))
}

/// DELETE /api/quote/sessions/:session_id/items/:name - 移除条目
///
/// 名称不存在时也返回成功，移除不存在的条目不是错误。
pub async fn remove_item(
    State(state): State<AppState>,
    Path((session_id, name)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<Vec<QuoteItem>>>, CoreError> {
    let items = state.quote_service.remove_item(session_id, &name)?;
    Ok(Json(ApiResponse::success(items)))
}

/// DELETE /api/quote/sessions/:session_id/items - 清空购物车
pub async fn clear_items(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    state.quote_service.clear_items(session_id)?;
    Ok(Json(ApiResponse::success(())))
}

/// GET /api/quote/sessions/:session_id/items/:name - 成员判断
///
/// 页面用它驱动"已在报价单中"的按钮状态。
pub async fn contains_item(
    State(state): State<AppState>,
    Path((session_id, name)): Path<(Uuid, String)>,
) -> Result<Json<ApiResponse<ContainsResult>>, CoreError> {
    let in_quote = state.quote_service.contains_item(session_id, &name)?;
    Ok(Json(ApiResponse::success(ContainsResult { name, in_quote })))
}
