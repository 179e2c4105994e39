//! 目录处理器

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use super::model::SearchResult;
use super::service::ALL_CATEGORIES;
use crate::app::AppState;
use crate::core::response::ApiResponse;

/// 搜索查询参数
///
/// 两个参数都可省略：缺省 `q` 等价于空查询，缺省 `category`
/// 等价于 `all`，都表示"不限制"。
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /api/products/search - 搜索产品
///
/// 查询接口只是 `CatalogService::search` 的薄门面，
/// 和页面级搜索走同一个过滤函数。
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<SearchResult>> {
    let query = params.q.as_deref().unwrap_or("");
    let category = params.category.as_deref().unwrap_or(ALL_CATEGORIES);

    let result = state.catalog_service.search(category, query);
    let message = if result.count == result.total {
        format!("获取到 {} 个产品", result.count)
    } else {
        format!(
            "过滤后获取到 {} 个产品 (总共 {} 个)",
            result.count, result.total
        )
    };
    Json(ApiResponse::with_message(result, message))
}

/// GET /api/products - 获取完整目录
pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<SearchResult>> {
    let result = state.catalog_service.search(ALL_CATEGORIES, "");
    Json(ApiResponse::success(result))
}

/// GET /api/categories - 获取分类列表（从目录推导）
pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::success(state.catalog_service.categories()))
}
