//! 产品目录 API 服务器
//!
//! 为配件经销商网站提供产品搜索接口和会话级报价购物车接口。
//! 目录数据启动时从静态 JSON 文件加载，全程只读。

use std::env;
use std::time::Duration;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, Level};

use parts_catalog::app::catalog::handler as catalog_handler;
use parts_catalog::app::catalog::service::CatalogService;
use parts_catalog::app::quote::handler as quote_handler;
use parts_catalog::app::quote::service::QuoteService;
use parts_catalog::app::AppState;
use parts_catalog::core::error::CoreError;
use parts_catalog::core::middleware::request_logging_middleware;
use parts_catalog::infrastructure::dataset::ProductDataset;
use parts_catalog::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动产品目录服务器...");

    // 加载产品数据集
    let dataset_path =
        env::var("DATASET_PATH").unwrap_or_else(|_| "data/website_data.json".to_string());
    let dataset = ProductDataset::load(&dataset_path).expect("无法加载产品数据文件");
    info!("✅ 已从 {} 加载 {} 个产品", dataset_path, dataset.len());

    // 创建共享状态
    let state = AppState {
        catalog_service: CatalogService::new(dataset.into_products()),
        quote_service: QuoteService::new(),
    };

    // 创建路由
    let app = Router::new()
        .route("/", get(api_info))
        .route("/api/products", get(catalog_handler::list_products))
        .route(
            "/api/products/search",
            get(catalog_handler::search_products),
        )
        .route("/api/categories", get(catalog_handler::list_categories))
        .route("/api/quote/sessions", post(quote_handler::create_session))
        .route(
            "/api/quote/sessions/:session_id",
            delete(quote_handler::end_session),
        )
        .route(
            "/api/quote/sessions/:session_id/items",
            get(quote_handler::get_items)
                .post(quote_handler::add_item)
                .delete(quote_handler::clear_items),
        )
        .route(
            "/api/quote/sessions/:session_id/items/:name",
            get(quote_handler::contains_item).delete(quote_handler::remove_item),
        )
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(5)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // 绑定地址
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    let listener = TcpListener::bind(&bind_addr).await.expect("无法绑定端口");

    info!("🚀 产品目录服务器运行在 http://{}", bind_addr);
    info!("📖 API 端点:");
    info!("   GET    /                        - API 信息");
    info!("   GET    /api/products            - 完整产品目录");
    info!("   GET    /api/products/search     - 搜索产品 (参数: q, category)");
    info!("   GET    /api/categories          - 分类列表");
    info!("   POST   /api/quote/sessions      - 创建报价会话");
    info!("   DELETE /api/quote/sessions/:id  - 结束会话");
    info!("   GET/POST/DELETE /api/quote/sessions/:id/items - 购物车操作");
    info!("   GET    /health                  - 健康检查");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}

/// API 信息
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Parts Catalog API",
        "version": "0.1.0",
        "description": "卡车/挂车配件目录搜索与报价购物车接口",
        "endpoints": {
            "products": {
                "GET /api/products": "完整产品目录",
                "GET /api/products/search?q=&category=": "搜索产品，两个参数都可省略",
                "GET /api/categories": "从目录推导的分类列表"
            },
            "quote": {
                "POST /api/quote/sessions": "创建报价会话",
                "DELETE /api/quote/sessions/:id": "结束会话",
                "GET /api/quote/sessions/:id/items": "购物车条目",
                "POST /api/quote/sessions/:id/items": "添加条目（幂等）",
                "DELETE /api/quote/sessions/:id/items": "清空购物车",
                "GET /api/quote/sessions/:id/items/:name": "成员判断",
                "DELETE /api/quote/sessions/:id/items/:name": "移除条目"
            }
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// 健康检查
async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "0.1.0",
        "catalog": {
            "type": "in-memory",
            "products_count": state.catalog_service.total(),
            "categories_count": state.catalog_service.categories().len()
        },
        "quote_sessions": state.quote_service.session_count()?
    })))
}
