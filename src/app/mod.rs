//! 应用模块

pub mod catalog;
pub mod quote;

use self::catalog::service::CatalogService;
use self::quote::service::QuoteService;

/// 应用共享状态
///
/// 目录服务持有不可变的产品列表，报价服务持有按会话划分的购物车。
/// 两者都通过 `with_state` 注入到各个处理器，不使用全局单例。
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub quote_service: QuoteService,
}
