//! # 产品目录与报价购物车服务
//!
//! 这个库为卡车/挂车配件经销商网站提供核心业务逻辑，包括：
//! - 静态 JSON 数据集支撑的只读产品目录
//! - 确定性的目录过滤/搜索（纯函数，页面与接口共用同一实现）
//! - 会话级报价购物车：添加/移除/清空/成员判断
//! - 搜索调度器（代计数器实现 last-write-wins）

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::catalog::model::{Product, SearchResult, PLACEHOLDER_IMAGE};
pub use crate::app::catalog::scheduler::{SearchScheduler, SearchTicket};
pub use crate::app::catalog::service::{filter_products, CatalogService, ALL_CATEGORIES};
pub use crate::app::quote::model::QuoteItem;
pub use crate::app::quote::service::{QuoteCart, QuoteService};
pub use crate::app::AppState;
pub use crate::infrastructure::dataset::{DatasetError, ProductDataset};
