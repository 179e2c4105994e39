//! 目录数据模型

use serde::{Deserialize, Serialize};

/// 占位图片路径，image 字段不是 http 链接时使用
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.svg";

/// 产品记录
///
/// `name` 在目录中唯一，作为事实上的主键；
/// 报价购物车的成员判断也以 `name` 为准。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl Product {
    /// 返回可展示的图片地址
    ///
    /// 原始数据中 image 可能是绝对 URL，也可能是表示"用占位图"的哨兵值。
    pub fn image_url(&self) -> &str {
        if self.image.starts_with("http") {
            &self.image
        } else {
            PLACEHOLDER_IMAGE
        }
    }
}

/// 搜索结果
///
/// `count` 是过滤后的数量，`total` 是目录总数，供页面显示 "x / y" 使用。
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub products: Vec<Product>,
    pub count: usize,
    pub total: usize,
}
