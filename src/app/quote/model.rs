//! 报价购物车数据模型

use serde::{Deserialize, Serialize};

use crate::app::catalog::model::Product;

/// 报价条目
///
/// 产品的投影：购物车不需要渲染图片，所以只保留名称、分类和描述。
/// 加入后不再单独修改（没有数量、没有备注）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl From<&Product> for QuoteItem {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
        }
    }
}
