//! 目录业务服务

use std::collections::HashSet;
use std::sync::Arc;

use super::model::{Product, SearchResult};

/// 分类选择器的"不限制"哨兵值
pub const ALL_CATEGORIES: &str = "all";

/// 目录过滤纯函数
///
/// 页面级搜索和查询接口都必须调用这一个实现，保证两边结果一致。
///
/// - 分类步骤：选择器为空或等于 `all`（忽略大小写）时不限制，
///   否则只保留 `category` 完全相等（忽略大小写）的产品；
/// - 文本步骤：查询串为空时不限制，否则保留名称、描述或分类
///   （三者任一）包含小写化查询串的产品。
///
/// 两步都是逐元素谓词，结果保持输入的相对顺序，不修改输入。
/// 空结果是正常返回，不是错误。
pub fn filter_products(products: &[Product], category: &str, query: &str) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    // 按分类过滤
    if !category.is_empty() && !category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        let wanted = category.to_lowercase();
        filtered.retain(|product| product.category.to_lowercase() == wanted);
    }

    // 按查询串过滤
    if !query.is_empty() {
        let term = query.to_lowercase();
        filtered.retain(|product| {
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
                || product.category.to_lowercase().contains(&term)
        });
    }

    filtered
}

/// 目录服务
///
/// 持有进程级只读的产品列表，没有任何写路径。
#[derive(Clone)]
pub struct CatalogService {
    products: Arc<Vec<Product>>,
}

impl CatalogService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// 完整产品列表
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> usize {
        self.products.len()
    }

    /// 从当前目录推导分类列表（按首次出现顺序去重）
    ///
    /// 分类不硬编码，目录数据扩充新分类后这里自动跟上。
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories: Vec<String> = Vec::new();
        for product in self.products.iter() {
            if seen.insert(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// 搜索目录，附带 count/total
    pub fn search(&self, category: &str, query: &str) -> SearchResult {
        let products = filter_products(&self.products, category, query);
        SearchResult {
            count: products.len(),
            total: self.products.len(),
            products,
        }
    }
}
