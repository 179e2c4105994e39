//! 产品数据集基础设施
//!
//! 目录数据来自一个静态 JSON 文件，进程启动时加载一次，之后只读。
//! 没有写回路径——新增产品意味着重新部署数据文件。

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::app::catalog::model::Product;

/// 数据集错误类型
#[derive(Debug)]
pub enum DatasetError {
    ReadFailed(String),
    ParseFailed(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::ReadFailed(msg) => write!(f, "读取数据文件失败: {}", msg),
            DatasetError::ParseFailed(msg) => write!(f, "解析数据文件失败: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

/// 数据文件的顶层结构（与网站数据文件格式一致）
#[derive(Debug, Deserialize)]
struct WebsiteData {
    content: WebsiteContent,
}

#[derive(Debug, Deserialize)]
struct WebsiteContent {
    products: Vec<Product>,
}

/// 产品数据集
pub struct ProductDataset {
    products: Vec<Product>,
}

impl ProductDataset {
    /// 从文件加载数据集
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path.as_ref())
            .map_err(|e| DatasetError::ReadFailed(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::parse(&raw)
    }

    /// 从 JSON 字符串解析数据集
    pub fn parse(raw: &str) -> Result<Self, DatasetError> {
        let data: WebsiteData =
            serde_json::from_str(raw).map_err(|e| DatasetError::ParseFailed(e.to_string()))?;
        Ok(Self {
            products: data.content.products,
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 取出产品列表，交给目录服务持有
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
