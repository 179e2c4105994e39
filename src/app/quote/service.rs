//! 报价购物车业务服务

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::model::QuoteItem;
use crate::core::error::CoreError;

/// 报价购物车
///
/// 以产品名称为键、保持插入顺序的集合。四个操作都是全函数：
/// 任何输入（包括空名称、不存在的名称）都有定义好的非错误结果。
#[derive(Debug, Clone, Default)]
pub struct QuoteCart {
    items: Vec<QuoteItem>,
}

impl QuoteCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加条目（幂等）
    ///
    /// 同名条目已存在时保留原条目不做替换，防止重复点击产生重复项。
    pub fn add(&mut self, item: QuoteItem) {
        if self.contains(&item.name) {
            return;
        }
        self.items.push(item);
    }

    /// 按名称移除条目，名称不存在时什么都不发生
    pub fn remove(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// 无条件清空
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// 按名称精确匹配的成员判断
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 报价会话服务
///
/// 每个浏览会话对应一个独立的购物车实例，以会话 id 为键。
/// 会话之间没有共享可变状态；会话结束时购物车直接丢弃。
#[derive(Clone)]
pub struct QuoteService {
    sessions: Arc<Mutex<HashMap<Uuid, QuoteCart>>>,
}

impl QuoteService {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, QuoteCart>>, CoreError> {
        self.sessions
            .lock()
            .map_err(|e| CoreError::InternalServerError(format!("会话锁获取失败: {}", e)))
    }

    /// 创建新会话，返回会话 id
    pub fn create_session(&self) -> Result<Uuid, CoreError> {
        let id = Uuid::new_v4();
        self.lock()?.insert(id, QuoteCart::new());
        Ok(id)
    }

    /// 结束会话并丢弃其购物车
    pub fn end_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        match self.lock()?.remove(&session_id) {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound(format!("会话 {} 不存在", session_id))),
        }
    }

    /// 对指定会话的购物车执行一个操作
    pub fn with_cart<T>(
        &self,
        session_id: Uuid,
        op: impl FnOnce(&mut QuoteCart) -> T,
    ) -> Result<T, CoreError> {
        let mut sessions = self.lock()?;
        match sessions.get_mut(&session_id) {
            Some(cart) => Ok(op(cart)),
            None => Err(CoreError::NotFound(format!("会话 {} 不存在", session_id))),
        }
    }

    pub fn add_item(&self, session_id: Uuid, item: QuoteItem) -> Result<Vec<QuoteItem>, CoreError> {
        self.with_cart(session_id, |cart| {
            cart.add(item);
            cart.items().to_vec()
        })
    }

    pub fn remove_item(&self, session_id: Uuid, name: &str) -> Result<Vec<QuoteItem>, CoreError> {
        self.with_cart(session_id, |cart| {
            cart.remove(name);
            cart.items().to_vec()
        })
    }

    pub fn clear_items(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.with_cart(session_id, |cart| cart.clear())
    }

    pub fn contains_item(&self, session_id: Uuid, name: &str) -> Result<bool, CoreError> {
        self.with_cart(session_id, |cart| cart.contains(name))
    }

    pub fn items(&self, session_id: Uuid) -> Result<Vec<QuoteItem>, CoreError> {
        self.with_cart(session_id, |cart| cart.items().to_vec())
    }

    /// 当前活跃会话数，供健康检查显示
    ///
    /// 锁中毒和其他访问器一样向上传播，健康检查不应把
    /// 坏掉的会话存储伪装成"0 个会话"。
    pub fn session_count(&self) -> Result<usize, CoreError> {
        Ok(self.lock()?.len())
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new()
    }
}
