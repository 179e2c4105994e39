//! 搜索调度器
//!
//! 页面端的防抖搜索要求"最后一次请求生效"：旧的过滤结果即使后到
//! 也不能覆盖新结果。这里用代计数器（原子递增）实现——每次新的
//! 搜索请求使当前代失效，只有持有最新代票据的结果才允许提交。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 一次搜索请求的票据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// 基于代计数器的搜索调度器
#[derive(Debug, Clone, Default)]
pub struct SearchScheduler {
    generation: Arc<AtomicU64>,
}

impl SearchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一次新的搜索，之前发出的所有票据即刻过期
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 票据是否仍是最新一代
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation.load(Ordering::SeqCst)
    }

    /// 提交一次搜索结果
    ///
    /// 只有最新票据的结果返回 `Some`；过期票据的结果被丢弃，
    /// 调用方不得将其应用到可见状态。
    pub fn commit<T>(&self, ticket: SearchTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            None
        }
    }
}
