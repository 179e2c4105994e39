//! 报价购物车功能模块

pub mod handler;
pub mod model;
pub mod service;
