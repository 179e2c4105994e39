//! 产品目录功能模块

pub mod handler;
pub mod model;
pub mod scheduler;
pub mod service;
