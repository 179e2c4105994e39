//! 基础设施模块

pub mod dataset;
pub mod logger;
