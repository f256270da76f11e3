//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 错误类型 (from shared::error)
//! - [`logger`] - 日志初始化
//! - [`validation`] - 文本长度校验
//! - [`time`] - 业务时区与日期解析

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
