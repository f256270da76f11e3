//! 核心模块 - 配置、视图和应用状态
//!
//! - [`Config`] - 前台配置
//! - [`View`] - 顶层视图
//! - [`AppState`] - 应用状态 (唯一的数据持有者)

pub mod config;
pub mod state;
pub mod view;

pub use config::Config;
pub use state::AppState;
pub use view::View;
