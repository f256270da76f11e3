//! Meido Desk - 女仆咖啡厅前台预约
//!
//! # 架构概述
//!
//! An in-process front desk for a maid café. Everything lives in memory in
//! one [`AppState`] and is lost on restart:
//!
//! - **门禁** (`gate`): two independent 4-digit PIN gates (admin, overview)
//! - **预约** (`reservations`): booking form, ordered store, overview filters, editor
//! - **目录** (`catalog`): time slots, tables and waiters
//! - **设置** (`settings`): restaurant settings validation
//! - **事件** (`events`): change notifications over a broadcast channel
//!
//! # 模块结构
//!
//! ```text
//! meido-desk/src/
//! ├── core/          # 配置、视图、应用状态
//! ├── gate/          # PIN 门禁
//! ├── reservations/  # 预约表单、列表、筛选、编辑
//! ├── catalog/       # 时段 / 桌台 / 女仆
//! ├── settings.rs    # 设置校验
//! ├── events.rs      # 变更广播
//! └── utils/         # 日志、校验、时间
//! ```

pub mod catalog;
pub mod core;
pub mod events;
pub mod gate;
pub mod reservations;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export 公共类型
pub use catalog::Catalog;
pub use core::{AppState, Config, View};
pub use events::EventBus;
pub use gate::{AccessGate, GateKind, PinCode, PinInput};
pub use reservations::{
    DateFilter, ReservationBuilder, ReservationDraft, ReservationQuery, ReservationStats,
    ReservationStore, StatusFilter,
};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
