//! 变更通知载荷
//!
//! Every mutation of the application state is announced as a
//! [`SyncPayload`]. Subscribers (a view layer, an audit sink, tests) use the
//! `resource` + `version` pair to decide whether their copy is stale.

use serde::{Deserialize, Serialize};

/// Resource names carried in [`SyncPayload::resource`]
pub mod resource {
    pub const RESERVATION: &str = "reservation";
    pub const SETTINGS: &str = "settings";
    pub const TIME_SLOT: &str = "time_slot";
    pub const TABLE: &str = "table";
    pub const WAITER: &str = "waiter";
    pub const GATE: &str = "gate";
}

/// Action names carried in [`SyncPayload::action`]
pub mod action {
    pub const CREATED: &str = "created";
    pub const UPDATED: &str = "updated";
    pub const DELETED: &str = "deleted";
    /// Whole collection replaced (catalog and settings saves)
    pub const REPLACED: &str = "replaced";
    pub const UNLOCKED: &str = "unlocked";
    pub const LOCKED: &str = "locked";
    pub const PIN_CHANGED: &str = "pin_changed";
}

/// 同步信号载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// 资源类型 (例如: "reservation", "table", "gate")
    pub resource: String,
    /// 版本号 (每种资源独立递增)
    pub version: u64,
    /// 变更类型 (例如: "created", "updated", "deleted")
    pub action: String,
    /// 资源 ID (集合整体替换时为 "all")
    pub id: String,
    /// 资源数据 (可选，deleted 时为 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SyncPayload {
    /// Check whether this payload concerns the given resource
    pub fn is(&self, resource: &str) -> bool {
        self.resource == resource
    }
}
