//! 变更广播
//!
//! [`EventBus`] announces every state mutation as a [`SyncPayload`] on a
//! tokio broadcast channel. Each resource has its own version counter.

use std::collections::HashMap;

use serde::Serialize;
use shared::SyncPayload;
use tokio::sync::broadcast;

/// Broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// 资源版本管理器
///
/// 每种资源独立递增，从 1 开始
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: HashMap<String, u64>,
}

impl ResourceVersions {
    /// 递增指定资源的版本号并返回新值
    pub fn increment(&mut self, resource: &str) -> u64 {
        let entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取当前版本号，未出现过的资源返回 0
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).copied().unwrap_or(0)
    }
}

pub struct EventBus {
    tx: broadcast::Sender<SyncPayload>,
    versions: ResourceVersions,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("tx", &"<broadcast::Sender>")
            .field("receivers", &self.tx.receiver_count())
            .field("versions", &self.versions)
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            tx,
            versions: ResourceVersions::default(),
        }
    }

    /// Subscribe to all future payloads
    pub fn subscribe(&self) -> broadcast::Receiver<SyncPayload> {
        self.tx.subscribe()
    }

    /// 广播同步消息
    ///
    /// - `resource`: 资源类型 (见 [`shared::message::resource`])
    /// - `action`: 变更类型 (见 [`shared::message::action`])
    /// - `id`: 资源 ID
    /// - `data`: 资源数据 (deleted 时为 None)
    ///
    /// Having no subscribers is not an error.
    pub fn publish<T: Serialize>(
        &mut self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) -> SyncPayload {
        let version = self.versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        tracing::debug!(resource, action, id, version, "Sync payload published");
        let _ = self.tx.send(payload.clone());
        payload
    }

    /// Publish without a data body
    pub fn publish_empty(&mut self, resource: &str, action: &str, id: &str) -> SyncPayload {
        self.publish::<()>(resource, action, id, None)
    }

    pub fn version(&self, resource: &str) -> u64 {
        self.versions.get(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::message::{action, resource};

    #[test]
    fn test_versions_are_per_resource() {
        let mut bus = EventBus::new();
        assert_eq!(bus.version(resource::RESERVATION), 0);

        bus.publish_empty(resource::RESERVATION, action::CREATED, "1");
        bus.publish_empty(resource::RESERVATION, action::DELETED, "1");
        bus.publish_empty(resource::TABLE, action::REPLACED, "all");

        assert_eq!(bus.version(resource::RESERVATION), 2);
        assert_eq!(bus.version(resource::TABLE), 1);
        assert_eq!(bus.version(resource::WAITER), 0);
    }

    #[test]
    fn test_subscriber_receives_payload() {
        let mut bus = EventBus::new();
        let mut rx = bus.subscribe();

        let data = serde_json::json!({ "number": 3 });
        let sent = bus.publish(resource::TABLE, action::UPDATED, "42", Some(&data));

        let received = rx.try_recv().unwrap();
        assert_eq!(received, sent);
        assert_eq!(received.version, 1);
        assert_eq!(received.data.unwrap()["number"], 3);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let mut bus = EventBus::new();
        let payload = bus.publish_empty(resource::GATE, action::LOCKED, "admin");
        assert!(payload.data.is_none());
        assert!(payload.is(resource::GATE));
    }
}
