//! In-memory device list.
//!
//! Backend-free implementation of [`DeviceListProvider`], used by embedders
//! that have no session server (single-process deployments) and by tests.
//! Mutation helpers cover what a session-manager surface needs: add,
//! rename, toggle the pusher, remove.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use super::{DeviceId, DeviceInfo, DeviceListProvider, DeviceMap, VerificationStatus};

/// Thread-safe in-memory device registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceList {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    devices: DeviceMap,
    current: Option<DeviceId>,
    loading: bool,
}

impl InMemoryDeviceList {
    /// Empty registry with no current device.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with a current device.
    pub fn with_current(current: impl Into<DeviceId>) -> Self {
        let current = current.into();
        let list = Self::new();
        {
            let mut inner = list.inner.lock();
            inner.devices.insert(
                current.clone(),
                DeviceInfo {
                    id: current.clone(),
                    display_name: None,
                    verification: VerificationStatus::Verified,
                    pusher_enabled: None,
                    last_seen: Some(Utc::now()),
                },
            );
            inner.current = Some(current);
        }
        list
    }

    /// Register a device, generating an id.  Returns the new id.
    pub fn add_device(&self, display_name: Option<&str>) -> DeviceId {
        let id = DeviceId::new(uuid::Uuid::new_v4().simple().to_string());
        self.insert(DeviceInfo {
            id: id.clone(),
            display_name: display_name.map(str::to_string),
            verification: VerificationStatus::Unverified,
            pusher_enabled: Some(true),
            last_seen: Some(Utc::now()),
        });
        id
    }

    /// Insert or replace a device record.
    pub fn insert(&self, info: DeviceInfo) {
        self.inner.lock().devices.insert(info.id.clone(), info);
    }

    /// Rename a device.  Returns false if the id is unknown.
    pub fn rename(&self, id: &DeviceId, display_name: &str) -> bool {
        let mut inner = self.inner.lock();
        match inner.devices.get_mut(id) {
            Some(info) => {
                info.display_name = Some(display_name.to_string());
                true
            }
            None => false,
        }
    }

    /// Enable or disable push notifications for a device.
    /// Returns false if the id is unknown.
    pub fn set_pusher_enabled(&self, id: &DeviceId, enabled: bool) -> bool {
        let mut inner = self.inner.lock();
        match inner.devices.get_mut(id) {
            Some(info) => {
                info.pusher_enabled = Some(enabled);
                true
            }
            None => false,
        }
    }

    /// Remove devices by id (what a completed sign-out does server-side).
    pub fn remove(&self, ids: &[DeviceId]) {
        let mut inner = self.inner.lock();
        for id in ids {
            inner.devices.remove(id);
        }
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.inner.lock().devices.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().devices.is_empty()
    }
}

#[async_trait]
impl DeviceListProvider for InMemoryDeviceList {
    async fn devices(&self) -> anyhow::Result<DeviceMap> {
        Ok(self.inner.lock().devices.clone())
    }

    fn current_device_id(&self) -> Option<DeviceId> {
        self.inner.lock().current.clone()
    }

    fn is_loading(&self) -> bool {
        self.inner.lock().loading
    }

    async fn refresh(&self) -> anyhow::Result<()> {
        // Nothing to re-fetch; the map is the source of truth.
        // Bump last_seen for the current device so staleness sorting works.
        let mut inner = self.inner.lock();
        if let Some(current) = inner.current.clone() {
            if let Some(info) = inner.devices.get_mut(&current) {
                info.last_seen = Some(Utc::now());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_current_registers_a_verified_device() {
        let list = InMemoryDeviceList::with_current("CURRENT");
        let map = list.devices().await.unwrap();

        assert_eq!(map.len(), 1);
        let info = &map[&DeviceId::from("CURRENT")];
        assert_eq!(info.verification, VerificationStatus::Verified);
        assert_eq!(list.current_device_id(), Some(DeviceId::from("CURRENT")));
    }

    #[tokio::test]
    async fn add_rename_and_toggle_pusher() {
        let list = InMemoryDeviceList::new();
        let id = list.add_device(Some("Phone"));

        assert!(list.rename(&id, "Old phone"));
        assert!(list.set_pusher_enabled(&id, false));

        let map = list.devices().await.unwrap();
        let info = &map[&id];
        assert_eq!(info.display_name.as_deref(), Some("Old phone"));
        assert_eq!(info.pusher_enabled, Some(false));
    }

    #[test]
    fn rename_unknown_device_is_rejected() {
        let list = InMemoryDeviceList::new();
        assert!(!list.rename(&DeviceId::from("NOPE"), "name"));
        assert!(!list.set_pusher_enabled(&DeviceId::from("NOPE"), true));
    }

    #[tokio::test]
    async fn remove_drops_only_named_ids() {
        let list = InMemoryDeviceList::new();
        let a = list.add_device(None);
        let b = list.add_device(None);

        list.remove(&[a.clone()]);

        let map = list.devices().await.unwrap();
        assert!(!map.contains_key(&a));
        assert!(map.contains_key(&b));
    }
}
