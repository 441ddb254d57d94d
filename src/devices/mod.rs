//! Device and session model for the session manager.
//!
//! A "device" is one logged-in session of the user's account: the desktop
//! app, a phone, a browser tab.  The backend owns the authoritative list;
//! this module defines the metadata carried per device and the
//! [`DeviceListProvider`] seam the coordinator consumes.
//!
//! ## Design
//! - Device identifiers are opaque strings assigned by the backend.
//! - The provider trait mirrors what a session-list backend offers: the
//!   full map, the current device's id, a loading flag, and an async
//!   refresh that resolves once the list is up to date.
//! - [`InMemoryDeviceList`] is the backend-free implementation used by
//!   embedders without a server and by tests.

pub mod local;

pub use local::InMemoryDeviceList;

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Device identity ──────────────────────────────────────────────

/// Opaque device identifier assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Wrap a backend-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ── Device metadata ──────────────────────────────────────────────

/// Cryptographic verification status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Cross-signing verified this device.
    Verified,
    /// The device exists but has not been verified.
    Unverified,
    /// Verification state could not be determined (e.g. crypto disabled).
    Unknown,
}

/// Metadata for a single logged-in device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Backend-assigned identifier.
    pub id: DeviceId,
    /// User-facing display name, if one was set.
    pub display_name: Option<String>,
    /// Verification status.
    pub verification: VerificationStatus,
    /// Whether push notifications are enabled for this device.
    /// `None` when the backend does not expose a pusher for it.
    pub pusher_enabled: Option<bool>,
    /// Last time the backend saw activity from this device.
    pub last_seen: Option<DateTime<Utc>>,
}

impl DeviceInfo {
    /// A device with just an id; everything else unknown.
    pub fn bare(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            verification: VerificationStatus::Unknown,
            pusher_enabled: None,
            last_seen: None,
        }
    }

    /// Name to show in a session list: display name, or the id.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// All known devices, keyed by id.  BTreeMap keeps display order stable.
pub type DeviceMap = BTreeMap<DeviceId, DeviceInfo>;

// ── Listing seam ─────────────────────────────────────────────────

/// Source of the user's own device list.
///
/// Implemented over whatever backend owns the sessions (an HTTP API, an
/// SDK handle, [`InMemoryDeviceList`] in tests).
#[async_trait]
pub trait DeviceListProvider: Send + Sync {
    /// Fetch the current device map.
    async fn devices(&self) -> anyhow::Result<DeviceMap>;

    /// The id of the device this client is running as, once known.
    fn current_device_id(&self) -> Option<DeviceId>;

    /// Whether an initial load or refresh is still running.
    fn is_loading(&self) -> bool;

    /// Re-fetch the device list.  Resolves when the list is updated.
    async fn refresh(&self) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_display_roundtrip() {
        let id = DeviceId::from("ABCDEFGH");
        assert_eq!(id.as_str(), "ABCDEFGH");
        assert_eq!(id.to_string(), "ABCDEFGH");
    }

    #[test]
    fn device_label_prefers_display_name() {
        let mut info = DeviceInfo::bare("DEV1");
        assert_eq!(info.label(), "DEV1");

        info.display_name = Some("Work laptop".to_string());
        assert_eq!(info.label(), "Work laptop");
    }

    #[test]
    fn device_info_serializes_id_transparently() {
        let info = DeviceInfo::bare("DEV1");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["id"], "DEV1");
        assert_eq!(json["verification"], "unknown");
    }

    #[test]
    fn device_map_iterates_in_id_order() {
        let mut map = DeviceMap::new();
        map.insert(DeviceId::from("B"), DeviceInfo::bare("B"));
        map.insert(DeviceId::from("A"), DeviceInfo::bare("A"));

        let ids: Vec<_> = map.keys().map(DeviceId::as_str).collect();
        assert_eq!(ids, ["A", "B"]);
    }
}
