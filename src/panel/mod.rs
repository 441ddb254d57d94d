//! Session-panel view state.
//!
//! The selection and expanded-details sets the session list renders from.
//! Owned explicitly by whoever drives the panel and shared via
//! [`PanelState::shared`] — never ambient globals.  The coordinator clears
//! the selection through the same handle when a sign-out resolves.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::devices::{DeviceId, DeviceMap};

/// Shared handle to a [`PanelState`].
pub type SharedPanelState = Arc<Mutex<PanelState>>;

/// Mutable view state for the session list.
#[derive(Debug, Default)]
pub struct PanelState {
    /// Devices ticked for a bulk action.
    selected: HashSet<DeviceId>,
    /// Devices whose detail row is expanded.
    expanded: HashSet<DeviceId>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh state in the shared handle embedders pass around.
    pub fn shared() -> SharedPanelState {
        Arc::new(Mutex::new(Self::new()))
    }

    // ── Selection ────────────────────────────────────────────────

    /// Tick or untick a device.
    pub fn toggle_selected(&mut self, id: &DeviceId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Select every given device (typically all non-current devices).
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = DeviceId>,
    {
        self.selected.extend(ids);
    }

    /// Drop the whole selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether a device is ticked.
    pub fn is_selected(&self, id: &DeviceId) -> bool {
        self.selected.contains(id)
    }

    /// Ticked devices in stable (id) order, ready to submit.
    pub fn selected_ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of ticked devices.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    // ── Expanded details ─────────────────────────────────────────

    /// Expand or collapse a device's detail row.
    pub fn toggle_expanded(&mut self, id: &DeviceId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    /// Whether a device's detail row is expanded.
    pub fn is_expanded(&self, id: &DeviceId) -> bool {
        self.expanded.contains(id)
    }

    // ── Reconciliation ───────────────────────────────────────────

    /// Drop state for devices that no longer exist (after a refresh).
    pub fn retain_existing(&mut self, devices: &DeviceMap) {
        self.selected.retain(|id| devices.contains_key(id));
        self.expanded.retain(|id| devices.contains_key(id));
    }
}
