//! In-flight sign-out tracking.
//!
//! The session list disables rows and shows spinners for devices that are
//! mid-sign-out.  [`InFlightSignOuts`] is the shared membership set behind
//! that state.  Requests add their ids through [`InFlightSignOuts::begin`],
//! which returns a guard; the guard's `Drop` removes exactly those ids, so
//! a request can never leave stuck entries behind — early return, error,
//! or panic included.
//!
//! Membership changes are set-union on begin and set-difference on release:
//! concurrent requests over disjoint device sets never clobber each other.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::devices::DeviceId;

/// Shared set of device ids currently being signed out.
#[derive(Debug, Clone, Default)]
pub struct InFlightSignOuts {
    inner: Arc<Mutex<HashSet<DeviceId>>>,
}

impl InFlightSignOuts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given ids as in flight and return the releasing guard.
    pub fn begin(&self, ids: &[DeviceId]) -> InFlightGuard {
        {
            let mut set = self.inner.lock();
            set.extend(ids.iter().cloned());
        }
        InFlightGuard {
            set: self.clone(),
            ids: ids.to_vec(),
        }
    }

    /// Whether a device is currently being signed out.
    pub fn contains(&self, id: &DeviceId) -> bool {
        self.inner.lock().contains(id)
    }

    /// Snapshot of the current membership (for rendering).
    pub fn snapshot(&self) -> HashSet<DeviceId> {
        self.inner.lock().clone()
    }

    /// True when no sign-out is in flight.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of devices currently in flight.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn release(&self, ids: &[DeviceId]) {
        let mut set = self.inner.lock();
        for id in ids {
            set.remove(id);
        }
    }
}

/// Removes its request's ids from the set when dropped.
#[must_use = "dropping the guard immediately would clear the in-flight state"]
#[derive(Debug)]
pub struct InFlightGuard {
    set: InFlightSignOuts,
    ids: Vec<DeviceId>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.set.release(&self.ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<DeviceId> {
        names.iter().map(|n| DeviceId::from(*n)).collect()
    }

    #[test]
    fn begin_adds_and_drop_removes() {
        let set = InFlightSignOuts::new();
        let guard = set.begin(&ids(&["A", "B"]));

        assert!(set.contains(&DeviceId::from("A")));
        assert!(set.contains(&DeviceId::from("B")));
        assert_eq!(set.len(), 2);

        drop(guard);
        assert!(set.is_empty());
    }

    #[test]
    fn disjoint_guards_release_independently() {
        let set = InFlightSignOuts::new();
        let first = set.begin(&ids(&["A", "B"]));
        let second = set.begin(&ids(&["C"]));
        assert_eq!(set.len(), 3);

        drop(first);
        assert!(!set.contains(&DeviceId::from("A")));
        assert!(!set.contains(&DeviceId::from("B")));
        assert!(set.contains(&DeviceId::from("C")));

        drop(second);
        assert!(set.is_empty());
    }

    #[test]
    fn guard_releases_on_panic() {
        let set = InFlightSignOuts::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe({
            let set = set.clone();
            move || {
                let _guard = set.begin(&ids(&["A"]));
                panic!("sign-out blew up");
            }
        }));

        assert!(result.is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn snapshot_reflects_current_membership() {
        let set = InFlightSignOuts::new();
        let _guard = set.begin(&ids(&["A"]));

        let snap = set.snapshot();
        assert_eq!(snap.len(), 1);
        assert!(snap.contains(&DeviceId::from("A")));
    }
}
