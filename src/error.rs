//! Error taxonomy for the sign-out flow.
//!
//! These never cross the coordinator boundary — the coordinator logs them
//! and reports a [`SignOutOutcome`](crate::signout::SignOutOutcome)
//! instead.  They exist so log lines and tests name failures precisely.

use thiserror::Error;

/// Why a sign-out request did not complete.
#[derive(Debug, Error)]
pub enum SignOutError {
    /// The caller submitted a multi-device request while delegated auth is
    /// active.  The UI contract allows exactly one device in that mode.
    #[error("requested sign-out of {requested} devices while delegated auth allows exactly one")]
    ContractViolation { requested: usize },

    /// The confirmation prompt itself failed.  Treated as a decline.
    #[error("confirmation prompt failed: {0:#}")]
    PromptFailed(#[source] anyhow::Error),

    /// The remote sign-out step threw (delegated dialog error, or the
    /// deletion API's transport failed).
    #[error("remote sign-out failed: {0:#}")]
    Remote(#[source] anyhow::Error),

    /// The backend completed the flow but reported failure.
    #[error("backend reported the sign-out as unsuccessful")]
    Rejected,
}
