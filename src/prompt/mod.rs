//! Dialog seams for the sign-out flow.
//!
//! The coordinator never draws UI; it asks these collaborators.  A GUI
//! embedder backs them with modal dialogs, the shipped [`cli::TerminalPrompt`]
//! backs them with terminal prompts, tests back them with mocks.

pub mod cli;

use async_trait::async_trait;

use crate::devices::DeviceId;

/// Plain yes/no confirmation before destructive actions.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Ask the user to confirm signing out `count` sessions.
    /// Resolves to `true` only on explicit confirmation.
    async fn confirm_sign_out(&self, count: usize) -> anyhow::Result<bool>;
}

/// Dedicated dialog for the delegated-auth sign-out path.
///
/// Shows the single device and the provider's account-management URL, and
/// performs the remote sign-out as a side effect of confirmation.
#[async_trait]
pub trait DelegatedLogoutPrompt: Send + Sync {
    /// Resolves to `true` once the remote sign-out completed.
    async fn sign_out_via_account_manager(
        &self,
        device: &DeviceId,
        account_management_url: &str,
    ) -> anyhow::Result<bool>;
}

/// Entry point to the current-device logout dialog.
///
/// Fire-and-forget from the coordinator's perspective: the dialog owns the
/// rest of that flow (key backup prompts, the actual logout call).
pub trait LogoutPrompt: Send + Sync {
    fn begin_current_device_sign_out(&self);
}
