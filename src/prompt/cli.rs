//! Terminal prompt backend.
//!
//! Backs the dialog seams with `dialoguer` prompts for headless or CLI
//! embedders.  The delegated path cannot perform the remote sign-out
//! itself from a terminal, so it prints the account-manager URL and asks
//! the user to confirm once they have signed the device out there.

use async_trait::async_trait;
use dialoguer::Confirm;

use super::{ConfirmationPrompt, DelegatedLogoutPrompt, LogoutPrompt};
use crate::devices::DeviceId;

/// `dialoguer`-based implementation of the dialog seams.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

/// Run a blocking dialoguer prompt off the async runtime.
async fn ask(prompt: String) -> anyhow::Result<bool> {
    let confirmed = tokio::task::spawn_blocking(move || {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
    })
    .await??;
    Ok(confirmed)
}

#[async_trait]
impl ConfirmationPrompt for TerminalPrompt {
    async fn confirm_sign_out(&self, count: usize) -> anyhow::Result<bool> {
        let noun = if count == 1 { "session" } else { "sessions" };
        ask(format!("Sign out {count} {noun}?")).await
    }
}

#[async_trait]
impl DelegatedLogoutPrompt for TerminalPrompt {
    async fn sign_out_via_account_manager(
        &self,
        device: &DeviceId,
        account_management_url: &str,
    ) -> anyhow::Result<bool> {
        ask(format!(
            "Session {device} is managed by your account provider.\n\
             Sign it out at {account_management_url}, then confirm. Done?"
        ))
        .await
    }
}

impl LogoutPrompt for TerminalPrompt {
    fn begin_current_device_sign_out(&self) {
        // The terminal has no logout dialog to open; embedders wire their
        // own. Logging keeps the action visible in headless runs.
        tracing::info!("current-device sign-out requested");
    }
}
