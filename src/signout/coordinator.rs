//! Sign-out coordination.
//!
//! [`SignOutCoordinator`] sits between the session panel and two backends:
//! the provider's account manager (delegated auth) and the local
//! interactive-auth deletion API.  It owns the guards (empty input,
//! single-device contract under delegated auth, user confirmation), marks
//! devices in flight before any network interaction, branches on the
//! delegated-auth context, and absorbs every error at its boundary.
//!
//! ## Contract
//! - `sign_out_devices` never returns an error.  Success is observable
//!   through the resolution callback firing and the in-flight set draining;
//!   the returned [`SignOutOutcome`] is informational.
//! - Requests over disjoint device sets may run concurrently; each releases
//!   only its own ids.
//! - A failed request is terminal.  There is no retry; the user starts a
//!   fresh request.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::devices::{DeviceId, DeviceListProvider};
use crate::error::SignOutError;
use crate::oidc::DelegatedAuthResolver;
use crate::panel::SharedPanelState;
use crate::prompt::{ConfirmationPrompt, DelegatedLogoutPrompt, LogoutPrompt};
use crate::signout::inflight::InFlightSignOuts;
use crate::signout::interactive::{delete_and_wait, InteractiveAuthApi};

// ── Resolution callback ──────────────────────────────────────────

/// Future returned by a resolution callback.
pub type ResolutionFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Caller-supplied callback invoked after a successful sign-out.
/// Typically refreshes the device list and clears the selection.
pub type ResolutionCallback = Arc<dyn Fn() -> ResolutionFuture + Send + Sync>;

/// The standard resolution wiring: refresh the device list, then clear the
/// selection and drop panel state for devices that no longer exist.
pub fn refresh_and_clear(
    provider: Arc<dyn DeviceListProvider>,
    panel: SharedPanelState,
) -> ResolutionCallback {
    Arc::new(move || {
        let provider = Arc::clone(&provider);
        let panel = Arc::clone(&panel);
        Box::pin(async move {
            if let Err(e) = provider.refresh().await {
                tracing::warn!(error = %e, "device list refresh failed after sign-out");
            }
            let devices = provider.devices().await.unwrap_or_default();
            let mut panel = panel.lock();
            panel.clear_selection();
            panel.retain_existing(&devices);
        })
    })
}

// ── Outcome ──────────────────────────────────────────────────────

/// How a sign-out request ended.  Informational only — failures have
/// already been logged and absorbed by the time this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutOutcome {
    /// Nothing to do: empty input, or a contract-violating request that
    /// was dropped.
    Noop,
    /// The user declined, either at the confirmation dialog or inside the
    /// delegated-auth dialog.
    Declined,
    /// The backend completed the sign-out.
    Completed,
    /// The backend ran the flow but reported failure.
    Rejected,
    /// The remote step errored; the error was logged and swallowed.
    Failed,
}

// ── Coordinator ──────────────────────────────────────────────────

/// Coordinates sign-out of the current device and of sets of other devices.
pub struct SignOutCoordinator {
    resolver: Arc<DelegatedAuthResolver>,
    confirm: Arc<dyn ConfirmationPrompt>,
    delegated_prompt: Arc<dyn DelegatedLogoutPrompt>,
    logout_prompt: Arc<dyn LogoutPrompt>,
    api: Arc<dyn InteractiveAuthApi>,
    in_flight: InFlightSignOuts,
    on_resolved: Option<ResolutionCallback>,
    require_confirmation: bool,
}

impl SignOutCoordinator {
    pub fn new(
        resolver: Arc<DelegatedAuthResolver>,
        confirm: Arc<dyn ConfirmationPrompt>,
        delegated_prompt: Arc<dyn DelegatedLogoutPrompt>,
        logout_prompt: Arc<dyn LogoutPrompt>,
        api: Arc<dyn InteractiveAuthApi>,
    ) -> Self {
        Self {
            resolver,
            confirm,
            delegated_prompt,
            logout_prompt,
            api,
            in_flight: InFlightSignOuts::new(),
            on_resolved: None,
            require_confirmation: true,
        }
    }

    /// Install the callback run after each successful sign-out.
    pub fn on_resolved(mut self, callback: ResolutionCallback) -> Self {
        self.on_resolved = Some(callback);
        self
    }

    /// Skip the yes/no confirmation on the interactive path.
    pub fn without_confirmation(mut self) -> Self {
        self.require_confirmation = false;
        self
    }

    /// The in-flight set, for rendering spinners/disabled rows.
    pub fn in_flight(&self) -> &InFlightSignOuts {
        &self.in_flight
    }

    /// Begin signing out the device this client runs as.
    ///
    /// Hands off to the logout dialog, which owns the rest of that flow.
    /// No coordinator state changes; completion is not tracked here.
    pub fn sign_out_current_device(&self) {
        self.logout_prompt.begin_current_device_sign_out();
    }

    /// Sign out a set of other devices.
    ///
    /// Never returns an error; see the module docs for the contract.
    pub async fn sign_out_devices(&self, ids: &[DeviceId]) -> SignOutOutcome {
        if ids.is_empty() {
            return SignOutOutcome::Noop;
        }

        let delegated = self.resolver.resolve().await;

        // Under delegated auth the UI offers single-device sign-out only;
        // anything else is a caller bug, dropped without side effects.
        if delegated.is_some() && ids.len() != 1 {
            let err = SignOutError::ContractViolation {
                requested: ids.len(),
            };
            tracing::warn!("{err}; dropping request");
            return SignOutOutcome::Noop;
        }

        if delegated.is_none() && self.require_confirmation {
            match self.confirm.confirm_sign_out(ids.len()).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::debug!(count = ids.len(), "sign-out declined");
                    return SignOutOutcome::Declined;
                }
                Err(e) => {
                    let err = SignOutError::PromptFailed(e);
                    tracing::warn!("{err}; treating as decline");
                    return SignOutOutcome::Declined;
                }
            }
        }

        // Mark in flight before any network interaction so the panel can
        // show pending state immediately.  The guard releases these ids on
        // every exit path below.
        let _guard = self.in_flight.begin(ids);

        let result = match &delegated {
            Some(ctx) => {
                self.delegated_prompt
                    .sign_out_via_account_manager(&ids[0], &ctx.account_management_url)
                    .await
            }
            None => delete_and_wait(self.api.as_ref(), ids).await,
        };

        match result {
            Ok(true) => {
                if let Some(callback) = &self.on_resolved {
                    callback().await;
                }
                tracing::info!(count = ids.len(), "signed out");
                SignOutOutcome::Completed
            }
            Ok(false) if delegated.is_some() => {
                tracing::debug!(device = %ids[0], "delegated sign-out not completed");
                SignOutOutcome::Declined
            }
            Ok(false) => {
                let err = SignOutError::Rejected;
                tracing::warn!(count = ids.len(), "{err}");
                SignOutOutcome::Rejected
            }
            Err(e) => {
                let err = SignOutError::Remote(e);
                tracing::warn!(count = ids.len(), "{err}");
                SignOutOutcome::Failed
            }
        }
    }
}
