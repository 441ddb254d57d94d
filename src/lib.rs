//! Session and device sign-out management core for chat clients.
//!
//! A chat account accumulates logged-in devices; the settings surface that
//! lists them needs one piece of real coordination: signing them out.
//! This crate owns that flow and the state around it, and leaves rendering,
//! crypto, and the account backend behind trait seams.
//!
//! ## What lives here
//! - [`devices`]: the device model and the [`devices::DeviceListProvider`]
//!   seam (plus a backend-free in-memory implementation).
//! - [`panel`]: explicit, owned view state for the session list (selection,
//!   expanded rows).
//! - [`oidc`]: delegated-auth discovery — whether sign-out must go through
//!   the account provider's manager, resolved once and cached.
//! - [`prompt`]: dialog seams (confirmation, delegated logout, current-
//!   device logout) and a terminal backend.
//! - [`signout`]: the coordinator — guards, in-flight tracking with
//!   guaranteed release, delegated/interactive branching, error absorption.
//! - [`config`] / [`logging`]: embedder plumbing.
//!
//! ## Wiring
//! ```no_run
//! use std::sync::Arc;
//! use sessionguard::config::SessionGuardConfig;
//! use sessionguard::devices::{DeviceListProvider, InMemoryDeviceList};
//! use sessionguard::oidc::DelegatedAuthResolver;
//! use sessionguard::panel::PanelState;
//! use sessionguard::prompt::cli::TerminalPrompt;
//! use sessionguard::signout::{refresh_and_clear, SignOutCoordinator};
//! # use sessionguard::signout::{CompletionHandler, InteractiveAuthApi};
//! # use sessionguard::devices::DeviceId;
//! # struct Backend;
//! # #[async_trait::async_trait]
//! # impl InteractiveAuthApi for Backend {
//! #     async fn delete_devices(&self, _: &[DeviceId], done: CompletionHandler) -> anyhow::Result<()> {
//! #         done(true); Ok(())
//! #     }
//! # }
//!
//! # async fn wire() -> anyhow::Result<()> {
//! let config = SessionGuardConfig::load("sessionguard.toml".as_ref())?;
//! let devices = InMemoryDeviceList::with_current("CURRENT");
//! let provider: Arc<dyn DeviceListProvider> = Arc::new(devices);
//! let panel = PanelState::shared();
//! let prompt = Arc::new(TerminalPrompt::new());
//!
//! let coordinator = SignOutCoordinator::new(
//!     Arc::new(DelegatedAuthResolver::from_config(&config)?),
//!     prompt.clone(),
//!     prompt.clone(),
//!     prompt,
//!     Arc::new(Backend),
//! )
//! .on_resolved(refresh_and_clear(provider, panel));
//!
//! let selected = vec![DeviceId::from("OTHERDEV")];
//! coordinator.sign_out_devices(&selected).await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod devices;
pub mod error;
pub mod logging;
pub mod oidc;
pub mod panel;
pub mod prompt;
pub mod signout;

pub use config::SessionGuardConfig;
pub use devices::{DeviceId, DeviceInfo, DeviceListProvider, DeviceMap, VerificationStatus};
pub use error::SignOutError;
pub use oidc::{DelegatedAuthContext, DelegatedAuthResolver};
pub use panel::{PanelState, SharedPanelState};
pub use signout::{InFlightSignOuts, InteractiveAuthApi, SignOutCoordinator, SignOutOutcome};
