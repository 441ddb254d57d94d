//! Device sign-out flow.
//!
//! Split into the pieces the flow is made of:
//! - [`inflight`]: the shared set of devices mid-sign-out, released by
//!   guard on every exit path.
//! - [`interactive`]: the deletion-API seam and the bridge that turns its
//!   completion callback into an awaitable.
//! - [`coordinator`]: the orchestration — guards, delegated/interactive
//!   branch, error absorption, resolution.

pub mod coordinator;
pub mod inflight;
pub mod interactive;

pub use coordinator::{
    refresh_and_clear, ResolutionCallback, ResolutionFuture, SignOutCoordinator, SignOutOutcome,
};
pub use inflight::{InFlightGuard, InFlightSignOuts};
pub use interactive::{delete_and_wait, CompletionHandler, InteractiveAuthApi};
