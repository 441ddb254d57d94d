//! Interactive-auth deletion seam and its callback-to-future bridge.
//!
//! The backend's device-deletion API is callback-shaped: it takes the ids
//! and a completion handler it promises to invoke exactly once with the
//! outcome.  [`delete_and_wait`] turns that into something the coordinator
//! can await: a oneshot result slot is created, the handler fulfills it,
//! and the caller suspends on the receiving half.  A handler the backend
//! drops without calling resolves as failure rather than hanging the
//! request forever.

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::devices::DeviceId;

/// Completion handler the deletion API invokes exactly once.
pub type CompletionHandler = Box<dyn FnOnce(bool) + Send>;

/// The backend's interactive-auth device-deletion API.
///
/// Implementations run the challenge/response re-auth flow with the user
/// and delete the given devices, then report the outcome through the
/// handler.  Transport-level failures may be returned directly instead.
#[async_trait]
pub trait InteractiveAuthApi: Send + Sync {
    async fn delete_devices(
        &self,
        ids: &[DeviceId],
        on_done: CompletionHandler,
    ) -> anyhow::Result<()>;
}

/// Invoke the deletion API and suspend until its completion handler fires.
///
/// Returns the boolean outcome the handler reported; `Ok(false)` if the
/// backend dropped the handler without calling it.
pub async fn delete_and_wait(
    api: &dyn InteractiveAuthApi,
    ids: &[DeviceId],
) -> anyhow::Result<bool> {
    let (tx, rx) = oneshot::channel();
    let on_done: CompletionHandler = Box::new(move |success| {
        // The receiver only disappears if the caller was cancelled;
        // the outcome has nowhere to go then anyway.
        let _ = tx.send(success);
    });

    api.delete_devices(ids, on_done).await?;

    Ok(rx.await.unwrap_or(false))
}
