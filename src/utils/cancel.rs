//! Cancellation utilities
//!
//! Every dispatch and decode helper takes a `CancellationToken`. When the token
//! fires, the in-flight future is dropped (closing the connection) and the
//! call resolves to `ClientError::Cancelled`.

use crate::error::{ClientError, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Drive `future` to completion unless `token` is cancelled first.
///
/// A token that is already cancelled short-circuits without polling `future`.
pub async fn run_cancellable<F, T>(token: &CancellationToken, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if token.is_cancelled() {
        return Err(ClientError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!("operation cancelled by caller");
            Err(ClientError::Cancelled)
        }
        res = future => res,
    }
}
