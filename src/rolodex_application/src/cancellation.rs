use std::future::Future;

use rolodex_core::AuthError;
use tokio_util::sync::CancellationToken;

/// Drives `fut` unless `ctx` fires first, in which case `fut` is dropped.
///
/// Cancellation is checked before the future is polled, so an already
/// cancelled context never reaches the collaborator.
pub async fn run_cancellable<T, E, F>(ctx: &CancellationToken, fut: F) -> Result<T, AuthError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AuthError>,
{
    tokio::select! {
        biased;
        _ = ctx.cancelled() => Err(AuthError::Cancelled),
        result = fut => result.map_err(Into::into),
    }
}
