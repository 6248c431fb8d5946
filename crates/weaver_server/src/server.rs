//! Listener setup.

use crate::{AppState, create_router};
use tracing::{info, instrument};
use weaver_error::{ServerError, ServerErrorKind, WeaverResult};

/// Bind `addr` and serve until the process stops.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server loop fails.
#[instrument(skip(state))]
pub async fn serve(addr: &str, state: AppState) -> WeaverResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| addr.to_string());
    info!(addr = %local, "Story Weaver listening");

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}
