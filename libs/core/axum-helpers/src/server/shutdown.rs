use tokio::signal;
use tracing::info;

/// Resolves once the process is asked to stop.
///
/// Listens for SIGINT (Ctrl+C) and, on unix, SIGTERM. Whichever arrives
/// first completes the future, letting `axum::serve` drain in-flight
/// requests before the process exits. The user store is in-process memory,
/// so there is nothing to flush on the way down.
pub async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .expect("Ctrl+C listener failed to register");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM listener failed to register")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Ctrl+C received, draining in-flight requests"),
        _ = terminate => info!("SIGTERM received, draining in-flight requests"),
    }
}
