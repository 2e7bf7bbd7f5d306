//! OS signals that stop the server.

use {std::io, tokio::signal::ctrl_c};

/// Resolves once the process has been asked to shut down.
pub(crate) async fn shutdown()
{
	let signal = tokio::select! {
		result = ctrl_c() => result.map(|()| "SIGINT"),
		result = terminate() => result.map(|()| "SIGTERM"),
	};

	match signal {
		Ok(name) => info!(signal = name, "shutting down"),
		Err(error) => error!(%error, "failed listening for shutdown signals; shutting down"),
	}
}

#[cfg(unix)]
async fn terminate() -> io::Result<()>
{
	use tokio::signal::unix::{SignalKind, signal};

	let mut signal = signal(SignalKind::terminate())?;

	if signal.recv().await.is_none() {
		warn!("cannot receive more SIGTERM signals");
		std::future::pending::<()>().await;
	}

	Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()>
{
	std::future::pending().await
}
