//! Logging setup.

use {
	color_eyre::eyre::{self, WrapErr},
	tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt},
};

/// Used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "album_api=info,tower_http=info,warn";

/// Installs the global `tracing` subscriber.
///
/// Log levels are controlled with the `RUST_LOG` environment variable.
pub fn init(ansi: bool) -> eyre::Result<()>
{
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(DEFAULT_FILTER).wrap_err("invalid default log filter")?,
	};

	let stderr_layer = tracing_subscriber::fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(ansi)
		.with_span_events(FmtSpan::CLOSE);

	tracing_subscriber::registry()
		.with(filter)
		.with(stderr_layer)
		.try_init()
		.wrap_err("failed to install tracing subscriber")
}
