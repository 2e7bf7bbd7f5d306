//! Album API - a JSON album catalogue backed by Airtable.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use {
	color_eyre::{
		Section,
		eyre::{self, WrapErr},
	},
	std::io::{self, IsTerminal},
};

mod cli;

#[tokio::main]
async fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let args = cli::args();

	// Load the `.env` file before anything reads the environment. A missing
	// default `.env` is fine, a missing `--env-file` is not.
	let env_file = match args.env_file.as_deref() {
		Some(path) => dotenvy::from_filename(path)
			.map(Some)
			.wrap_err_with(|| format!("failed to load {path:?}"))?,
		None => dotenvy::dotenv().ok(),
	};

	album_api::telemetry::init(!args.no_color && io::stderr().is_terminal())?;
	album_api::runtime::panic_hook::install();

	if let Some(path) = env_file {
		tracing::debug!(?path, "loaded environment file");
	}

	let config = tracing::info_span!("runtime::startup")
		.in_scope(album_api::runtime::Config::new)
		.wrap_err("failed to load configuration")
		.suggestion("set AIRTABLE_TOKEN, AIRTABLE_BASE_ID and AIRTABLE_TABLE (or put them in `.env`)")?;

	tracing::info!(?config, "loaded configuration");

	album_api::run(config, args.socket_addr())
		.await
		.wrap_err("failed to run server")
}
