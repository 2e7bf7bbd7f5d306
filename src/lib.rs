#![doc = include_str!("../README.md")]

/*
 * Album API - a JSON album catalogue backed by Airtable.
 * Copyright (C) 2024  AlphaKeks <alphakeks@dawn>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

#[macro_use]
extern crate tracing;

#[macro_use(Debug, Display, Error, From)]
extern crate derive_more;

use {
	crate::{airtable::RecordStore, albums::Store, http::middleware},
	std::{io, net::SocketAddr},
	tokio::net::TcpListener,
	tower::ServiceBuilder,
};

pub mod airtable;
pub mod albums;
pub mod runtime;
pub mod telemetry;

mod http;
mod signal;

#[cfg(test)]
mod testing;

/// Builds the API's router on top of `store`.
pub fn router<T: RecordStore>(store: Store<T>) -> axum::Router
{
	let (set_request_id, propagate_request_id) = middleware::request_id::layers();
	let middleware = ServiceBuilder::new()
		.layer(middleware::panic_handler::layer())
		.layer(set_request_id)
		.layer(middleware::trace::layer())
		.layer(propagate_request_id);

	axum::Router::from(store).layer(middleware)
}

/// Connects to Airtable using `config` and serves the API on `addr` until the
/// process receives a shutdown signal.
pub async fn run(config: runtime::Config, addr: SocketAddr) -> io::Result<()>
{
	let client = airtable::Client::new(config.airtable_token(), config.airtable_api_url().clone());
	let table = client.table(config.airtable_base_id(), config.airtable_table());
	let router = router(Store::new(table));

	let listener = TcpListener::bind(addr).await?;

	info!(addr = %listener.local_addr()?, "listening for requests");

	axum::serve(listener, router)
		.with_graceful_shutdown(signal::shutdown())
		.await
}
