//! Utilities for unit & integration tests.

mod macros;
mod memory_table;

#[allow(unused_imports)]
pub(crate) use self::{macros::*, memory_table::MemoryTable};

use {
	axum::body::Body,
	bytes::Bytes,
	http_body_util::BodyExt,
	serde::Deserialize,
};

pub(crate) type Error = anyhow::Error;
pub(crate) type Result<T = (), E = Error> = std::result::Result<T, E>;

pub(crate) async fn collect_res_body(body: Body) -> Result<Bytes>
{
	Ok(body.collect().await?.to_bytes())
}

pub(crate) async fn deserialize_res_body<T>(body: Body) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let bytes = collect_res_body(body).await?;

	Ok(serde_json::from_slice(&bytes[..])?)
}
