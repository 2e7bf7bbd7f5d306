mod rejection;

use {
	axum::{
		body::Bytes,
		extract::{FromRequest, Request},
		response::{IntoResponse, Response},
	},
	headers::HeaderMapExt,
	serde::{Deserialize, Serialize},
	std::fmt,
};

pub(crate) use self::rejection::JsonRejection;

/// JSON request / response body.
///
/// Responses are pretty-printed. Request bodies are decoded as JSON whatever
/// their `Content-Type` says.
#[derive(Debug)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T>
{
	fn into_response(self) -> Response
	{
		let body = serde_json::to_vec_pretty(&self.0).unwrap_or_else(|err| {
			panic!("failed to serialize response body: {err}");
		});

		let mut response = Response::new(body.into());
		response.headers_mut().typed_insert(headers::ContentType::json());
		response
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = JsonRejection<T>;

	#[instrument(level = "debug", skip_all, ret(level = "debug"), err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		let body = Bytes::from_request(req, state).await?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(JsonRejection::deserialize)
	}
}
