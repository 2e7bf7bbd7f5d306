//! Custom [response] types
//!
//! [response]: axum::response::IntoResponse

use {
	crate::http::json::Json,
	axum::response::{IntoResponse, Response},
	serde::Serialize,
};

pub(crate) type HandlerResult<T> = Result<T, HandlerError>;

/// `201 Created` with a JSON body.
#[derive(Debug)]
pub(crate) struct Created<T>(pub T)
where
	T: Serialize;

impl<T: Serialize> IntoResponse for Created<T>
{
	fn into_response(self) -> Response
	{
		(http::StatusCode::CREATED, Json(self.0)).into_response()
	}
}

/// Everything a handler can fail with.
///
/// Each variant maps to a status code and a JSON object with a single
/// `error` or `message` key.
#[derive(Debug)]
pub(crate) enum HandlerError
{
	/// The request body could not be decoded.
	BadRequest(String),

	NotFound(&'static str),

	/// A backend call failed; the backend's diagnostic is passed through.
	Backend(String),

	/// A fixed message for failures whose details we don't expose.
	Internal(&'static str),

	/// The request was turned away before it reached a handler, e.g. because
	/// its body was too large.
	Rejected(http::StatusCode, String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum ErrorBody<'a>
{
	Error(&'a str),
	Message(&'a str),
}

impl HandlerError
{
	fn status(&self) -> http::StatusCode
	{
		match self {
			Self::BadRequest(_) => http::StatusCode::BAD_REQUEST,
			Self::NotFound(_) => http::StatusCode::NOT_FOUND,
			Self::Backend(_) | Self::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
			Self::Rejected(status, _) => *status,
		}
	}
}

impl IntoResponse for HandlerError
{
	fn into_response(self) -> Response
	{
		let status = self.status();
		let body = match self {
			Self::BadRequest(ref error) | Self::Backend(ref error) | Self::Rejected(_, ref error) => {
				ErrorBody::Error(error)
			},
			Self::Internal(error) => ErrorBody::Error(error),
			Self::NotFound(message) => ErrorBody::Message(message),
		};

		if status.is_server_error() {
			warn!(status = status.as_u16(), ?body, "responding with server error");
		} else {
			debug!(status = status.as_u16(), ?body, "rejecting request");
		}

		(status, Json(body)).into_response()
	}
}
