//! A middleware for catching panics.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! This middleware will catch panics and return a proper HTTP response.

use {
	crate::http::HandlerError,
	axum::response::IntoResponse,
	std::any::Any,
	tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic},
};

pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		err: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let message = err
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| err.downcast_ref::<String>().map(String::as_str))
			.unwrap_or("<unknown>");

		error!(target: "album_api::audit_log", %message, "handler panicked");

		HandlerError::Internal("something unexpected happened; please report this incident")
			.into_response()
	}
}
