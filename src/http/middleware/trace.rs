//! Request logging.

use {
	axum::body::Body,
	http::{Request, Response},
	std::time::Duration,
	tower_http::{
		classify::ServerErrorsFailureClass,
		request_id::RequestId,
		trace::{HttpMakeClassifier, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer},
	},
};

/// Opens a span for every request and logs when it starts and finishes.
///
/// Must be installed after the request ID layer so the ID is available.
pub(crate) fn layer() -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<Body> + Clone,
	impl OnRequest<Body> + Clone,
	impl OnResponse<Body> + Clone,
	(),
	(),
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	TraceLayer::new_for_http()
		.make_span_with(make_span::<Body>)
		.on_request(on_request::<Body>)
		.on_response(on_response::<Body>)
		.on_body_chunk(())
		.on_eos(())
		.on_failure(on_failure)
}

fn make_span<B>(req: &Request<B>) -> tracing::Span
{
	let request_id = req
		.extensions()
		.get::<RequestId>()
		.and_then(|id| id.header_value().to_str().ok())
		.unwrap_or("<none>");

	info_span!(
		target: "album_api::http",
		"request",
		req.id = %request_id,
		req.method = %req.method(),
		req.uri = %req.uri(),
		res.status = tracing::field::Empty,
	)
}

fn on_request<B>(_: &Request<B>, _: &tracing::Span)
{
	debug!(target: "album_api::http", "starting to process request");
}

fn on_response<B>(res: &Response<B>, latency: Duration, span: &tracing::Span)
{
	span.record("res.status", res.status().as_u16());

	info!(target: "album_api::http", ?latency, "finished processing request");
}

fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, _: &tracing::Span)
{
	match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(target: "album_api::http::error", status = status.as_u16(), ?latency, "failed to handle request");
		},
		ServerErrorsFailureClass::Error(error) => {
			error!(target: "album_api::http::error", %error, ?latency, "failed to handle request");
		},
	}
}
