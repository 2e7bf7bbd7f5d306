use {
	tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
	ulid::Ulid,
};

/// Tags every request with an `x-request-id` header and copies it onto the
/// response.
pub(crate) fn layers() -> (SetRequestIdLayer<MakeUlidRequestId>, PropagateRequestIdLayer)
{
	(SetRequestIdLayer::x_request_id(MakeUlidRequestId), PropagateRequestIdLayer::x_request_id())
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MakeUlidRequestId;

impl MakeRequestId for MakeUlidRequestId
{
	fn make_request_id<B>(&mut self, _: &http::Request<B>) -> Option<RequestId>
	{
		Ulid::new()
			.to_string()
			.parse::<http::HeaderValue>()
			.inspect_err(|error| warn!(%error, "generated invalid request ID"))
			.map(RequestId::new)
			.ok()
	}
}
