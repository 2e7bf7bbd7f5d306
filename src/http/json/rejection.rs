use {
	crate::http::HandlerError,
	axum::{
		extract::rejection::BytesRejection,
		response::{IntoResponse, Response},
	},
	std::{any::type_name, marker::PhantomData},
};

#[derive(Debug, Display)]
#[display("failed to extract json body of type `{}`: {}", type_name::<T>(), inner)]
pub(crate) struct JsonRejection<T>
{
	inner: JsonRejectionInner,

	#[debug("{}", type_name::<T>())]
	ty: PhantomData<T>,
}

#[derive(Debug, Display)]
enum JsonRejectionInner
{
	BufferBody(BytesRejection),
	Deserialize(serde_json::Error),
}

impl<T> JsonRejection<T>
{
	pub(super) fn deserialize(error: serde_json::Error) -> Self
	{
		Self { inner: JsonRejectionInner::Deserialize(error), ty: PhantomData }
	}
}

impl<T> From<BytesRejection> for JsonRejection<T>
{
	fn from(rejection: BytesRejection) -> Self
	{
		Self { inner: JsonRejectionInner::BufferBody(rejection), ty: PhantomData }
	}
}

impl<T> IntoResponse for JsonRejection<T>
{
	fn into_response(self) -> Response
	{
		match self.inner {
			JsonRejectionInner::BufferBody(rejection) => {
				HandlerError::Rejected(rejection.status(), rejection.body_text()).into_response()
			},
			JsonRejectionInner::Deserialize(error) => {
				HandlerError::BadRequest(error.to_string()).into_response()
			},
		}
	}
}
