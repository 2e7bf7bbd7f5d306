//! A minimal client for Airtable's REST API.
//!
//! Only the three record operations the API needs are implemented: listing a
//! table, fetching a record by its ID, and creating records.
//!
//! See <https://airtable.com/developers/web/api/introduction>.

use {
	bytes::Bytes,
	http_body_util::BodyExt,
	reqwest::RequestBuilder,
	serde::{Deserialize, Serialize},
	std::{fmt, future::Future, sync::Arc},
	url::Url,
};

pub mod field;

pub use self::field::{FieldValue, Fields};

/// The public Airtable API.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Display, Error, From)]
pub enum ApiError
{
	#[display("failed to make http request: {_0}")]
	Http(reqwest::Error),

	#[display("Airtable responded with {status}: {message}")]
	#[from(ignore)]
	Status
	{
		status: http::StatusCode,
		message: String,
	},

	#[display("failed to buffer response body: {error}")]
	#[from(ignore)]
	BufferResponseBody
	{
		#[error(source)]
		error: reqwest::Error,
		response: http::response::Parts,
	},

	#[display("failed to deserialize response from Airtable: {error}")]
	#[from(ignore)]
	DeserializeResponse
	{
		#[error(source)]
		error: serde_json::Error,
		response: http::Response<Bytes>,
	},
}

/// A record stored in an Airtable table.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record
{
	/// Airtable's own record ID (`rec...`).
	///
	/// Empty for records we have not submitted yet.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub id: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_time: Option<String>,

	#[serde(default)]
	pub fields: Fields,
}

impl Record
{
	pub fn new(fields: Fields) -> Self
	{
		Self { fields, ..Self::default() }
	}
}

/// Request and response body of the list / create endpoints.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Records
{
	#[serde(default)]
	records: Vec<Record>,
}

/// The operations the API performs against a table.
///
/// [`Table`] talks to Airtable; tests substitute an in-memory implementation.
pub trait RecordStore: fmt::Debug + Clone + Send + Sync + 'static
{
	/// Returns every record in the table, in whatever order the backend
	/// chooses.
	fn list_records(&self) -> impl Future<Output = Result<Vec<Record>>> + Send;

	/// Returns the record with the given ID, or [`None`] if the backend does
	/// not know about it.
	fn get_record(&self, id: &str) -> impl Future<Output = Result<Option<Record>>> + Send;

	/// Creates `records` and returns what the backend actually stored.
	fn add_records(&self, records: Vec<Record>) -> impl Future<Output = Result<Vec<Record>>> + Send;
}

#[derive(Debug, Clone)]
pub struct Client
{
	http_client: reqwest::Client,

	#[debug("{:?}", api_url.as_str())]
	api_url: Url,

	#[debug("<redacted>")]
	token: Arc<str>,
}

impl Client
{
	pub fn new(token: impl Into<Arc<str>>, api_url: Url) -> Self
	{
		Self { http_client: reqwest::Client::default(), api_url, token: token.into() }
	}

	/// Returns a handle to a specific table in a specific base.
	pub fn table(&self, base_id: impl Into<Arc<str>>, table: impl Into<Arc<str>>) -> Table
	{
		Table { client: self.clone(), base_id: base_id.into(), name: table.into() }
	}
}

/// A handle to a single Airtable table.
///
/// This is cheap to clone and shared by every request handler.
#[derive(Debug, Clone)]
pub struct Table
{
	client: Client,
	base_id: Arc<str>,
	name: Arc<str>,
}

impl Table
{
	/// `{api_url}/{base_id}/{table}[/{segment}]`
	fn url(&self, segment: Option<&str>) -> Url
	{
		let mut url = self.client.api_url.clone();

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(&self.base_id).push(&self.name);
			segments.extend(segment);
		}

		url
	}

	fn request(&self, method: http::Method, url: Url) -> RequestBuilder
	{
		self.client
			.http_client
			.request(method, url)
			.bearer_auth(&*self.client.token)
	}
}

impl RecordStore for Table
{
	#[instrument(level = "debug", skip(self), fields(table = %self.name), err(level = "debug"))]
	async fn list_records(&self) -> Result<Vec<Record>>
	{
		let request = self.request(http::Method::GET, self.url(None));
		let Records { records } = send_request(request).await?;

		debug!(count = records.len(), "fetched records");

		Ok(records)
	}

	#[instrument(level = "debug", skip(self), fields(table = %self.name), err(level = "debug"))]
	async fn get_record(&self, id: &str) -> Result<Option<Record>>
	{
		let request = self.request(http::Method::GET, self.url(Some(id)));

		match send_request::<Record>(request).await {
			Ok(record) => Ok(Some(record)),
			Err(ApiError::Status { status: http::StatusCode::NOT_FOUND, .. }) => Ok(None),
			Err(error) => Err(error),
		}
	}

	#[instrument(level = "debug", skip(self, records), fields(table = %self.name), err(level = "debug"))]
	async fn add_records(&self, records: Vec<Record>) -> Result<Vec<Record>>
	{
		let request = self
			.request(http::Method::POST, self.url(None))
			.json(&Records { records });

		let Records { records } = send_request(request).await?;

		debug!(count = records.len(), "created records");

		Ok(records)
	}
}

async fn send_request<T>(request: RequestBuilder) -> Result<T>
where
	T: fmt::Debug + for<'de> Deserialize<'de>,
{
	let response = request.send().await?;
	let (response, body) = http::Response::from(response).into_parts();
	let body = match body.collect().await {
		Ok(collected) => collected.to_bytes(),
		Err(error) => return Err(ApiError::BufferResponseBody { error, response }),
	};

	if !response.status.is_success() {
		let message = error_message(&body[..]);

		debug!(status = response.status.as_u16(), %message, "Airtable returned an error");

		return Err(ApiError::Status { status: response.status, message });
	}

	serde_json::from_slice(&body[..]).map_err(|error| ApiError::DeserializeResponse {
		error,
		response: http::Response::from_parts(response, body),
	})
}

/// Extracts a human readable message from an Airtable error body.
///
/// Airtable uses both `{"error": "NOT_FOUND"}` and
/// `{"error": {"type": "...", "message": "..."}}`.
fn error_message(body: &[u8]) -> String
{
	#[derive(Deserialize)]
	struct ErrorBody
	{
		error: ErrorKind,
	}

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum ErrorKind
	{
		Type(String),
		Detailed
		{
			#[serde(rename = "type")]
			ty: String,
			#[serde(default)]
			message: Option<String>,
		},
	}

	match serde_json::from_slice::<ErrorBody>(body) {
		Ok(ErrorBody { error: ErrorKind::Type(ty) }) => ty,
		Ok(ErrorBody { error: ErrorKind::Detailed { ty, message: None } }) => ty,
		Ok(ErrorBody { error: ErrorKind::Detailed { ty, message: Some(message) } }) => {
			format!("{ty}: {message}")
		},
		Err(_) => String::from_utf8_lossy(body).into_owned(),
	}
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		crate::testing,
		serde_json::json,
		wiremock::{
			Mock,
			MockServer,
			ResponseTemplate,
			matchers::{body_json, header, method, path},
		},
	};

	async fn table(server: &MockServer) -> testing::Result<Table>
	{
		let api_url = format!("{}/v0", server.uri()).parse::<Url>()?;

		Ok(Client::new("secret-token", api_url).table("appBase", "Albums"))
	}

	#[tokio::test]
	async fn list_records_sends_token() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums"))
			.and(header("authorization", "Bearer secret-token"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"records": [
					{
						"id": "rec1",
						"createdTime": "2024-01-01T00:00:00.000Z",
						"fields": { "id": "1", "title": "Blue Train", "price": 56.99 },
					},
					{ "id": "rec2", "fields": {} },
				],
			})))
			.expect(1)
			.mount(&server)
			.await;

		let records = table(&server).await?.list_records().await?;

		testing::assert_eq!(records.len(), 2);
		testing::assert_eq!(records[0].id, "rec1");
		testing::assert_eq!(records[0].fields["title"], FieldValue::from("Blue Train"));
		testing::assert!(records[1].fields.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn empty_table() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": [] })))
			.mount(&server)
			.await;

		testing::assert!(table(&server).await?.list_records().await?.is_empty());

		Ok(())
	}

	#[tokio::test]
	async fn get_record_not_found_is_none() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums/recMissing"))
			.respond_with(
				ResponseTemplate::new(404).set_body_json(json!({ "error": "NOT_FOUND" })),
			)
			.mount(&server)
			.await;

		testing::assert_eq!(table(&server).await?.get_record("recMissing").await?, None);

		Ok(())
	}

	#[tokio::test]
	async fn get_record_other_errors_are_errors() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums/bad"))
			.respond_with(
				ResponseTemplate::new(422)
					.set_body_json(json!({ "error": { "type": "INVALID_RECORD_ID" } })),
			)
			.expect(1)
			.mount(&server)
			.await;

		let result = table(&server).await?.get_record("bad").await;

		testing::assert_matches!(
			result,
			Err(ApiError::Status { status: http::StatusCode::UNPROCESSABLE_ENTITY, ref message })
				if message == "INVALID_RECORD_ID"
		);

		Ok(())
	}

	#[tokio::test]
	async fn get_record_escapes_id() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums/a%2Fb"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"id": "a/b",
				"fields": { "title": "Giant Steps" },
			})))
			.expect(1)
			.mount(&server)
			.await;

		let record = table(&server).await?.get_record("a/b").await?;

		testing::assert_matches!(record, Some(Record { ref id, .. }) if id == "a/b");

		Ok(())
	}

	#[tokio::test]
	async fn backend_errors_carry_message() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums"))
			.respond_with(ResponseTemplate::new(401).set_body_json(json!({
				"error": { "type": "AUTHENTICATION_REQUIRED", "message": "Authentication required" },
			})))
			.mount(&server)
			.await;

		let Err(error) = table(&server).await?.list_records().await else {
			anyhow::bail!("unauthorized request succeeded");
		};

		testing::assert_matches!(error, ApiError::Status { status: http::StatusCode::UNAUTHORIZED, .. });
		testing::assert_eq!(
			error.to_string(),
			"Airtable responded with 401 Unauthorized: AUTHENTICATION_REQUIRED: Authentication required",
		);

		Ok(())
	}

	#[tokio::test]
	async fn add_records_posts_fields() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("POST"))
			.and(path("/v0/appBase/Albums"))
			.and(body_json(json!({
				"records": [{ "fields": { "id": "4", "title": "Kind of Blue" } }],
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"records": [{ "id": "recNew", "fields": { "id": "4", "title": "Kind of Blue" } }],
			})))
			.expect(1)
			.mount(&server)
			.await;

		let fields = Fields::from([
			(String::from("id"), FieldValue::from("4")),
			(String::from("title"), FieldValue::from("Kind of Blue")),
		]);

		let created = table(&server).await?.add_records(vec![Record::new(fields)]).await?;

		testing::assert_eq!(created.len(), 1);
		testing::assert_eq!(created[0].id, "recNew");

		Ok(())
	}

	#[tokio::test]
	async fn garbage_response_body() -> testing::Result
	{
		let server = MockServer::start().await;

		Mock::given(method("GET"))
			.and(path("/v0/appBase/Albums"))
			.respond_with(ResponseTemplate::new(200).set_body_string("not json"))
			.mount(&server)
			.await;

		let result = table(&server).await?.list_records().await;

		testing::assert_matches!(result, Err(ApiError::DeserializeResponse { .. }));

		Ok(())
	}

	#[test]
	fn error_messages()
	{
		assert_eq!(error_message(br#"{"error":"NOT_FOUND"}"#), "NOT_FOUND");
		assert_eq!(
			error_message(br#"{"error":{"type":"INVALID_REQUEST_UNKNOWN"}}"#),
			"INVALID_REQUEST_UNKNOWN",
		);
		assert_eq!(error_message(b"Bad Gateway"), "Bad Gateway");
	}
}
