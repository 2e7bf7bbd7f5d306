//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup. See the `.env.example`
//! file in the root of the repository for examples.

use {
	crate::airtable,
	std::{env, fmt, str::FromStr, sync::Arc},
	url::Url,
};

/// The API's runtime configuration.
///
/// See [module level docs] for more details.
///
/// [module level docs]: crate::runtime::config
#[derive(Clone)]
pub struct Config
{
	/// [`Inner`] actually contains all the values, we just wrap it so
	/// [`Config`] is cheap to clone.
	inner: Arc<Inner>,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Display, Error)]
pub enum InitializeConfigError
{
	/// A required environment variable was not found or invalid
	/// UTF-8.
	#[display("failed to read `{var}`: {source}")]
	Env
	{
		var: &'static str,
		source: env::VarError,
	},

	/// A required configuration option was empty.
	#[display("`{_0}` cannot be empty")]
	EmptyValue(#[error(not(source))] &'static str),

	/// A configuration option could not be parsed into the required type.
	#[display("failed to parse `{var}`: {error}")]
	Parse
	{
		var: &'static str,
		error: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Initializes a [`Config`] by reading and parsing environment variables.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let airtable_token = parse_from_env::<String>("AIRTABLE_TOKEN")?;
		let airtable_base_id = parse_from_env::<String>("AIRTABLE_BASE_ID")?;
		let airtable_table = parse_from_env::<String>("AIRTABLE_TABLE")?;
		let airtable_api_url = parse_api_url("AIRTABLE_API_URL")?;

		Ok(Self {
			inner: Arc::new(Inner {
				airtable_token,
				airtable_base_id,
				airtable_table,
				airtable_api_url,
			}),
		})
	}

	pub fn airtable_token(&self) -> &str
	{
		&self.inner.airtable_token
	}

	pub fn airtable_base_id(&self) -> &str
	{
		&self.inner.airtable_base_id
	}

	pub fn airtable_table(&self) -> &str
	{
		&self.inner.airtable_table
	}

	pub fn airtable_api_url(&self) -> &Url
	{
		&self.inner.airtable_api_url
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Config")
			.field("airtable_token", &"<redacted>")
			.field("airtable_base_id", &self.airtable_base_id())
			.field("airtable_table", &self.airtable_table())
			.field("airtable_api_url", &format_args!("{:?}", self.airtable_api_url().as_str()))
			.finish()
	}
}

struct Inner
{
	/// Personal access token used to authenticate with Airtable.
	///
	/// Create one here: <https://airtable.com/create/tokens>
	airtable_token: String,

	/// The ID of the base (`app...`) containing the album table.
	airtable_base_id: String,

	/// Name or ID of the album table.
	airtable_table: String,

	/// Root URL of Airtable's REST API.
	airtable_api_url: Url,
}

fn default_api_url() -> Result<Url, InitializeConfigError>
{
	airtable::DEFAULT_API_URL
		.parse::<Url>()
		.map_err(|error| InitializeConfigError::Parse { var: "AIRTABLE_API_URL", error: Box::new(error) })
}

/// Reads the Airtable API URL from `var`, falling back to the public API.
///
/// Record paths are appended as path segments, so the URL must be able to
/// carry them.
fn parse_api_url(var: &'static str) -> Result<Url, InitializeConfigError>
{
	let url = parse_from_env_opt::<Url>(var)?.map_or_else(default_api_url, Ok)?;

	if url.cannot_be_a_base() {
		return Err(InitializeConfigError::Parse {
			var,
			error: Box::from(format!("`{url}` cannot be used as a base URL")),
		});
	}

	Ok(url)
}

/// Reads and parses an environment variable.
fn parse_from_env<T>(var: &'static str) -> Result<T, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let value = env::var(var).map_err(|source| InitializeConfigError::Env { var, source })?;

	if value.is_empty() {
		return Err(InitializeConfigError::EmptyValue(var));
	}

	value
		.parse::<T>()
		.map_err(|error| InitializeConfigError::Parse { var, error: Box::new(error) })
}

/// Reads and parses an environment variable.
///
/// Returns [`None`] if a variable does not exist or is empty.
fn parse_from_env_opt<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let Some(value) = env::var(var).ok() else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	value
		.parse::<T>()
		.map(Some)
		.map_err(|error| InitializeConfigError::Parse { var, error: Box::new(error) })
}
