//! Untyped field values as Airtable returns them.
//!
//! Airtable does not enforce a schema on the values it hands back; a "price"
//! column may contain a number, a numeric string, or nothing at all. Values are
//! therefore modeled as a [`FieldValue`] and converted into the scalar types
//! our domain uses with [`coerce_string()`] and [`coerce_price()`]. Both
//! conversions are total.

use {
	serde::{Deserialize, Deserializer, Serialize, Serializer},
	serde_json::{Number, Value as JsonValue},
	std::{collections::BTreeMap, fmt},
};

/// A record's fields, keyed by field name.
///
/// Airtable omits empty fields from its responses entirely, so a missing key
/// and [`FieldValue::Absent`] mean the same thing.
pub type Fields = BTreeMap<String, FieldValue>;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum FieldValue
{
	#[default]
	Absent,
	Bool(bool),
	Number(Number),
	Text(String),

	/// Arrays and objects (linked records, attachments, ...).
	Other(JsonValue),
}

impl FieldValue
{
	/// Looks up `name` in `fields`, treating a missing key as [`Absent`].
	///
	/// [`Absent`]: FieldValue::Absent
	pub fn get<'a>(fields: &'a Fields, name: &str) -> &'a FieldValue
	{
		static ABSENT: FieldValue = FieldValue::Absent;

		fields.get(name).unwrap_or(&ABSENT)
	}

	pub fn is_absent(&self) -> bool
	{
		matches!(self, Self::Absent)
	}
}

impl From<JsonValue> for FieldValue
{
	fn from(value: JsonValue) -> Self
	{
		match value {
			JsonValue::Null => Self::Absent,
			JsonValue::Bool(bool) => Self::Bool(bool),
			JsonValue::Number(number) => Self::Number(number),
			JsonValue::String(string) => Self::Text(string),
			value @ (JsonValue::Array(_) | JsonValue::Object(_)) => Self::Other(value),
		}
	}
}

impl From<FieldValue> for JsonValue
{
	fn from(value: FieldValue) -> Self
	{
		match value {
			FieldValue::Absent => JsonValue::Null,
			FieldValue::Bool(bool) => JsonValue::Bool(bool),
			FieldValue::Number(number) => JsonValue::Number(number),
			FieldValue::Text(string) => JsonValue::String(string),
			FieldValue::Other(value) => value,
		}
	}
}

impl From<String> for FieldValue
{
	fn from(value: String) -> Self
	{
		Self::Text(value)
	}
}

impl From<&str> for FieldValue
{
	fn from(value: &str) -> Self
	{
		Self::Text(value.to_owned())
	}
}

impl From<f64> for FieldValue
{
	/// Non-finite values have no JSON representation and become [`Absent`].
	///
	/// [`Absent`]: FieldValue::Absent
	fn from(value: f64) -> Self
	{
		Number::from_f64(value).map_or(Self::Absent, Self::Number)
	}
}

impl fmt::Display for FieldValue
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::Absent => Ok(()),
			Self::Bool(bool) => fmt::Display::fmt(bool, fmt),
			Self::Number(number) => fmt::Display::fmt(number, fmt),
			Self::Text(string) => fmt.write_str(string),
			Self::Other(value) => fmt::Display::fmt(value, fmt),
		}
	}
}

impl Serialize for FieldValue
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Self::Absent => serializer.serialize_none(),
			Self::Bool(bool) => serializer.serialize_bool(*bool),
			Self::Number(number) => number.serialize(serializer),
			Self::Text(string) => serializer.serialize_str(string),
			Self::Other(value) => value.serialize(serializer),
		}
	}
}

impl<'de> Deserialize<'de> for FieldValue
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		JsonValue::deserialize(deserializer).map(Self::from)
	}
}

/// Renders any field value as text.
///
/// Absent values render as the empty string.
pub fn coerce_string(value: &FieldValue) -> String
{
	value.to_string()
}

/// Interprets a field value as a price.
///
/// Numbers are taken as-is, strings are parsed as decimal numbers; anything
/// else (including non-finite numbers) is `0.0`.
pub fn coerce_price(value: &FieldValue) -> f64
{
	let price = match value {
		FieldValue::Number(number) => number.as_f64(),
		FieldValue::Text(text) => text.trim().parse::<f64>().ok(),
		FieldValue::Absent | FieldValue::Bool(_) | FieldValue::Other(_) => None,
	};

	price.filter(|price| price.is_finite()).unwrap_or_default()
}
