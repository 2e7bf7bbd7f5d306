//! Albums, and how they are stored in Airtable.

use {
	crate::airtable::{
		FieldValue,
		Fields,
		Record,
		field::{coerce_price, coerce_string},
	},
	serde::{Deserialize, Deserializer, Serialize},
};

mod store;
pub use self::store::{CreateAlbumError, Store};

pub(crate) mod http;


/// Field names used in the Airtable table.
mod field_names
{
	pub(super) const ID: &str = "id";
	pub(super) const TITLE: &str = "title";
	pub(super) const ARTIST: &str = "artist";
	pub(super) const PRICE: &str = "price";
}

/// A record album.
///
/// Missing or `null` fields in request bodies fall back to their default
/// values, but a field of the wrong type is rejected.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album
{
	/// Caller-supplied identifier.
	///
	/// This is stored as a regular field and is unrelated to Airtable's own
	/// record ID.
	#[serde(deserialize_with = "null_as_default")]
	pub id: String,

	#[serde(deserialize_with = "null_as_default")]
	pub title: String,

	#[serde(deserialize_with = "null_as_default")]
	pub artist: String,

	#[serde(deserialize_with = "null_as_default")]
	pub price: f64,
}

impl Album
{
	/// Builds an [`Album`] from a record's fields.
	///
	/// This never fails; unexpected values are coerced.
	pub fn from_fields(fields: &Fields) -> Self
	{
		Self {
			id: coerce_string(FieldValue::get(fields, field_names::ID)),
			title: coerce_string(FieldValue::get(fields, field_names::TITLE)),
			artist: coerce_string(FieldValue::get(fields, field_names::ARTIST)),
			price: coerce_price(FieldValue::get(fields, field_names::PRICE)),
		}
	}

	/// Builds the fields we submit to Airtable for this album.
	pub fn to_fields(&self) -> Fields
	{
		Fields::from([
			(String::from(field_names::ID), FieldValue::from(self.id.as_str())),
			(String::from(field_names::TITLE), FieldValue::from(self.title.as_str())),
			(String::from(field_names::ARTIST), FieldValue::from(self.artist.as_str())),
			(String::from(field_names::PRICE), FieldValue::from(self.price)),
		])
	}
}

impl From<&Record> for Album
{
	fn from(record: &Record) -> Self
	{
		Self::from_fields(&record.fields)
	}
}

impl From<&Album> for Record
{
	fn from(album: &Album) -> Self
	{
		Record::new(album.to_fields())
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
