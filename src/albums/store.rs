use {
	super::Album,
	crate::airtable::{ApiError, Record, RecordStore},
};

/// Mediates between the HTTP handlers and the backing table.
///
/// Every operation makes exactly one call to the backend.
#[derive(Debug, Clone)]
pub struct Store<T>
{
	table: T,
}

#[derive(Debug, Display, Error, From)]
pub enum CreateAlbumError
{
	#[display("{_0}")]
	Backend(ApiError),

	#[display("backend accepted the album but returned no records")]
	#[from(ignore)]
	NothingCreated,
}

impl<T: RecordStore> Store<T>
{
	pub fn new(table: T) -> Self
	{
		Self { table }
	}

	/// Fetches every album in the table.
	#[instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn list_albums(&self) -> Result<Vec<Album>, ApiError>
	{
		let records = self.table.list_records().await?;

		Ok(records.iter().map(Album::from).collect())
	}

	/// Fetches a single album by its Airtable record ID.
	#[instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn get_album(&self, record_id: &str) -> Result<Option<Album>, ApiError>
	{
		let record = self.table.get_record(record_id).await?;

		Ok(record.as_ref().map(Album::from))
	}

	/// Creates a new album and returns it the way the backend stored it.
	#[instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn create_album(&self, album: &Album) -> Result<Album, CreateAlbumError>
	{
		let created = self.table.add_records(vec![Record::from(album)]).await?;
		let record = created.first().ok_or(CreateAlbumError::NothingCreated)?;

		info!(record.id = %record.id, album.id = %album.id, "created album");

		Ok(Album::from(record))
	}
}
