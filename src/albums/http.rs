//! HTTP handlers for the `/albums` endpoints.

use {
	super::{Album, CreateAlbumError, Store},
	crate::{
		airtable::RecordStore,
		http::{Created, HandlerError, HandlerResult, Json},
	},
	axum::{
		Router,
		extract::{Path, State},
		routing,
	},
};

impl<T: RecordStore> From<Store<T>> for Router
{
	fn from(store: Store<T>) -> Self
	{
		Router::new()
			.route("/albums", routing::get(get_albums::<T>).post(create_album::<T>))
			.route("/albums/{id}", routing::get(get_album::<T>))
			.with_state(store)
	}
}

/// Fetch every album.
#[instrument(skip(store), err(Debug, level = "debug"))]
async fn get_albums<T: RecordStore>(State(store): State<Store<T>>) -> HandlerResult<Json<Vec<Album>>>
{
	store
		.list_albums()
		.await
		.map(Json)
		.map_err(|error| HandlerError::Backend(error.to_string()))
}

/// Fetch a single album by its record ID.
#[instrument(skip(store), err(Debug, level = "debug"))]
async fn get_album<T: RecordStore>(
	State(store): State<Store<T>>,
	Path(id): Path<String>,
) -> HandlerResult<Json<Album>>
{
	match store.get_album(&id).await {
		Ok(Some(album)) => Ok(Json(album)),
		Ok(None) => Err(HandlerError::NotFound("album not found")),
		Err(error) => Err(HandlerError::Backend(error.to_string())),
	}
}

/// Create a new album.
///
/// The response reflects what the backend stored, which is not necessarily
/// identical to the request body.
#[instrument(skip(store), err(Debug, level = "debug"))]
async fn create_album<T: RecordStore>(
	State(store): State<Store<T>>,
	Json(album): Json<Album>,
) -> HandlerResult<Created<Album>>
{
	store.create_album(&album).await.map(Created).map_err(|error| {
		match error {
			CreateAlbumError::Backend(ref error) => {
				error!(%error, "failed to create album");
			},
			CreateAlbumError::NothingCreated => {
				error!("backend did not return the created album");
			},
		}

		HandlerError::Internal("failed to create album")
	})
}
