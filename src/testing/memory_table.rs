use {
	crate::airtable::{self, ApiError, Record, RecordStore},
	std::sync::{Arc, Mutex, PoisonError},
};

/// An in-memory stand-in for an Airtable table.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryTable
{
	inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner
{
	records: Vec<Record>,
	next_id: usize,

	/// Use this field's value as the record ID for created records.
	key_field: Option<&'static str>,

	/// Every call fails with this status.
	failure: Option<(http::StatusCode, &'static str)>,

	/// `add_records` stores the records but reports none as created.
	swallow_created: bool,

	/// Applied to records before they are stored.
	on_create: Option<fn(&mut airtable::Fields)>,

	calls: usize,
}

impl MemoryTable
{
	pub(crate) fn new() -> Self
	{
		Self::default()
	}

	pub(crate) fn with_records(records: impl IntoIterator<Item = Record>) -> Self
	{
		let table = Self::new();
		table.lock().records.extend(records);
		table
	}

	pub(crate) fn keyed_by(self, field: &'static str) -> Self
	{
		self.lock().key_field = Some(field);
		self
	}

	pub(crate) fn failing(self, status: http::StatusCode, message: &'static str) -> Self
	{
		self.lock().failure = Some((status, message));
		self
	}

	pub(crate) fn swallowing_created(self) -> Self
	{
		self.lock().swallow_created = true;
		self
	}

	pub(crate) fn on_create(self, transform: fn(&mut airtable::Fields)) -> Self
	{
		self.lock().on_create = Some(transform);
		self
	}

	pub(crate) fn records(&self) -> Vec<Record>
	{
		self.lock().records.clone()
	}

	/// How many backend calls have been made.
	pub(crate) fn calls(&self) -> usize
	{
		self.lock().calls
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, Inner>
	{
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn begin_call(&self) -> airtable::Result<std::sync::MutexGuard<'_, Inner>>
	{
		let mut inner = self.lock();
		inner.calls += 1;

		match inner.failure {
			Some((status, message)) => Err(ApiError::Status { status, message: message.to_owned() }),
			None => Ok(inner),
		}
	}
}

impl RecordStore for MemoryTable
{
	async fn list_records(&self) -> airtable::Result<Vec<Record>>
	{
		self.begin_call().map(|inner| inner.records.clone())
	}

	async fn get_record(&self, id: &str) -> airtable::Result<Option<Record>>
	{
		self.begin_call()
			.map(|inner| inner.records.iter().find(|record| record.id == id).cloned())
	}

	async fn add_records(&self, records: Vec<Record>) -> airtable::Result<Vec<Record>>
	{
		let mut inner = self.begin_call()?;
		let mut created = Vec::with_capacity(records.len());

		for mut record in records {
			if let Some(transform) = inner.on_create {
				transform(&mut record.fields);
			}

			inner.next_id += 1;
			record.id = inner
				.key_field
				.map(|field| airtable::field::coerce_string(airtable::FieldValue::get(&record.fields, field)))
				.filter(|id| !id.is_empty())
				.unwrap_or_else(|| format!("rec{:014}", inner.next_id));
			record.created_time = Some(String::from("2024-01-01T00:00:00.000Z"));

			inner.records.push(record.clone());
			created.push(record);
		}

		if inner.swallow_created {
			created.clear();
		}

		Ok(created)
	}
}
