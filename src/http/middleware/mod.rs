pub(crate) mod panic_handler;
pub(crate) mod request_id;
pub(crate) mod trace;
