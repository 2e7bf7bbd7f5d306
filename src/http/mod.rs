//! HTTP plumbing shared by all handlers.

pub(crate) mod json;
pub(crate) mod middleware;
pub(crate) mod response;

pub(crate) use self::{
	json::Json,
	response::{Created, HandlerError, HandlerResult},
};
