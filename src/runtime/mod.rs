//! Process-wide setup: configuration and the panic hook.

pub mod config;
pub use config::{Config, InitializeConfigError};

pub mod panic_hook;
