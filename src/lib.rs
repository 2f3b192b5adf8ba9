//! Health and version HTTP service.
//!
//! Serves exactly two routes, statelessly:
//!
//! - `GET /healthz` — liveness probe, always `200` with `{"status":"ok"}`
//! - `GET /version` — the `APP_VERSION` environment variable as plain text,
//!   or `unknown` when it is unset or empty
//!
//! The version is re-read from the environment on every request, so an
//! updated value is reflected without a restart.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes and handlers

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, Result};
