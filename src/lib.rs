//! # EcoMaps
//!
//! Map and register recycling collection points.
//!
//! The application itself is the Leptos single-page app in `ecomaps-ui/`.
//! This crate is the host process that serves the compiled bundle.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`server`]: Axum server for the frontend bundle and health checks

pub mod config;
pub mod logging;
pub mod server;

pub use config::{Config, ConfigError, LogFormat, LoggingConfig, ServerConfig, UiConfig};
pub use server::{build_router, serve, AppState, ServerError, ServerResult};
