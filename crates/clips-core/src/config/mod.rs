//! # Configuration data
//!
//! Configuration structures and the TOML → DTO mapping. Reading files and
//! deciding precedence between sources belongs to the bootstrap layer.

mod app_config;

pub use app_config::{AppConfig, DEFAULT_HOST, DEFAULT_PORT};
