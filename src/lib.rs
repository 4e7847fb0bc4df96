//! FLUX Prompt Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and shared state used by the binary.
//! - `enrich`: Pure prompt enrichment (keyword classifier + clause composer).
//! - `flux`: Thin client for a FLUX.1-schnell Gradio Space.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `FluxClient`,
//! `GenerationParams`, and the `enrich` entry point.
pub mod api;
pub mod enrich;
pub mod flux;
pub mod config;
pub mod error;

pub use config::Config;
pub use enrich::enrich;
pub use flux::client::{FluxClient, GenerationParams};
