//! Shared state handed to the HTTP handlers.
use crate::flux::client::{FluxClient, GenerationParams};

pub struct AppState {
    pub flux_client: FluxClient,
    pub params: GenerationParams,
    pub static_dir: String,
}
