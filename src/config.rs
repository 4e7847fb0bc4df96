//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
use std::env;
use dotenv;

pub const DEFAULT_FLUX_SPACE_URL: &str = "https://black-forest-labs-flux-1-schnell.hf.space";

pub struct Config {
    pub flux_space_url: String,
    pub static_dir: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            flux_space_url: env::var("FLUX_SPACE_URL").unwrap_or_else(|_| DEFAULT_FLUX_SPACE_URL.to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "3000".to_string()),
        })
    }
    pub fn print_env_vars() {
        println!("FLUX_SPACE_URL: {}", env::var("FLUX_SPACE_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("STATIC_DIR: {}", env::var("STATIC_DIR").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
