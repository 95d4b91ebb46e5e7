//! Configuration management for wirecase.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from `wirecase/.env` in the local data
/// directory.
///
/// The directory is created when missing. A missing `.env` file is not an
/// error, variables already set in the environment are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/wirecase/.env`
/// - macOS: `~/Library/Application Support/wirecase/.env`
/// - Windows: `%LOCALAPPDATA%/wirecase/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the base URL of the backend API (`WIRECASE_API_URL`).
///
/// # Example
///
/// ```
/// let url = api_url()?; // e.g., "https://api.example.com"
/// ```
pub fn api_url() -> Result<String, String> {
    match env::var("WIRECASE_API_URL") {
        Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
        _ => Err("WIRECASE_API_URL must be set".to_string()),
    }
}

/// Returns the bind address of the local mock API
/// (`WIRECASE_SERVER_ADDRESS`, default `127.0.0.1:8080`).
pub fn server_addr() -> String {
    env::var("WIRECASE_SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wirecase/.env");
    path
}
