use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, transport::ApiClient};

use super::document;

/// Sends a JSON document through the standard encoding and prints the
/// decoded response.
pub async fn post(path: String, file: Option<PathBuf>) {
    let client = match ApiClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("{}. Add it to your environment or the wirecase .env file.", e),
    };

    let body = document::load(file).await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("POST {}", client.url_for(&path)));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = client.post_value(&path, &body).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => document::print(&response),
        Err(e) => error!("Request to {} failed. Err: {}", path, e),
    }
}
