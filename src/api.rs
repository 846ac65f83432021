use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::models::ApiResponse;

// Shared client, one per process
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("downtime-board/1.0")
        .build()
        .expect("Failed to create HTTP client")
});

#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered, but not with a success status.
    #[error("leaderboard fetch failed: HTTP {0}")]
    Status(StatusCode),
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("leaderboard request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not a leaderboard payload.
    #[error("leaderboard payload did not decode: {0}")]
    Schema(#[from] serde_json::Error),
}

/// One GET against the leaderboard endpoint. No parameters, no auth,
/// no retry; a failed attempt is final for this build pass.
pub async fn fetch_leaderboard(url: &str) -> Result<ApiResponse, FetchError> {
    let response = HTTP_CLIENT.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await?;
    let board: ApiResponse = serde_json::from_str(&body)?;
    Ok(board)
}
