use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::config::AppConfig;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide client. The timeout comes from `LEAGUES_HTTP_TIMEOUT_SECS`
/// when the client is first built; unset means requests never time out.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| build_http_client(AppConfig::from_env().http_timeout))
}

pub fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    // The blocking builder defaults to 30s; `None` disables the timeout.
    Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build http client")
}
