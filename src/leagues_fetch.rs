use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::state::League;

pub const USER_NOT_FOUND: &str = "User not found";

/// `{base}/leagues/user/{username}` with the username substituted as typed.
pub fn leagues_url(base: &str, username: &str) -> String {
    format!("{}/leagues/user/{username}", base.trim_end_matches('/'))
}

pub fn fetch_user_leagues(client: &Client, base: &str, username: &str) -> Result<Vec<League>> {
    let url = leagues_url(base, username);
    let resp = client.get(&url).send().context("request failed")?;
    if !resp.status().is_success() {
        // Any non-2xx is reported the same way; the body is not consulted.
        return Err(anyhow::anyhow!(USER_NOT_FOUND));
    }
    let body = resp.text().context("failed reading body")?;
    parse_leagues_json(&body)
}

pub fn parse_leagues_json(raw: &str) -> Result<Vec<League>> {
    serde_json::from_str(raw.trim()).context("invalid leagues json")
}
