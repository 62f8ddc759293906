use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::Result;
use reqwest::blocking::Client;

use crate::leagues_fetch::{self, USER_NOT_FOUND};
use crate::state::{Delta, League, ProviderCommand};

/// Where the provider answers lookups from.
#[derive(Debug, Clone)]
pub enum LeagueSource {
    Http { client: Client, base: String },
    Fake,
}

/// Runs lookups off the UI thread. Every `FetchLeagues` is answered with
/// exactly one `LeaguesLoaded` or `LookupFailed`, preceded by a log line.
/// The thread exits once the command sender is dropped.
pub fn spawn_league_provider(
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
    source: LeagueSource,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for cmd in cmd_rx {
            match cmd {
                ProviderCommand::FetchLeagues { username } => {
                    let delta = match lookup(&source, &username) {
                        Ok(leagues) => {
                            let _ = tx.send(Delta::Log(format!(
                                "[INFO] Found {} league(s) for {username}",
                                leagues.len()
                            )));
                            Delta::LeaguesLoaded { username, leagues }
                        }
                        Err(err) => {
                            let message = format!("{err:#}");
                            let _ = tx.send(Delta::Log(format!(
                                "[WARN] League lookup for {username} failed: {message}"
                            )));
                            Delta::LookupFailed { username, message }
                        }
                    };
                    if tx.send(delta).is_err() {
                        return;
                    }
                }
            }
        }
    })
}

fn lookup(source: &LeagueSource, username: &str) -> Result<Vec<League>> {
    match source {
        LeagueSource::Http { client, base } => {
            leagues_fetch::fetch_user_leagues(client, base, username)
        }
        LeagueSource::Fake => fake_leagues(username),
    }
}

/// Offline answers for demos: a fixed pair of dynasty leagues for anyone
/// except the `nonexistentuser` account, which is reported missing.
fn fake_leagues(username: &str) -> Result<Vec<League>> {
    if username == "nonexistentuser" {
        return Err(anyhow::anyhow!(USER_NOT_FOUND));
    }
    Ok(seed_leagues())
}

fn seed_leagues() -> Vec<League> {
    vec![
        League {
            league_id: "123456".to_string(),
            name: "Dynasty Super League".to_string(),
            season: Some("2025".to_string()),
        },
        League {
            league_id: "789012".to_string(),
            name: "Dynasty Legends".to_string(),
            season: Some("2025".to_string()),
        },
    ]
}
