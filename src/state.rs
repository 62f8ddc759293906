use std::collections::VecDeque;

use chrono::Local;
use serde::{Deserialize, Serialize};

pub const APP_TITLE: &str = "Dynasty League Analyzer";
pub const SUBMIT_LABEL: &str = "Find Leagues";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Leagues,
}

#[derive(Debug)]
pub struct AppState {
    pub username: String,
    pub leagues: Vec<League>,
    pub error: Option<String>,
    pub loading: bool,
    pub focus: Focus,
    pub selected: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            leagues: Vec::new(),
            error: None,
            loading: false,
            focus: Focus::Input,
            selected: 0,
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    /// The submit button is live only with a username and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.username.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Starts a lookup for the current username.
    ///
    /// Clears the previous error and marks the view as loading before the
    /// command leaves, so the caller only has to forward it to the provider.
    /// Returns `None` (and leaves the state untouched) while submission is
    /// disabled.
    pub fn begin_lookup(&mut self) -> Option<ProviderCommand> {
        if !self.can_submit() {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(ProviderCommand::FetchLeagues {
            username: self.username.clone(),
        })
    }

    /// Ends the current attempt as failed without a provider answer.
    pub fn fail_lookup(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.leagues.clear();
        self.selected = 0;
        self.loading = false;
        if self.focus == Focus::Leagues {
            self.focus = Focus::Input;
        }
    }

    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    pub fn push_username_char(&mut self, ch: char) {
        self.username.push(ch);
    }

    pub fn pop_username_char(&mut self) {
        self.username.pop();
    }

    pub fn clear_username(&mut self) {
        self.username.clear();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.leagues.is_empty() => Focus::Leagues,
            _ => Focus::Input,
        };
    }

    pub fn select_next(&mut self) {
        if self.leagues.is_empty() {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(self.leagues.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_league(&self) -> Option<&League> {
        self.leagues.get(self.selected)
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        let stamp = Local::now().format("%H:%M:%S");
        self.logs.push_back(format!("{stamp} {}", msg.into()));
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delta {
    LeaguesLoaded {
        username: String,
        leagues: Vec<League>,
    },
    LookupFailed {
        username: String,
        message: String,
    },
    Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCommand {
    FetchLeagues { username: String },
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::LeaguesLoaded { leagues, .. } => {
            // Replace, never append: a repeated lookup shows the same list.
            state.leagues = leagues;
            if state.selected >= state.leagues.len() {
                state.selected = 0;
            }
            if state.leagues.is_empty() && state.focus == Focus::Leagues {
                state.focus = Focus::Input;
            }
            state.loading = false;
        }
        Delta::LookupFailed { message, .. } => {
            state.fail_lookup(message);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
