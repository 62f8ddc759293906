use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;

use dynasty_terminal::config::{AppConfig, SourceKind};
use dynasty_terminal::http_client::http_client;
use dynasty_terminal::provider::{LeagueSource, spawn_league_provider};
use dynasty_terminal::state::{AppState, Delta, Focus, ProviderCommand, apply_delta};
use dynasty_terminal::ui::ui;

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') if self.state.focus == Focus::Input => {
                    self.state.clear_username()
                }
                _ => {}
            }
            return;
        }

        if key.code == KeyCode::F(1) {
            self.state.help_overlay = !self.state.help_overlay;
            return;
        }

        match self.state.focus {
            Focus::Input => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.state.toggle_focus(),
                KeyCode::Backspace => self.state.pop_username_char(),
                KeyCode::Char(ch) => self.state.push_username_char(ch),
                _ => {}
            },
            Focus::Leagues => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
                KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
                KeyCode::Tab | KeyCode::Esc => self.state.toggle_focus(),
                _ => {}
            },
        }
    }

    fn submit(&mut self) {
        let Some(cmd) = self.state.begin_lookup() else {
            return;
        };
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[WARN] League lookup unavailable");
            self.state.fail_lookup("League lookup unavailable");
            return;
        };
        if tx.send(cmd).is_err() {
            self.state.push_log("[WARN] League lookup request failed");
            self.state.fail_lookup("League lookup unavailable");
        } else {
            let username = self.state.username.clone();
            self.state
                .push_log(format!("[INFO] Looking up leagues for {username}"));
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = AppConfig::from_env();

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let mut startup_warning = None;
    let cmd_tx = match league_source(&config) {
        Ok(source) => {
            spawn_league_provider(tx, cmd_rx, source);
            Some(cmd_tx)
        }
        Err(err) => {
            startup_warning = Some(format!("[WARN] HTTP client unavailable: {err:#}"));
            None
        }
    };

    let mut app = App::new(cmd_tx);
    match config.source {
        SourceKind::Http => app
            .state
            .push_log(format!("[INFO] Backend {}", config.api_base)),
        SourceKind::Fake => app.state.push_log("[INFO] Using built-in demo leagues"),
    }
    if let Some(warning) = startup_warning {
        app.state.push_log(warning);
    }

    let mut terminal = undo_on_error(setup_terminal, restore_terminal)?;

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

// Best effort; the setup error is the one worth reporting.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Runs `setup`, calling `undo` before returning its error so a half-done
/// setup never leaves the terminal in raw mode.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| undo())
}

fn league_source(config: &AppConfig) -> anyhow::Result<LeagueSource> {
    match config.source {
        SourceKind::Fake => Ok(LeagueSource::Fake),
        SourceKind::Http => Ok(LeagueSource::Http {
            client: http_client()?.clone(),
            base: config.api_base.clone(),
        }),
    }
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
