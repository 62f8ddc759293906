use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{APP_TITLE, AppState, Focus, League};

pub const USERNAME_LABEL: &str = "Sleeper Username";
pub const USERNAME_PLACEHOLDER: &str = "Enter your Sleeper username";
pub const LEAGUES_HEADING: &str = "Select a league to analyze";

const MAX_ERROR_ROWS: u16 = 4;

pub fn ui(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(error_rows(state, area.width)),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(APP_TITLE)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_username_input(frame, chunks[1], state);
    frame.render_widget(submit_button(state), chunks[2]);

    if let Some(error) = state.visible_error() {
        let error = Paragraph::new(error)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[3]);
    }

    if !state.leagues.is_empty() {
        render_leagues(frame, chunks[4], state);
    }

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[5]);

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[6]);

    if state.help_overlay {
        render_help_overlay(frame, area);
    }
}

// Transport errors carry the whole cause chain; give them room to wrap.
fn error_rows(state: &AppState, width: u16) -> u16 {
    let Some(error) = state.visible_error() else {
        return 1;
    };
    if width == 0 {
        return 1;
    }
    let mut needed = error.width().div_ceil(width as usize);
    if needed > 1 {
        // Word wrapping rarely packs rows full.
        needed += 1;
    }
    u16::try_from(needed)
        .unwrap_or(u16::MAX)
        .clamp(1, MAX_ERROR_ROWS)
}

fn render_username_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Input;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(USERNAME_LABEL)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let shown = visible_tail(&state.username, inner.width as usize);
    let typed = u16::try_from(shown.width()).unwrap_or(u16::MAX);
    let input = if state.username.is_empty() {
        Paragraph::new(USERNAME_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(shown)
    };
    frame.render_widget(input.block(block), area);

    if focused && !state.help_overlay && inner.width > 0 && inner.height > 0 {
        let x = inner.x.saturating_add(typed.min(inner.width.saturating_sub(1)));
        frame.set_cursor(x, inner.y);
    }
}

// Keeps the end of the username in view once it outgrows the box, leaving
// one cell for the cursor. Widths are display columns, not chars.
fn visible_tail(text: &str, width: usize) -> &str {
    if width == 0 || text.width() < width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w >= width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

fn submit_button(state: &AppState) -> Paragraph<'static> {
    let style = if state.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(format!("[ {} ]", state.submit_label())).style(style)
}

fn render_leagues(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.focus == Focus::Leagues {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let items: Vec<ListItem> = state.leagues.iter().map(league_item).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .title(LEAGUES_HEADING)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .highlight_symbol("> ");

    let selected = state.selected.min(state.leagues.len().saturating_sub(1));
    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn league_item(league: &League) -> ListItem<'static> {
    let mut spans = vec![Span::raw(league.name.clone())];
    if let Some(season) = league.season.as_deref().filter(|s| !s.is_empty()) {
        spans.push(Span::styled(
            format!("  {season}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No activity yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer_text(state: &AppState) -> &'static str {
    match state.focus {
        Focus::Input => "Enter Find | Tab Leagues | Ctrl+U Clear | F1 Help | Esc Quit",
        Focus::Leagues => "j/k/↑/↓ Move | Tab/Esc Back | F1 Help | q Quit",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Dynasty League Analyzer - Help",
        "",
        "Username:",
        "  type         Edit username",
        "  Enter        Find leagues",
        "  Ctrl+U       Clear username",
        "  Tab          Focus league list",
        "  Esc          Quit",
        "",
        "Leagues:",
        "  j/k or ↑/↓   Move",
        "  Tab / Esc    Back to username",
        "  q            Quit",
        "",
        "  F1           Toggle help",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
