use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use dynasty_terminal::leagues_fetch::parse_leagues_json;
use dynasty_terminal::state::{AppState, Delta, League, apply_delta};
use dynasty_terminal::ui::ui;

fn many_leagues_json(count: usize) -> String {
    let rows: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"league_id":"{i}","name":"League {i}","season":"2025","status":"in_season","settings":{{"teams":12}}}}"#
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

fn bench_fixture_parse(c: &mut Criterion) {
    c.bench_function("user_leagues_parse", |b| {
        b.iter(|| {
            let leagues = parse_leagues_json(black_box(USER_LEAGUES_JSON)).unwrap();
            black_box(leagues.len());
        })
    });
}

fn bench_large_list_parse(c: &mut Criterion) {
    let raw = many_leagues_json(500);
    c.bench_function("user_leagues_parse_500", |b| {
        b.iter(|| {
            let leagues = parse_leagues_json(black_box(&raw)).unwrap();
            black_box(leagues.len());
        })
    });
}

fn bench_frame_render(c: &mut Criterion) {
    let leagues: Vec<League> = parse_leagues_json(&many_leagues_json(50)).unwrap();
    let mut state = AppState::new();
    state.username = "testuser".to_string();
    apply_delta(
        &mut state,
        Delta::LeaguesLoaded {
            username: "testuser".to_string(),
            leagues,
        },
    );
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    c.bench_function("frame_render", |b| {
        b.iter(|| {
            terminal.draw(|f| ui(f, black_box(&state))).unwrap();
        })
    });
}

criterion_group!(
    perf,
    bench_fixture_parse,
    bench_large_list_parse,
    bench_frame_render
);
criterion_main!(perf);

static USER_LEAGUES_JSON: &str = include_str!("../tests/fixtures/user_leagues.json");
