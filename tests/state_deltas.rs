use player_guesser::players::{DataOrigin, LoadOutcome, PlayerRecord, demo_players};
use player_guesser::state::{AppState, Delta, apply_delta};
use player_guesser::theme::{MemoryPrefStore, Theme, ThemeToggle};

fn state() -> AppState {
    AppState::new(ThemeToggle::init(Box::new(MemoryPrefStore::new()), None))
}

fn outcome(players: Vec<PlayerRecord>, origin: DataOrigin) -> LoadOutcome {
    LoadOutcome {
        players,
        origin,
        log: vec!["[WARN] Invalid player entry at index 1: expected an object".to_string()],
    }
}

#[test]
fn transitions_are_noops_while_loading() {
    let mut state = state();
    assert!(state.loading);
    state.reveal();
    state.next_player();
    state.scroll_clubs_down(1);
    assert!(state.session.is_none());
}

#[test]
fn players_delta_starts_session() {
    let mut state = state();
    apply_delta(&mut state, Delta::Log("[INFO] Loading players".to_string()));
    apply_delta(
        &mut state,
        Delta::Players(outcome(
            vec![
                PlayerRecord::new("A", &["X"]),
                PlayerRecord::new("B", &["Y", "Z"]),
            ],
            DataOrigin::Loaded {
                source: "data/players.json".to_string(),
            },
        )),
    );

    assert!(!state.loading);
    assert!(!state.is_fallback());
    assert_eq!(state.logs.len(), 2);
    assert_eq!(state.problem_count(), 1);

    let session = state.session.as_ref().expect("session started");
    assert_eq!(session.len(), 2);
    assert_eq!(session.position(), 0);
    assert!(!session.is_revealed());

    state.reveal();
    assert!(state.session.as_ref().is_some_and(|s| s.is_revealed()));
    state.next_player();
    let session = state.session.as_ref().expect("session started");
    assert_eq!(session.position(), 1);
    assert!(!session.is_revealed());
}

#[test]
fn fallback_origin_is_tracked() {
    let mut state = state();
    apply_delta(
        &mut state,
        Delta::Players(outcome(
            demo_players(),
            DataOrigin::Fallback {
                reason: "no valid player entries found".to_string(),
            },
        )),
    );
    assert!(state.is_fallback());
    assert_eq!(state.session.as_ref().map(|s| s.len()), Some(3));
}

#[test]
fn empty_players_delta_leaves_no_session() {
    let mut state = state();
    apply_delta(
        &mut state,
        Delta::Players(outcome(
            Vec::new(),
            DataOrigin::Loaded {
                source: "x".to_string(),
            },
        )),
    );
    assert!(!state.loading);
    assert!(state.session.is_none());
    assert!(state.logs.iter().any(|l| l.starts_with("[ERROR]")));
}

#[test]
fn logs_are_capped() {
    let mut state = state();
    for i in 0..250 {
        state.push_log(format!("[INFO] line {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

#[test]
fn theme_toggle_logs_change() {
    let mut state = state();
    assert_eq!(state.toggle_theme(), Theme::Light);
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] Theme set to light"));
}

#[test]
fn problem_count_includes_errors_but_not_info() {
    let mut state = state();
    state.push_log("[INFO] Loading players");
    state.push_log("[WARN] Invalid player name at index 0: expected a string");
    state.push_log("[ERROR] Loading players from x: no valid player entries found");
    assert_eq!(state.problem_count(), 2);
}
