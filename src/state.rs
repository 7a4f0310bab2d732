use std::collections::VecDeque;

use crate::players::{DataOrigin, LoadOutcome};
use crate::session::Session;
use crate::theme::{Theme, ThemeToggle};

const MAX_LOGS: usize = 200;

#[derive(Debug)]
pub enum Delta {
    Log(String),
    Players(LoadOutcome),
}

pub struct AppState {
    pub session: Option<Session>,
    pub origin: Option<DataOrigin>,
    pub loading: bool,
    pub logs: VecDeque<String>,
    pub console_open: bool,
    pub help_overlay: bool,
    pub theme: ThemeToggle,
}

impl AppState {
    pub fn new(theme: ThemeToggle) -> Self {
        Self {
            session: None,
            origin: None,
            loading: true,
            logs: VecDeque::with_capacity(MAX_LOGS),
            console_open: false,
            help_overlay: false,
            theme,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    /// Console lines tagged `[WARN]` or `[ERROR]`.
    pub fn problem_count(&self) -> usize {
        self.logs
            .iter()
            .filter(|line| line.starts_with("[WARN]") || line.starts_with("[ERROR]"))
            .count()
    }

    pub fn reveal(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reveal();
        }
    }

    pub fn next_player(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.next();
        }
    }

    pub fn scroll_clubs_down(&mut self, visible: usize) {
        if let Some(session) = self.session.as_mut() {
            session.scroll_clubs_down(visible);
        }
    }

    pub fn scroll_clubs_up(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.scroll_clubs_up();
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.push_log(format!("[INFO] Theme set to {}", theme.label()));
        theme
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, Some(DataOrigin::Fallback { .. }))
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::Log(msg) => state.push_log(msg),
        Delta::Players(outcome) => {
            for line in outcome.log {
                state.push_log(line);
            }
            state.loading = false;
            match Session::start(outcome.players) {
                Some(session) => {
                    state.session = Some(session);
                    state.origin = Some(outcome.origin);
                }
                None => state.push_log("[ERROR] Loaded data set is empty"),
            }
        }
    }
}
