use std::io;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use player_guesser::loader::spawn_loader;
use player_guesser::players::DataOrigin;
use player_guesser::source::Source;
use player_guesser::state::{apply_delta, AppState, Delta};
use player_guesser::theme::{ui_default_from_env, FilePrefStore, Palette, ThemeToggle};
use player_guesser::view::{club_lines, problem_label};

const CONSOLE_HEIGHT: u16 = 8;

struct App {
    state: AppState,
    should_quit: bool,
    clubs_visible: usize,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
            clubs_visible: 0,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char(' ') => self.state.reveal(),
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Right => self.state.next_player(),
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_clubs_down(self.clubs_visible),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_clubs_up(),
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.state.toggle_theme();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.state.console_open = !self.state.console_open
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let theme = ThemeToggle::init(Box::new(FilePrefStore::new()), ui_default_from_env());
    let mut app = App::new(AppState::new(theme));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    spawn_loader(tx, Source::from_env());

    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
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
        app.clubs_visible = clubs_rows(terminal.size()?, app.state.console_open);

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

fn screen_chunks(area: Rect, console_open: bool) -> Rc<[Rect]> {
    let console = if console_open { CONSOLE_HEIGHT } else { 0 };
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(console),
            Constraint::Length(2),
        ])
        .split(area)
}

// Rows available for clubs inside the bordered list.
fn clubs_rows(area: Rect, console_open: bool) -> usize {
    let chunks = screen_chunks(area, console_open);
    chunks[1].height.saturating_sub(2) as usize
}

fn ui(frame: &mut Frame, state: &AppState) {
    let palette = state.theme.theme().palette();
    let base = Style::default().fg(palette.fg).bg(palette.bg);
    frame.render_widget(Block::default().style(base), frame.size());

    let chunks = screen_chunks(frame.size(), state.console_open);

    let header = Paragraph::new(header_lines(state, &palette))
        .style(base)
        .block(Block::default().borders(Borders::BOTTOM).style(base));
    frame.render_widget(header, chunks[0]);

    render_clubs(frame, chunks[1], state, &palette);
    render_answer(frame, chunks[2], state, &palette);

    if state.console_open {
        render_console(frame, chunks[3], state, &palette);
    }

    let footer = Paragraph::new(footer_text(state))
        .style(Style::default().fg(palette.muted).bg(palette.bg))
        .block(Block::default().borders(Borders::TOP).style(base));
    frame.render_widget(footer, chunks[4]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size(), &palette);
    }
}

fn header_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let progress = match &state.session {
        Some(session) => format!("Player {}/{}", session.position() + 1, session.len()),
        None => "Loading...".to_string(),
    };
    let origin = match &state.origin {
        Some(DataOrigin::Loaded { source }) => source.clone(),
        Some(DataOrigin::Fallback { .. }) => "demo data".to_string(),
        None => String::new(),
    };
    let pressed = if state.theme.pressed() { "[x]" } else { "[ ]" };
    let mut title = vec![
        Span::styled(
            "GUESS THE PLAYER",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {progress} | {origin}")),
    ];
    if let Some(problems) = problem_label(state.problem_count()) {
        title.push(Span::styled(
            format!(" | {problems}"),
            Style::default().fg(palette.warn),
        ));
    }
    let toggle = Line::from(Span::styled(
        format!("{pressed} t: {}", state.theme.label()),
        Style::default().fg(palette.muted),
    ));
    vec![Line::from(title), toggle]
}

fn footer_text(state: &AppState) -> String {
    if state.session.is_none() {
        return "c Console | t Theme | ? Help | q Quit".to_string();
    }
    "r/Space Reveal | n/Enter Next | j/k Scroll | t Theme | c Console | ? Help | q Quit"
        .to_string()
}

fn render_clubs(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title("Clubs")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().fg(palette.fg).bg(palette.bg));

    let Some(session) = &state.session else {
        let text = if state.loading {
            "Loading players..."
        } else {
            "No players available"
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(palette.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let clubs = Paragraph::new(club_lines(session.clubs(), palette))
        .block(block)
        .scroll((session.clubs_scroll(), 0));
    frame.render_widget(clubs, area);
}

fn render_answer(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default()
        .title("Answer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().fg(palette.fg).bg(palette.bg));

    let (text, style) = match state.session.as_ref().and_then(|s| s.answer()) {
        Some(name) => (
            name.to_string(),
            Style::default()
                .fg(palette.answer)
                .add_modifier(Modifier::BOLD),
        ),
        None => ("???".to_string(), Style::default().fg(palette.muted)),
    };
    let answer = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(answer, area);
}

fn render_console(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = state
        .logs
        .iter()
        .skip(start)
        .map(|line| {
            let style = if line.starts_with("[WARN]") || line.starts_with("[ERROR]") {
                Style::default().fg(palette.warn)
            } else {
                Style::default().fg(palette.muted)
            };
            Line::from(Span::styled(line.clone(), style))
        })
        .collect();

    let console = Paragraph::new(lines).block(
        Block::default()
            .title("Console")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(palette.bg)),
    );
    frame.render_widget(console, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Guess the Player - Help",
        "",
        "Name the player from their career path.",
        "",
        "  r / Space        Reveal the answer",
        "  n / Enter / →    Next player",
        "  j/k or ↑/↓       Scroll clubs",
        "  t                Toggle light/dark theme",
        "  c                Toggle console",
        "  ?                Toggle help",
        "  q / Esc          Quit",
        "",
        "Data: PLAYERS_SOURCE (path or URL), default data/players.json",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default().fg(palette.fg).bg(palette.bg));
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
