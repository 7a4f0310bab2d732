use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::Palette;

/// One badge per club, in career order, with no numbering.
pub fn club_lines<'a>(clubs: &'a [String], palette: &Palette) -> Vec<Line<'a>> {
    let badge = Style::default().fg(palette.badge_fg).bg(palette.badge_bg);
    clubs
        .iter()
        .map(|club| Line::from(vec![Span::raw(" "), Span::styled(format!(" {club} "), badge)]))
        .collect()
}

/// Header note for the console's `[WARN]`/`[ERROR]` lines; `None` when clean.
pub fn problem_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 issue (c)".to_string()),
        n => Some(format!("{n} issues (c)")),
    }
}
