use ratatui::text::Line;

use player_guesser::theme::Theme;
use player_guesser::view::{club_lines, problem_label};

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn club_lines_are_unnumbered_badges_in_order() {
    let clubs = vec![
        "Sporting CP".to_string(),
        "Manchester United".to_string(),
        "Real Madrid".to_string(),
    ];
    let palette = Theme::Dark.palette();
    let lines = club_lines(&clubs, &palette);

    let texts: Vec<String> = lines.iter().map(line_text).collect();
    assert_eq!(
        texts,
        vec!["  Sporting CP ", "  Manchester United ", "  Real Madrid "]
    );
    assert!(texts.iter().all(|t| !t.chars().any(|c| c.is_ascii_digit())));
    assert_eq!(lines[0].spans[1].style.bg, Some(palette.badge_bg));
}

#[test]
fn problem_label_counts_issues() {
    assert_eq!(problem_label(0), None);
    assert_eq!(problem_label(1).as_deref(), Some("1 issue (c)"));
    assert_eq!(problem_label(4).as_deref(), Some("4 issues (c)"));
}
