use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::leaderboard::{Leaderboard, MAX_NAME_LEN};

const TITLE: Color = Color::Rgb(255, 220, 80);
const MUTED: Color = Color::Rgb(120, 120, 140);
const KEY: Color = Color::Rgb(80, 200, 255);

pub const CREDITS: [&str; 3] = ["Jecer Egagamao", "Maxwell Morales", "Gian De La Cruz"];

fn framed(title: &'static str, border: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(border))
        .title(title)
        .title_style(Style::default().fg(TITLE).add_modifier(Modifier::BOLD))
}

fn replay_prompt() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(MUTED)),
            Span::styled("p", Style::default().fg(KEY).add_modifier(Modifier::BOLD)),
            Span::styled(" to play again", Style::default().fg(MUTED)),
        ]),
        Line::from(vec![
            Span::styled("or ", Style::default().fg(MUTED)),
            Span::styled("q", Style::default().fg(KEY).add_modifier(Modifier::BOLD)),
            Span::styled(" to quit.", Style::default().fg(MUTED)),
        ]),
    ]
}

pub fn render_menu(frame: &mut Frame, area: Rect, high_score: u32) {
    let block = framed(" Welcome ", Color::Rgb(80, 200, 80));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = Style::default().fg(Color::Rgb(230, 50, 50)).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("CATCH", banner)),
        Line::from(""),
        Line::from(Span::styled("THE", Style::default().fg(TITLE).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("FRUIT", banner)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("High Score: {}", high_score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to enter",
            Style::default().fg(KEY).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let block = framed(" Game Over ", Color::Rgb(220, 80, 80));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your final score: {}", app.game.score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", app.high_score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];

    if app.screen == Screen::NameEntry {
        // typed chars followed by underscores for the remaining slots
        let typed = app.name_buffer.chars().count();
        let display_name = format!(
            "{}{}",
            app.name_buffer,
            "_".repeat(MAX_NAME_LEN.saturating_sub(typed))
        );
        lines.extend([
            Line::from(Span::styled(
                "You're in the top 10!",
                Style::default().fg(TITLE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Enter your name:", Style::default().fg(MUTED))),
            Line::from(vec![
                Span::styled("[", Style::default().fg(MUTED)),
                Span::styled(
                    display_name,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled("]", Style::default().fg(MUTED)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(KEY).add_modifier(Modifier::BOLD)),
                Span::styled(" confirm  ", Style::default().fg(MUTED)),
                Span::styled("Esc", Style::default().fg(KEY).add_modifier(Modifier::BOLD)),
                Span::styled(" skip", Style::default().fg(MUTED)),
            ]),
        ]);
    } else {
        lines.extend(replay_prompt());
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Credits:", Style::default().fg(TITLE))));
    lines.extend(
        CREDITS
            .iter()
            .map(|name| Line::from(Span::styled(*name, Style::default().fg(MUTED)))),
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

pub fn render_leaderboard(frame: &mut Frame, area: Rect, board: &Leaderboard) {
    let block = framed(" Top 10 ", Color::Rgb(60, 150, 200));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    if board.is_empty() {
        lines.push(Line::from(Span::styled(
            "No leaderboard data available.",
            Style::default().fg(MUTED),
        )));
    }
    for (rank, entry) in board.entries().iter().enumerate() {
        let color = match rank {
            0 => Color::Rgb(255, 215, 0),
            1 => Color::Rgb(192, 192, 192),
            2 => Color::Rgb(205, 127, 50),
            _ => Color::Rgb(180, 180, 200),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", rank + 1), Style::default().fg(MUTED)),
            Span::styled(
                entry.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" - {}", entry.score), Style::default().fg(color)),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(replay_prompt());

    frame.render_widget(Paragraph::new(lines), inner);
}
