pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};
use crate::game::CatchTheFruit;

pub const FRUIT_GLYPH: char = '●';
pub const BASKET_GLYPH: char = '▄';

const FIELD_BG: Color = Color::Rgb(10, 10, 20);
// score, high score, controls
const STATUS_LINES: u16 = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let panel = panel_area(frame.area(), &app.game);
    frame.render_widget(Clear, panel);

    match app.screen {
        Screen::Menu => screens::render_menu(frame, panel, app.high_score),
        Screen::Playing => render_playing(frame, panel, app),
        Screen::GameOver | Screen::NameEntry => screens::render_game_over(frame, panel, app),
        Screen::Leaderboard => screens::render_leaderboard(frame, panel, &app.leaderboard),
    }
}

/// Bordered field plus the status lines, centred in `area` and clipped to it.
pub fn panel_area(area: Rect, game: &CatchTheFruit) -> Rect {
    let w = (game.grid_width() + 2).min(area.width);
    let h = (game.grid_height() + 2 + STATUS_LINES).min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

fn render_playing(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.game.grid_height() + 2),
            Constraint::Length(STATUS_LINES),
        ])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 200, 80)))
        .title(" Catch The Fruit ")
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);
    frame.render_widget(Paragraph::new(field_lines(&app.game)), inner);

    let status = vec![
        Line::from(Span::styled(
            format!("Score: {}", app.game.score()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", app.high_score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::styled("←/a", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled(" left  ", Style::default().fg(Color::DarkGray)),
            Span::styled("→/d", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled(" right  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Rgb(80, 200, 255))),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

/// One line per grid row: the fruit at its cell, the basket on the last row.
pub fn field_lines(game: &CatchTheFruit) -> Vec<Line<'static>> {
    let w = game.grid_width() as usize;
    let h = game.grid_height() as usize;
    let blank = Style::default().bg(FIELD_BG);

    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', blank); w]; h];

    if let Some(row) = grid.last_mut() {
        let start = game.basket_x() as usize;
        let end = (start + game.basket_width() as usize).min(w);
        for cell in &mut row[start..end] {
            *cell = (
                BASKET_GLYPH,
                Style::default()
                    .fg(Color::Rgb(200, 140, 60))
                    .bg(FIELD_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    let fruit = game.fruit();
    let (fx, fy) = (fruit.x as usize, fruit.y as usize);
    if fx < w && fy < h {
        grid[fy][fx] = (
            FRUIT_GLYPH,
            Style::default()
                .fg(Color::Rgb(230, 50, 50))
                .bg(FIELD_BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
