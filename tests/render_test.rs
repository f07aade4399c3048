use catch_the_fruit::app::{App, Screen};
use catch_the_fruit::config::Config;
use catch_the_fruit::leaderboard::{Leaderboard, ScoreEntry};
use catch_the_fruit::ui::{self, BASKET_GLYPH, FRUIT_GLYPH};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app_in(dir: &std::path::Path) -> App {
    App::new(Config {
        seed: Some(11),
        ..Config::with_data_dir(dir)
    })
}

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(32, 20)).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("draw");
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn menu_shows_banner() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_in(dir.path());
    let text = screen_text(&draw(&app));
    assert!(text.contains("CATCH"));
    assert!(text.contains("THE"));
    assert!(text.contains("FRUIT"));
    assert!(text.contains("Press any key to enter"));
}

#[test]
fn playfield_places_fruit_and_basket() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.screen, Screen::Playing);

    let terminal = draw(&app);
    let buf = terminal.backend().buffer();
    let fruit = app.game.fruit();
    // field starts inside the border at (1, 1)
    assert_eq!(buf[(fruit.x + 1, fruit.y + 1)].symbol(), FRUIT_GLYPH.to_string());
    let basket_row = app.game.grid_height();
    for dx in 0..app.game.basket_width() {
        let x = app.game.basket_x() + dx + 1;
        assert_eq!(buf[(x, basket_row)].symbol(), BASKET_GLYPH.to_string());
    }

    let text = screen_text(&terminal);
    assert!(text.contains("Score: 0"));
    assert!(text.contains("High Score: 0"));
}

#[test]
fn name_entry_echoes_typed_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.screen = Screen::NameEntry;
    for c in "kim".chars() {
        app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    let text = screen_text(&draw(&app));
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("Enter your name:"));
    assert!(text.contains("kim____"));
    assert!(text.contains("Credits:"));
}

#[test]
fn game_over_screens_list_credits() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    for screen in [Screen::GameOver, Screen::NameEntry] {
        app.screen = screen;
        let text = screen_text(&draw(&app));
        assert!(text.contains("Credits:"), "{:?}", screen);
        for name in ui::screens::CREDITS {
            assert!(text.contains(name), "{} missing on {:?}", name, screen);
        }
    }
}

#[test]
fn game_over_without_place_prompts_replay() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.screen = Screen::GameOver;
    let text = screen_text(&draw(&app));
    assert!(text.contains("Your final score: 0"));
    assert!(text.contains("to play again"));
    assert!(!text.contains("Enter your name:"));
}

#[test]
fn leaderboard_lists_entries_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.leaderboard = Leaderboard::from_entries([
        ScoreEntry::new("low", 3),
        ScoreEntry::new("high", 30),
    ]);
    app.screen = Screen::Leaderboard;
    let text = screen_text(&draw(&app));
    let high = text.find("high - 30").expect("top entry shown");
    let low = text.find("low - 3").expect("second entry shown");
    assert!(high < low);
}

#[test]
fn empty_leaderboard_says_so() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.screen = Screen::Leaderboard;
    let text = screen_text(&draw(&app));
    assert!(text.contains("No leaderboard data"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_in(dir.path());
    app.screen = Screen::Playing;
    let mut terminal = Terminal::new(TestBackend::new(8, 4)).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, &app))
        .expect("draw");
}
