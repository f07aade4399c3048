use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::game::{CatchTheFruit, Control, TickOutcome};
use crate::leaderboard::{Leaderboard, DEFAULT_NAME, MAX_NAME_LEN};
use crate::scores::ScoreStore;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    /// Round summary when the score missed the leaderboard; waits for p/q.
    GameOver,
    NameEntry,
    /// Updated leaderboard; waits for p/q.
    Leaderboard,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub game: CatchTheFruit,
    pub session: Session,
    pub store: ScoreStore,
    pub high_score: u32,
    pub leaderboard: Leaderboard,
    pub name_buffer: String,
    /// Printed after the terminal is restored (classic mode).
    pub final_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let store = ScoreStore::from_config(&config);
        let classic = config.classic;
        let mut session = Session::new(config);
        let game = CatchTheFruit::new(&mut session);
        let high_score = store.load_high_score();
        log::info!(
            "starting {} game, high score {}",
            if classic { "classic" } else { "menu" },
            high_score
        );
        Self {
            should_quit: false,
            screen: if classic { Screen::Playing } else { Screen::Menu },
            game,
            session,
            store,
            high_score,
            leaderboard: Leaderboard::new(),
            name_buffer: String::new(),
            final_message: None,
        }
    }

    pub fn classic(&self) -> bool {
        self.session.config.classic
    }

    /// How long the next key read may wait. Only play is clocked.
    pub fn poll_timeout(&self) -> Option<Duration> {
        match self.screen {
            Screen::Playing => Some(self.game.fruit().speed()),
            _ => None,
        }
    }

    pub fn on_tick(&mut self) {
        if self.screen == Screen::Playing {
            self.advance();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Menu => self.screen = Screen::Playing,
            Screen::Playing => match Control::from_key(key) {
                Control::Quit => self.quit(),
                control => {
                    self.game.apply(control);
                    self.advance();
                }
            },
            Screen::NameEntry => self.handle_name_input(key),
            Screen::GameOver | Screen::Leaderboard => self.handle_replay_input(key),
        }
    }

    fn advance(&mut self) {
        if self.game.advance_tick(&mut self.session) == TickOutcome::Missed {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        let score = self.game.score();
        log::info!("game over, score {}", score);
        self.raise_high_score();

        if self.classic() {
            self.final_message = Some(self.summary());
            self.should_quit = true;
            return;
        }

        self.leaderboard = self.store.load_leaderboard();
        if self.leaderboard.qualifies(score) {
            self.name_buffer.clear();
            self.screen = Screen::NameEntry;
        } else {
            self.screen = Screen::GameOver;
        }
    }

    fn raise_high_score(&mut self) {
        let score = self.game.score();
        if score > self.high_score {
            log::info!("new high score {} (was {})", score, self.high_score);
            self.high_score = score;
            self.store.save_high_score(score);
        }
    }

    fn quit(&mut self) {
        if self.screen == Screen::Playing {
            self.raise_high_score();
            if self.classic() {
                self.final_message = Some(self.summary());
            }
        }
        self.should_quit = true;
    }

    fn summary(&self) -> String {
        format!(
            "Game Over! Your final score: {}\nHigh Score: {}",
            self.game.score(),
            self.high_score
        )
    }

    fn handle_name_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.name_buffer);
                self.submit_name(&name);
            }
            KeyCode::Esc => self.submit_name(DEFAULT_NAME),
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            KeyCode::Char(c) => {
                if self.name_buffer.chars().count() < MAX_NAME_LEN && !c.is_control() {
                    self.name_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_name(&mut self, name: &str) {
        let score = self.game.score();
        if self.leaderboard.record(name, score) {
            log::info!("leaderboard entry {:?} with {}", name, score);
            self.store.save_leaderboard(&self.leaderboard);
        }
        self.name_buffer.clear();
        self.screen = Screen::Leaderboard;
    }

    fn handle_replay_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.game.reset(&mut self.session);
                self.screen = Screen::Playing;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    /// Whether the finished round earned a leaderboard place.
    pub fn qualified(&self) -> bool {
        matches!(self.screen, Screen::NameEntry | Screen::Leaderboard)
    }
}
