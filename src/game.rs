use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::Config;
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fruit {
    pub x: u16,
    pub y: u16,
    /// Milliseconds per row; doubles as the input poll timeout.
    pub speed_ms: u64,
}

impl Fruit {
    fn spawn(session: &mut Session) -> Self {
        Self {
            x: session.spawn_column(),
            y: 0,
            speed_ms: session.spawn_speed(),
        }
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

/// What a single tick did to the fruit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Falling,
    Caught,
    Missed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Quit,
    None,
}

impl Control {
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Control::MoveLeft,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Control::MoveRight,
            KeyCode::Char('q') | KeyCode::Char('Q') => Control::Quit,
            _ => Control::None,
        }
    }
}

pub struct CatchTheFruit {
    fruit: Fruit,
    basket_x: u16,
    score: u32,
    game_over: bool,
    grid_width: u16,
    grid_height: u16,
    basket_width: u16,
    move_step: u16,
}

impl CatchTheFruit {
    pub fn new(session: &mut Session) -> Self {
        let fruit = Fruit::spawn(session);
        Self::from_parts(&session.config, fruit, session.config.grid_width / 2)
    }

    /// Builds a game with an explicit fruit and basket position. The basket
    /// is clamped into the grid.
    pub fn from_parts(config: &Config, fruit: Fruit, basket_x: u16) -> Self {
        Self {
            fruit,
            basket_x: basket_x.min(config.max_basket_x()),
            score: 0,
            game_over: false,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            basket_width: config.basket_width,
            move_step: config.move_step,
        }
    }

    pub fn reset(&mut self, session: &mut Session) {
        *self = CatchTheFruit::new(session);
        log::info!("new round started");
    }

    /// Moves the basket. `Quit` and `None` are left to the caller.
    pub fn apply(&mut self, control: Control) {
        match control {
            Control::MoveLeft => {
                self.basket_x = self.basket_x.saturating_sub(self.move_step);
            }
            Control::MoveRight => {
                let max_x = self.grid_width.saturating_sub(self.basket_width);
                self.basket_x = (self.basket_x + self.move_step).min(max_x);
            }
            Control::Quit | Control::None => {}
        }
    }

    pub fn advance_tick(&mut self, session: &mut Session) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Missed;
        }

        if self.fruit.y + 1 < self.grid_height {
            self.fruit.y += 1;
            return TickOutcome::Falling;
        }

        let outcome = if self.basket_covers(self.fruit.x) {
            self.score += 1;
            TickOutcome::Caught
        } else {
            self.game_over = true;
            TickOutcome::Missed
        };
        log::debug!(
            "fruit at column {} {:?}, basket at {}, score {}",
            self.fruit.x,
            outcome,
            self.basket_x,
            self.score
        );
        self.fruit = Fruit::spawn(session);
        outcome
    }

    pub fn basket_covers(&self, column: u16) -> bool {
        column >= self.basket_x && column < self.basket_x + self.basket_width
    }

    pub fn fruit(&self) -> Fruit {
        self.fruit
    }

    pub fn basket_x(&self) -> u16 {
        self.basket_x
    }

    pub fn basket_width(&self) -> u16 {
        self.basket_width
    }

    pub fn grid_width(&self) -> u16 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u16 {
        self.grid_height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
