pub mod app;
pub mod config;
pub mod event;
pub mod game;
pub mod leaderboard;
pub mod scores;
pub mod session;
pub mod ui;
