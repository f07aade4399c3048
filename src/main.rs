use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use catch_the_fruit::app::App;
use catch_the_fruit::config::{Args, Config};
use catch_the_fruit::event::{Event, EventHandler};
use catch_the_fruit::ui;

fn init_logging(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("could not create log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let events = EventHandler::new();
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &*app))?;

        match events.next(app.poll_timeout())? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    if let Err(e) = init_logging(&config) {
        eprintln!("warning: {:#}; logging disabled", e);
    }

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let res = run(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal error")?;
    if let Some(message) = app.final_message.take() {
        println!("{}", message);
    }
    log::info!("exiting");
    Ok(())
}
