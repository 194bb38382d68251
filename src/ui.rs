// src/ui.rs

pub mod footer;
pub mod header;
pub mod quit_confirm;

use crate::app::App;
use crate::chat_view::draw;
use crate::key_handlers::handle_key;
use crate::sequencer::ChatEvent;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the visitor quits.
pub async fn run_ui(
    app: App,
    chat_events: mpsc::UnboundedReceiver<ChatEvent>,
) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, chat_events).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut chat_events: mpsc::UnboundedReceiver<ChatEvent>,
) -> Result<(), Box<dyn Error>> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(250);
        let mut last_tick = Instant::now();
        loop {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    app.connect();

    while app.is_running() {
        terminal.draw(|f| draw(f, &mut app))?;

        tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key(key, &mut app);
                }
                Event::Input(_) | Event::Tick => {}
            },
            Some(event) = chat_events.recv() => {
                debug!("Chat event: {:?}", event);
                app.chatbox.apply(event);
            }
            else => break,
        }
    }

    Ok(())
}
