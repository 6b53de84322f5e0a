use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Runs the storefront until the user quits.
///
/// Each iteration draws, handles at most one terminal event, then pumps
/// the router so host navigation is applied in arrival order.
pub fn run(mut app: App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(app.config().display.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    tracing::info!(location = %app.route().location(), "Session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "Resize"),
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        app.pump_navigation();
    }

    drop(guard);
    tracing::info!("Session ended");
    Ok(())
}
