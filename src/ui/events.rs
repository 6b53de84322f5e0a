use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Forwards terminal input from a reader thread to the UI loop.
///
/// The thread exits once the receiving side is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                        Ok(Event::Resize(cols, rows)) => {
                            tx.send(AppEvent::Resize(cols, rows)).is_ok()
                        }
                        Ok(_) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal read failed");
                            false
                        }
                    },
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        false
                    }
                };
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
