//! Async event loop for terminal input and background task results.
//!
//! The loop is the single owner of [`App`]; background tasks only talk to
//! it through the completion channel.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::app::{App, Completion};
use crate::input::handle_key_event;
use crate::tasks::{spawn_request, Services};
use crate::terminal::Tui;

/// Capacity of the completion channel.
const COMPLETION_CHANNEL_SIZE: usize = 16;

/// Async main event loop using `tokio::select!`.
///
/// Handles two concurrent concerns:
/// 1. Terminal events (keyboard input, resize) via crossterm `EventStream`
/// 2. Completions from background tasks
///
/// Returns when the user quits or the terminal event stream ends.
pub async fn run(
    tui: &mut Tui,
    app: &mut App,
    services: Services,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut event_stream = EventStream::new();
    let (tx, mut rx) = mpsc::channel::<Completion>(COMPLETION_CHANNEL_SIZE);

    tui.draw(app)?;

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        // Ignore release/repeat reports from enhanced keyboards
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        let action = handle_key_event(key_event, app.input_context());
                        if let Some(request) = app.handle_key(action) {
                            spawn_request(request, &services, tx.clone());
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize and other events only need a redraw
                    }
                    Some(Err(e)) => return Err(Box::new(e)),
                    None => break,
                }
            }

            Some(completion) = rx.recv() => {
                app.apply_completion(completion);
            }
        }

        if app.should_quit() {
            break;
        }
        tui.draw(app)?;
    }

    Ok(())
}
