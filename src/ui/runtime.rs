use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::{run_worker, BooksClient};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Queued requests beyond this are refused with a banner.
const COMMAND_QUEUE: usize = 64;

/// Runs the TUI until the user quits.
///
/// Requests run on a tokio runtime; this thread only draws and dispatches.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("bookshelf-api")
        .enable_all()
        .build()?;

    let client = BooksClient::new(&config.api)?;
    tracing::info!(base_url = client.base_url(), "Starting bookshelf");

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let (api_tx, api_rx) = mpsc::channel(COMMAND_QUEUE);
    let response_tx = events.sender();
    runtime.spawn(run_worker(client, api_rx, move |response| {
        let _ = response_tx.send(AppEvent::Api(response));
    }));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new();
    app.set_api_sender(api_tx);
    app.request_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Api(response)) => app.on_api_response(response),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // In-flight requests are abandoned; the service owns the outcome.
    for operation in app.requests().pending() {
        tracing::warn!(operation = operation.name(), "Abandoning in-flight request");
    }
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Bookshelf stopped");
    Ok(())
}
