use crate::clipboard::LinkClipboard;
use crate::config::Config;
use crate::listing::ListingClient;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::search::SearchIntent;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_fetch_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Runs the TUI until the user quits.
///
/// `initial_subreddit` pre-fills the search box and is searched instead of
/// the default listing.
pub fn run(config: Config, initial_subreddit: Option<String>) -> io::Result<()> {
    let runtime = Runtime::new()?;
    let client = ListingClient::new(&config.api)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let shutdown = ShutdownCoordinator::new();
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let commands = spawn_fetch_worker(
        runtime.handle(),
        client,
        events.sender(),
        shutdown.handle(),
    );

    let mut app = App::new(config.api);
    app.set_command_sender(commands);
    match initial_subreddit {
        Some(subreddit) => {
            app.dispatch_search(SearchIntent::Set(subreddit));
            app.submit_search();
        }
        None => app.load_default(),
    }

    let (mut terminal, guard) = setup_terminal()?;
    let mut clipboard = LinkClipboard::new();

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err);
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::CopyLink {
                    copy_selected_link(&mut app, &mut clipboard);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui re-measures the terminal on the next draw
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::FetchCompleted { seq, result }) => app.on_fetch_completed(seq, result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

fn copy_selected_link(app: &mut App, clipboard: &mut LinkClipboard) {
    let Some(link) = app.selected_post().map(|post| post.hyperlink.clone()) else {
        app.set_status("No post selected");
        return;
    };
    match clipboard.copy_link(&link) {
        Ok(()) => app.set_status(format!("Copied {}", link)),
        Err(err) => {
            tracing::warn!(error = %err, "clipboard copy failed");
            app.set_status(err.to_string());
        }
    }
}
