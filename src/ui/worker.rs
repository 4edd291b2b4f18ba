//! Background fetch worker.
//!
//! Receives fetch commands from the UI thread and runs each one as its own
//! tokio task. Results travel back on the UI event channel.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::listing::{ListingClient, ListingRequest};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

const COMMAND_QUEUE: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Fetch { seq: u64, request: ListingRequest },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Starts the worker on `runtime` and returns the command sender.
///
/// The worker stops on shutdown or once every sender is dropped.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: ListingClient,
    events: std_mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);

    runtime.spawn(async move {
        loop {
            let command = tokio::select! {
                _ = shutdown.wait() => break,
                command = rx.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };
            match command {
                UiCommand::Fetch { seq, request } => {
                    let client = client.clone();
                    let events = events.clone();
                    // No cancellation: overlapping requests all run to completion
                    tokio::spawn(async move {
                        let result = client.fetch(&request).await;
                        match &result {
                            Ok(_) => tracing::debug!(seq, "fetch completed"),
                            Err(err) => {
                                tracing::warn!(seq, kind = err.kind(), error = %err, "fetch failed")
                            }
                        }
                        let _ = events.send(AppEvent::FetchCompleted { seq, result });
                    });
                }
            }
        }
        tracing::debug!("fetch worker stopped");
    });

    tx
}
