//! Fetch worker: owns the Tokio runtime and turns queued commands into
//! fire-and-forget fetches whose results come back as [`UiEvent`]s.

use std::thread::{self, JoinHandle};

use anyhow::Context;
use board_core::CommentFetcher;
use crossbeam_channel::{Receiver, Sender};
use tracing::{info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    fetcher: CommentFetcher,
) -> anyhow::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .thread_name("board-fetch")
        .build()
        .context("failed to build backend runtime")?;

    thread::Builder::new()
        .name("board-backend".into())
        .spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchComments => {
                        let _enter = runtime.enter();
                        let ui_tx = ui_tx.clone();
                        fetcher.spawn(move |result| {
                            let event = match result {
                                Ok(action) => UiEvent::CommentsFetched(action),
                                Err(error) => UiEvent::Error(UiError::from_fetch(&error)),
                            };
                            if ui_tx.send(event).is_err() {
                                warn!("ui loop gone; dropping fetch result");
                            }
                        });
                    }
                    BackendCommand::Shutdown => break,
                }
            }
            info!("fetch worker stopped");
        })
        .context("failed to spawn backend worker thread")
}
