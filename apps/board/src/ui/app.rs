//! Line-driven front end. All state changes happen on the thread running
//! [`run`]: typed input, fetch results and errors arrive as [`UiEvent`]s on
//! one channel and are handled strictly in arrival order.

use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
    thread,
};

use anyhow::Context;
use board_core::{Board, BoardState, CommentFetcher};
use crossbeam_channel::{bounded, Sender};
use shared::{domain::Route, protocol::Action};
use tracing::{debug, info, warn};

use crate::{
    backend_bridge::{commands::BackendCommand, runtime},
    config::Settings,
    controller::{
        events::{UiError, UiErrorCategory, UiErrorContext, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::{comment_box::CommentBox, comment_list, header},
};

const HELP: &str = "commands: / | /posts | go <path> | auth | type <text> | submit | fetch | show | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Go(Route),
    ToggleAuth,
    Type(String),
    Submit,
    Fetch,
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, UiError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim(), None),
    };

    let go = |path: &str| {
        Route::from_path(path).map(Command::Go).ok_or_else(|| {
            UiError::new(
                UiErrorCategory::Validation,
                UiErrorContext::Navigation,
                format!("no view at '{path}'"),
            )
        })
    };

    match word {
        "home" => Ok(Command::Go(Route::Home)),
        "posts" => Ok(Command::Go(Route::Posts)),
        "go" => go(rest.unwrap_or_default().trim()),
        path if path.starts_with('/') => go(path),
        "auth" | "sign-in" | "sign-out" => Ok(Command::ToggleAuth),
        "type" => Ok(Command::Type(rest.unwrap_or_default().to_string())),
        "submit" => Ok(Command::Submit),
        "fetch" => Ok(Command::Fetch),
        "" | "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(UiError::new(
            UiErrorCategory::Unknown,
            UiErrorContext::General,
            format!("unknown command '{other}'; {HELP}"),
        )),
    }
}

pub struct BoardApp {
    board: Board,
    comment_box: CommentBox,
    status: String,
    cmd_tx: Sender<BackendCommand>,
}

impl BoardApp {
    pub fn new(initial: BoardState, start: Route, cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            board: Board::new(initial).at_route(start),
            comment_box: CommentBox::default(),
            status: String::new(),
            cmd_tx,
        }
    }

    pub fn mount(&mut self) -> Route {
        let route = self.board.mount();
        info!(%route, signed_in = self.board.is_signed_in(), "mounted");
        route
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn handle_event(&mut self, event: UiEvent) -> Flow {
        match event {
            UiEvent::Input(line) => return self.handle_input(&line),
            UiEvent::InputClosed => return Flow::Quit,
            UiEvent::CommentsFetched(action) => {
                if let Action::FetchComments(records) = &action {
                    self.status = format!("Loaded {} comments", records.len());
                }
                self.dispatch(action);
            }
            UiEvent::Error(err) => {
                warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
                self.status = err.status_line();
            }
        }
        Flow::Continue
    }

    fn handle_input(&mut self, line: &str) -> Flow {
        self.status.clear();
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                self.status = err.status_line();
                return Flow::Continue;
            }
        };
        debug!(?command, "input");

        match command {
            Command::Go(route) => {
                if self.dispatch(Action::Navigate(route)) != route {
                    self.status = format!("Sign in to view {route}");
                }
            }
            Command::ToggleAuth => {
                let action = header::auth_button_action(self.board.is_signed_in());
                self.dispatch(action);
            }
            Command::Type(text) => {
                if self.require_comment_box() {
                    self.comment_box.change(text);
                }
            }
            Command::Submit => {
                if self.require_comment_box() {
                    let action = self.comment_box.submit();
                    self.dispatch(action);
                }
            }
            Command::Fetch => {
                if self.require_comment_box()
                    && dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::FetchComments,
                        &mut self.status,
                    )
                {
                    self.status = "Fetching comments...".to_string();
                }
            }
            Command::Show => {}
            Command::Help => self.status = HELP.to_string(),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn require_comment_box(&mut self) -> bool {
        if self.board.current_route() == Route::Posts {
            return true;
        }
        self.status = format!("The comment box is on {}; open it first", Route::Posts);
        false
    }

    /// Leaving the form view discards the textarea contents.
    fn dispatch(&mut self, action: Action) -> Route {
        let before = self.board.current_route();
        let after = self.board.dispatch(action);
        if before == Route::Posts && after != Route::Posts {
            self.comment_box = CommentBox::default();
        }
        after
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let route = self.board.current_route();
        header::render(&mut out, route, self.board.is_signed_in());
        let _ = writeln!(out, "{}", "-".repeat(40));
        match route {
            Route::Home => comment_list::render(&mut out, self.board.comments()),
            Route::Posts => self.comment_box.render(&mut out),
        }
        if !self.status().is_empty() {
            let _ = writeln!(out, "status: {}", self.status());
        }
        out
    }
}

fn spawn_input_reader(ui_tx: Sender<UiEvent>) -> anyhow::Result<()> {
    thread::Builder::new()
        .name("board-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if ui_tx.send(UiEvent::Input(line)).is_err() {
                    return;
                }
            }
            let _ = ui_tx.send(UiEvent::InputClosed);
        })
        .context("failed to spawn input thread")?;
    Ok(())
}

pub fn run(settings: Settings) -> anyhow::Result<()> {
    let start = settings.start_route()?;
    let fetcher = CommentFetcher::http(&settings.comments_url)
        .context("failed to set up comment fetcher")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let worker = runtime::launch(cmd_rx, ui_tx.clone(), fetcher)?;
    spawn_input_reader(ui_tx)?;

    let initial = BoardState::new(
        settings.initial_comments.into_iter().collect(),
        settings.signed_in,
    );
    let mut app = BoardApp::new(initial, start, cmd_tx.clone());
    app.mount();

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", app.render())?;
    stdout.flush()?;

    for event in ui_rx.iter() {
        if app.handle_event(event) == Flow::Quit {
            break;
        }
        write!(stdout, "\n{}", app.render())?;
        stdout.flush()?;
    }

    info!(
        comments = app.board().comments().len(),
        "session ended; comments are not kept"
    );
    let _ = cmd_tx.send(BackendCommand::Shutdown);
    if worker.join().is_err() {
        warn!("fetch worker panicked during shutdown");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
