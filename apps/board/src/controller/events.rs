//! Events delivered to the UI loop and error modeling for the board front end.

use board_core::FetchError;
use shared::protocol::Action;

pub enum UiEvent {
    /// One line typed by the user.
    Input(String),
    InputClosed,
    /// The fetcher resolved; the action goes through the normal dispatch path.
    CommentsFetched(Action),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Upstream,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    FetchComments,
    Navigation,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_fetch(error: &FetchError) -> Self {
        let category = match error {
            FetchError::Request(_) => UiErrorCategory::Transport,
            FetchError::Status { .. } => UiErrorCategory::Upstream,
            FetchError::Decode(_) | FetchError::InvalidEndpoint { .. } => {
                UiErrorCategory::Validation
            }
        };
        Self::new(category, UiErrorContext::FetchComments, error.to_string())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line status text shown under the current view.
    pub fn status_line(&self) -> String {
        match (self.context, self.category) {
            (UiErrorContext::FetchComments, UiErrorCategory::Transport) => {
                "Comments server unreachable; check the URL/network and fetch again.".to_string()
            }
            (UiErrorContext::FetchComments, _) => {
                format!("Could not load comments: {}", self.message)
            }
            (UiErrorContext::Navigation, _) | (UiErrorContext::General, _) => {
                self.message.clone()
            }
        }
    }
}
