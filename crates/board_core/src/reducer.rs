//! Pure transition functions. Each reducer owns one slice of [`BoardState`]
//! and returns it unchanged for actions it does not handle.

use shared::{domain::CommentList, protocol::Action};

use crate::store::BoardState;

/// Appends submitted and fetched comments; the list never shrinks.
pub fn comments(mut state: CommentList, action: &Action) -> CommentList {
    match action {
        Action::SaveComment(text) => state.push(text.as_str()),
        Action::FetchComments(records) => {
            state.extend(records.iter().map(|record| record.name.as_str()))
        }
        Action::ChangeAuth(_) | Action::Navigate(_) => {}
    }
    state
}

pub fn auth(state: bool, action: &Action) -> bool {
    match action {
        Action::ChangeAuth(signed_in) => *signed_in,
        Action::SaveComment(_) | Action::FetchComments(_) | Action::Navigate(_) => state,
    }
}

pub fn reduce(state: BoardState, action: &Action) -> BoardState {
    BoardState {
        comments: comments(state.comments, action),
        auth: auth(state.auth, action),
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
