use std::mem;

use shared::{
    domain::{CommentList, Route},
    protocol::Action,
};
use tracing::debug;

use crate::{guard::NavigationGuard, reducer, router::History};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    pub comments: CommentList,
    pub auth: bool,
}

impl BoardState {
    pub fn new(comments: CommentList, auth: bool) -> Self {
        Self { comments, auth }
    }
}

/// Holds the current [`BoardState`] and applies actions one at a time, in the
/// order they are dispatched.
#[derive(Debug, Default)]
pub struct Store {
    state: BoardState,
}

impl Store {
    pub fn new(initial: BoardState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn dispatch(&mut self, action: &Action) -> &BoardState {
        let previous = mem::take(&mut self.state);
        self.state = reducer::reduce(previous, action);
        debug!(
            action = action.kind(),
            comments = self.state.comments.len(),
            auth = self.state.auth,
            "applied action"
        );
        &self.state
    }
}

/// Side effect run after the initial mount and after every state transition.
pub trait StateObserver: Send {
    fn after_transition(&mut self, state: &BoardState, history: &mut History);
}

/// A single session: the store, the navigation history, and the observers that
/// react to each transition.
pub struct Board {
    store: Store,
    history: History,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Board {
    /// Creates a session with the [`NavigationGuard`] already attached.
    pub fn new(initial: BoardState) -> Self {
        let mut board = Self::without_observers(initial);
        board.add_observer(NavigationGuard::new());
        board
    }

    pub fn without_observers(initial: BoardState) -> Self {
        Self {
            store: Store::new(initial),
            history: History::default(),
            observers: Vec::new(),
        }
    }

    /// Starts the session on `route` instead of the root view. The guard still
    /// runs on [`Board::mount`].
    pub fn at_route(mut self, route: Route) -> Self {
        self.history = History::new(route);
        self
    }

    pub fn add_observer(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &BoardState {
        self.store.state()
    }

    pub fn comments(&self) -> &CommentList {
        &self.store.state().comments
    }

    pub fn is_signed_in(&self) -> bool {
        self.store.state().auth
    }

    pub fn current_route(&self) -> Route {
        self.history.current()
    }

    /// Runs the observers against the initial state. Call once before the
    /// first render.
    pub fn mount(&mut self) -> Route {
        self.notify();
        self.history.current()
    }

    /// Applies `action` and runs every observer. Returns the view to render.
    pub fn dispatch(&mut self, action: Action) -> Route {
        if let Action::Navigate(route) = &action {
            self.history.push(*route);
        }
        self.store.dispatch(&action);
        self.notify();
        self.history.current()
    }

    fn notify(&mut self) {
        let state = self.store.state();
        for observer in &mut self.observers {
            observer.after_transition(state, &mut self.history);
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
