//! Auth gate for protected views.
//!
//! The guard is evaluated after the initial mount and after every transition.
//! Whenever the auth flag is false it redirects to the root view. Redirecting
//! while already on the root view leaves the history untouched, so repeated
//! checks are harmless.

use shared::domain::Route;
use tracing::{debug, info};

use crate::{
    router::History,
    store::{BoardState, StateObserver},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authorized,
    Unauthorized,
}

impl Access {
    pub fn from_auth(auth: bool) -> Self {
        if auth {
            Access::Authorized
        } else {
            Access::Unauthorized
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub struct NavigationGuard {
    redirect_to: Route,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self {
            redirect_to: Route::Home,
        }
    }

    pub fn check(&self, auth: bool) -> GuardDecision {
        match Access::from_auth(auth) {
            Access::Authorized => GuardDecision::Allow,
            Access::Unauthorized => GuardDecision::Redirect(self.redirect_to),
        }
    }
}

impl StateObserver for NavigationGuard {
    fn after_transition(&mut self, state: &BoardState, history: &mut History) {
        let GuardDecision::Redirect(target) = self.check(state.auth) else {
            return;
        };
        let from = history.current();
        if history.push(target) {
            info!(%from, to = %target, "signed out; redirecting away from protected view");
        } else {
            debug!(to = %target, "signed out; already on redirect target");
        }
    }
}

#[cfg(test)]
#[path = "tests/guard_tests.rs"]
mod tests;
