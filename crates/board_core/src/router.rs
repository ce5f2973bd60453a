use shared::domain::Route;

/// The view currently on screen. Nothing reads a back stack, so only the
/// current route is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct History {
    current: Route,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Moves to `route`. Returns whether the current view changed; pushing the
    /// current view is a no-op.
    pub fn push(&mut self, route: Route) -> bool {
        if self.current == route {
            return false;
        }
        self.current = route;
        true
    }
}
