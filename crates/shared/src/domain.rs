use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of comment texts.
///
/// Duplicates are permitted and insertion order is significant. There is no
/// way to remove or reorder entries once they have been appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentList(Vec<String>);

impl CommentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, comment: impl Into<String>) {
        self.0.push(comment.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for CommentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for CommentList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// `/`, the comment list.
    #[default]
    Home,
    /// `/posts`, the comment submission form.
    Posts,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Posts];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Posts => "/posts",
        }
    }

    /// Exact-match lookup; trailing slashes other than the root are not accepted.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
