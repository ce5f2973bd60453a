//! Core state for the comment board: the reducer, the session that owns the
//! store, the auth-gated navigation guard and the upstream comment fetcher.

pub mod error;
pub mod fetcher;
pub mod guard;
pub mod reducer;
pub mod router;
pub mod store;

pub use error::FetchError;
pub use fetcher::{CommentFetcher, CommentSource, HttpCommentSource, DEFAULT_COMMENTS_URL};
pub use guard::{Access, GuardDecision, NavigationGuard};
pub use router::History;
pub use store::{Board, BoardState, StateObserver, Store};
