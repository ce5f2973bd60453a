use std::sync::{Arc, Mutex};

use super::*;
use shared::protocol::CommentRecord;

struct RecordingObserver {
    seen: Arc<Mutex<Vec<(usize, bool, Route)>>>,
}

impl StateObserver for RecordingObserver {
    fn after_transition(&mut self, state: &BoardState, history: &mut History) {
        self.seen
            .lock()
            .expect("observer log")
            .push((state.comments.len(), state.auth, history.current()));
    }
}

fn recording_board(initial: BoardState) -> (Board, Arc<Mutex<Vec<(usize, bool, Route)>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::without_observers(initial);
    board.add_observer(RecordingObserver { seen: seen.clone() });
    (board, seen)
}

#[test]
fn store_applies_actions_in_dispatch_order() {
    let mut store = Store::default();
    store.dispatch(&Action::SaveComment("first".into()));
    store.dispatch(&Action::FetchComments(vec![CommentRecord::new("second")]));
    store.dispatch(&Action::SaveComment("third".into()));

    assert_eq!(store.state().comments.as_slice(), ["first", "second", "third"]);
}

#[test]
fn store_starts_from_seeded_state() {
    let initial = BoardState::new(["Comment 1", "Comment 2"].into_iter().collect(), true);
    let mut store = Store::new(initial.clone());
    assert_eq!(store.state(), &initial);

    let state = store.dispatch(&Action::SaveComment("new comment".into()));
    assert_eq!(
        state.comments.as_slice(),
        ["Comment 1", "Comment 2", "new comment"]
    );
    assert!(state.auth);
}

#[test]
fn observers_run_on_mount_and_after_every_dispatch() {
    let (mut board, seen) = recording_board(BoardState::default());

    board.mount();
    board.dispatch(Action::ChangeAuth(true));
    board.dispatch(Action::SaveComment("c".into()));
    board.dispatch(Action::Navigate(Route::Posts));

    let seen = seen.lock().expect("observer log").clone();
    assert_eq!(
        seen,
        vec![
            (0, false, Route::Home),
            (0, true, Route::Home),
            (1, true, Route::Home),
            (1, true, Route::Posts),
        ]
    );
}

#[test]
fn navigate_moves_history_without_touching_state() {
    let mut board = Board::without_observers(BoardState::default());
    let route = board.dispatch(Action::Navigate(Route::Posts));

    assert_eq!(route, Route::Posts);
    assert_eq!(board.state(), &BoardState::default());
    assert_eq!(board.current_route(), Route::Posts);
}

#[test]
fn board_with_guard_keeps_signed_in_user_on_posts() {
    let mut board = Board::new(BoardState::new(CommentList::new(), true));
    board.mount();

    assert_eq!(board.dispatch(Action::Navigate(Route::Posts)), Route::Posts);
    assert_eq!(board.dispatch(Action::SaveComment("hello".into())), Route::Posts);
    assert_eq!(board.comments().as_slice(), ["hello"]);
}

#[test]
fn signing_out_on_posts_returns_home() {
    let mut board = Board::new(BoardState::new(CommentList::new(), true));
    board.mount();
    board.dispatch(Action::Navigate(Route::Posts));

    assert_eq!(board.dispatch(Action::ChangeAuth(false)), Route::Home);
    assert!(!board.is_signed_in());
}
