use std::fmt::Write as _;

use shared::domain::CommentList;

pub fn render(out: &mut String, comments: &CommentList) {
    let _ = writeln!(out, "Comment List");
    if comments.is_empty() {
        let _ = writeln!(out, "  (no comments yet)");
        return;
    }
    for comment in comments.iter() {
        let _ = writeln!(out, "  - {comment}");
    }
}
