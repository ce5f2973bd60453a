use std::fmt::Write as _;

use shared::protocol::Action;

pub const SUBMIT_BUTTON: &str = "Submit Comment";
pub const FETCH_BUTTON: &str = "Fetch Comments";

/// The submission form: one textarea and two buttons.
#[derive(Debug, Default)]
pub struct CommentBox {
    value: String,
}

impl CommentBox {
    pub fn buttons(&self) -> [&'static str; 2] {
        [SUBMIT_BUTTON, FETCH_BUTTON]
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Submits whatever is in the textarea, including an empty value, and
    /// clears it.
    pub fn submit(&mut self) -> Action {
        Action::SaveComment(std::mem::take(&mut self.value))
    }

    pub fn render(&self, out: &mut String) {
        let _ = writeln!(out, "Add a Comment");
        let _ = writeln!(out, "  > {}", self.value());
        let [submit, fetch] = self.buttons();
        let _ = writeln!(out, "  [{submit}] [{fetch}]");
    }
}
