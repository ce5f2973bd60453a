use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// One element of the upstream comments array. Only `name` is read; any other
/// field in the payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub name: String,
}

impl CommentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    SaveComment(String),
    FetchComments(Vec<CommentRecord>),
    ChangeAuth(bool),
    Navigate(Route),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SaveComment(_) => "save_comment",
            Action::FetchComments(_) => "fetch_comments",
            Action::ChangeAuth(_) => "change_auth",
            Action::Navigate(_) => "navigate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ignores_extra_fields() {
        let raw = r#"[
            {"postId": 1, "id": 1, "name": "id labore", "email": "Eliseo@gardner.biz", "body": "..."},
            {"name": "quo vero"}
        ]"#;
        let records: Vec<CommentRecord> = serde_json::from_str(raw).expect("records");
        assert_eq!(
            records,
            vec![CommentRecord::new("id labore"), CommentRecord::new("quo vero")]
        );
    }

    #[test]
    fn record_without_name_is_rejected() {
        let raw = r#"[{"id": 1, "body": "no name"}]"#;
        assert!(serde_json::from_str::<Vec<CommentRecord>>(raw).is_err());
    }

    #[test]
    fn action_uses_tagged_wire_shape() {
        let json = serde_json::to_value(Action::SaveComment("hi".into())).expect("serialize");
        assert_eq!(json["type"], "save_comment");
        assert_eq!(json["payload"], "hi");

        let parsed: Action =
            serde_json::from_str(r#"{"type":"change_auth","payload":true}"#).expect("parse");
        assert_eq!(parsed, Action::ChangeAuth(true));
        assert_eq!(parsed.kind(), "change_auth");
    }
}
