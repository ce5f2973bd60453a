use std::fmt::Write as _;

use shared::{domain::Route, protocol::Action};

pub const SIGN_IN_LABEL: &str = "Sign In";
pub const SIGN_OUT_LABEL: &str = "Sign Out";

pub fn auth_button_label(signed_in: bool) -> &'static str {
    if signed_in {
        SIGN_OUT_LABEL
    } else {
        SIGN_IN_LABEL
    }
}

/// Action emitted by the auth button: it always flips the current flag.
pub fn auth_button_action(signed_in: bool) -> Action {
    Action::ChangeAuth(!signed_in)
}

pub fn render(out: &mut String, current: Route, signed_in: bool) {
    let link = |route: Route, label: &str| {
        if route == current {
            format!("*{label}* ({route})")
        } else {
            format!("{label} ({route})")
        }
    };
    let _ = writeln!(
        out,
        "{} | {} | [{}]",
        link(Route::Home, "Home"),
        link(Route::Posts, "Add Comment"),
        auth_button_label(signed_in)
    );
}
