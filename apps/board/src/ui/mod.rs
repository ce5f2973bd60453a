//! Terminal views and the line-driven app loop.

pub mod app;
pub mod comment_box;
pub mod comment_list;
pub mod header;
