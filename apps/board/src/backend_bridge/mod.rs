//! Backend bridge boundary between the UI loop and the fetch worker.

pub mod commands;
pub mod runtime;
