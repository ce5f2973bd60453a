//! Backend commands queued from UI to backend worker.

#[derive(Debug)]
pub enum BackendCommand {
    FetchComments,
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::FetchComments => "fetch_comments",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
