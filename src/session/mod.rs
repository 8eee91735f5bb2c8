pub mod notice;
pub mod state;

pub use notice::NoticeBoard;
pub use state::DisplayState;

use crate::api::types::TailorResult;
use std::time::Duration;

/// Shared mutable UI state for one session: the three input fields, the
/// display state machine and the transient notice line. Action controllers
/// are the only writers.
#[derive(Debug, Default)]
pub struct Session {
    pub resume: String,
    pub job_desc: String,
    pub job_url: String,
    display: DisplayState,
    notices: NoticeBoard,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn start_request(&mut self) {
        self.display.start_request();
    }

    pub fn succeed(&mut self, result: TailorResult) {
        self.display.succeed(result);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.display.fail(message);
    }

    /// Side-channel success (scrape): the call finished but the main result
    /// surface stays hidden.
    pub fn back_to_idle(&mut self) {
        self.display.clear();
    }

    /// Reset every input field, hide all surfaces and drop any pending
    /// notice.
    pub fn clear(&mut self) {
        self.resume.clear();
        self.job_desc.clear();
        self.job_url.clear();
        self.display.clear();
        self.notices.clear();
    }

    pub fn post_notice(&mut self, message: impl Into<String>, ttl: Duration) {
        self.notices.post(message, ttl);
    }

    pub fn notice(&self) -> Option<String> {
        self.notices.current()
    }

    /// The currently rendered tailored-resume text, if the result surface is
    /// visible.
    pub fn rendered_resume(&self) -> Option<&str> {
        self.display
            .result()
            .map(|result| result.tailored_resume.as_str())
    }
}
