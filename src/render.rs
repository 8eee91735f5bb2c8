// src/render.rs
//! Plain-terminal rendering of the session. Pure functions from state to
//! text so tests can assert on the output directly.

use crate::session::{DisplayState, Session};

pub fn render_session(session: &Session) -> String {
    let mut out = render_display(session.display());
    if let Some(notice) = session.notice() {
        out.push_str(&notice);
        out.push('\n');
    }
    out
}

pub fn render_display(state: &DisplayState) -> String {
    match state {
        DisplayState::Idle => String::new(),
        DisplayState::Loading => "Working on it...\n".to_string(),
        DisplayState::Result(result) => {
            let mut out = String::new();
            out.push_str("=== Tailored Resume ===\n");
            out.push_str(&result.tailored_resume);
            out.push('\n');
            if !result.key_skills_extracted.is_empty() {
                out.push_str("\nKey skills: ");
                out.push_str(&result.key_skills_extracted.join(", "));
                out.push('\n');
            }
            if !result.optimization_notes.is_empty() {
                out.push_str("\nOptimization Notes: ");
                out.push_str(&result.optimization_notes);
                out.push('\n');
            }
            out
        }
        DisplayState::Error(message) => format!("Error: {}\n", message),
    }
}
