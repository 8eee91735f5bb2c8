// src/session/state.rs
use crate::api::types::TailorResult;

/// Which of the mutually exclusive UI surfaces is active. Being an enum,
/// exactly one variant holds at any time; entering a state deactivates the
/// others by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Result(TailorResult),
    Error(String),
}

impl DisplayState {
    /// A request was started: any state goes to Loading.
    pub fn start_request(&mut self) {
        *self = DisplayState::Loading;
    }

    /// The in-flight request succeeded with a tailoring result.
    pub fn succeed(&mut self, result: TailorResult) {
        *self = DisplayState::Result(result);
    }

    /// The in-flight request failed with a normalized message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = DisplayState::Error(message.into());
    }

    /// Everything hidden.
    pub fn clear(&mut self) {
        *self = DisplayState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn result(&self) -> Option<&TailorResult> {
        match self {
            DisplayState::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DisplayState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> TailorResult {
        TailorResult {
            tailored_resume: "tailored".to_string(),
            key_skills_extracted: vec!["Go".to_string()],
            optimization_notes: "notes".to_string(),
        }
    }

    #[test]
    fn starts_idle() {
        assert_eq!(DisplayState::default(), DisplayState::Idle);
    }

    #[test]
    fn at_most_one_surface_is_visible() {
        let states = [
            DisplayState::Idle,
            DisplayState::Loading,
            DisplayState::Result(sample_result()),
            DisplayState::Error("boom".to_string()),
        ];
        for state in states {
            let visible = [
                state.is_loading(),
                state.result().is_some(),
                state.error().is_some(),
            ];
            assert!(visible.iter().filter(|v| **v).count() <= 1, "{:?}", state);
        }
    }

    #[test]
    fn success_replaces_loading() {
        let mut state = DisplayState::Idle;
        state.start_request();
        assert!(state.is_loading());
        state.succeed(sample_result());
        assert_eq!(state.result().unwrap().tailored_resume, "tailored");
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_replaces_loading() {
        let mut state = DisplayState::Loading;
        state.fail("nope");
        assert_eq!(state.error(), Some("nope"));
    }

    #[test]
    fn clear_always_returns_to_idle() {
        let mut state = DisplayState::Error("boom".to_string());
        state.clear();
        assert_eq!(state, DisplayState::Idle);

        let mut state = DisplayState::Result(sample_result());
        state.clear();
        assert_eq!(state, DisplayState::Idle);
    }
}
