//! Poll state machine — app-visible fetch lifecycle with pure transitions.
//!
//! A poll cycle moves `Idle → Loading → {Ready, Failed}` and re-enters
//! `Loading` on every scheduled tick or explicit refetch. Transitions are a
//! pure reducer over [`PollEvent`]s; scheduling lives in [`poller`].

#[cfg(feature = "http")]
pub mod poller;

use chrono::{DateTime, Utc};

/// Lifecycle phase of one polling pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Snapshot of a polling pipeline's state.
///
/// A failure keeps the previously derived `data` in place (the presentation
/// layer decides whether to show it); a success replaces everything.
#[derive(Debug, Clone, PartialEq)]
pub struct PollState<T> {
    pub status: PollStatus,
    pub data: Option<T>,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T> Default for PollState<T> {
    fn default() -> Self {
        Self {
            status: PollStatus::Idle,
            data: None,
            error: None,
            last_updated: None,
        }
    }
}

impl<T> PollState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.status == PollStatus::Loading
    }

    /// Apply one event in place.
    pub fn apply(&mut self, event: PollEvent<T>) {
        match event {
            PollEvent::Started => {
                self.status = PollStatus::Loading;
                self.error = None;
            }
            PollEvent::Succeeded { data, at } => {
                self.status = PollStatus::Ready;
                self.data = Some(data);
                self.error = None;
                self.last_updated = Some(at);
            }
            PollEvent::Failed { message } => {
                self.status = PollStatus::Failed;
                self.error = Some(message);
            }
        }
    }
}

/// One observable step of a poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent<T> {
    /// A fetch was issued. Clears any previous error; keeps previous data.
    Started,
    /// The fetch resolved with fresh derived data.
    Succeeded { data: T, at: DateTime<Utc> },
    /// The fetch failed; `message` is the display string.
    Failed { message: String },
}

/// Pure reducer form of [`PollState::apply`].
pub fn reduce<T>(mut state: PollState<T>, event: PollEvent<T>) -> PollState<T> {
    state.apply(event);
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state = PollState::<u32>::new();
        assert_eq!(state.status, PollStatus::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn test_started_clears_error_keeps_data() {
        let mut state = PollState::new();
        state.apply(PollEvent::Succeeded {
            data: 7,
            at: Utc::now(),
        });
        state.apply(PollEvent::Failed {
            message: "boom".into(),
        });
        state.apply(PollEvent::Started);
        assert_eq!(state.status, PollStatus::Loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, Some(7));
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let at = Utc::now();
        let mut state = PollState::new();
        state.apply(PollEvent::Succeeded { data: 1, at });
        state.apply(PollEvent::Started);
        state.apply(PollEvent::Failed {
            message: "failed to fetch data".into(),
        });
        assert_eq!(state.status, PollStatus::Failed);
        assert_eq!(state.data, Some(1));
        assert_eq!(state.error.as_deref(), Some("failed to fetch data"));
        assert_eq!(state.last_updated, Some(at));
    }

    #[test]
    fn test_retry_after_failure_replaces_error_with_fresh_data() {
        let mut state = PollState::new();
        state.apply(PollEvent::Started);
        state.apply(PollEvent::Failed {
            message: "boom".into(),
        });
        state.apply(PollEvent::Started);
        let at = Utc::now();
        state.apply(PollEvent::Succeeded { data: 42, at });
        assert_eq!(state.status, PollStatus::Ready);
        assert_eq!(state.data, Some(42));
        assert!(state.error.is_none());
        assert_eq!(state.last_updated, Some(at));
    }

    #[test]
    fn test_reduce_matches_apply() {
        let state = reduce(PollState::<u32>::new(), PollEvent::Started);
        assert!(state.is_loading());
    }
}
