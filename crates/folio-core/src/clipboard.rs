//! Copy-button feedback.

use std::time::Duration;

/// How long the "Copied!" label stays up.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

pub const COPIED_LABEL: &str = "Copied!";

/// Label state of a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    /// Button text given its resting label.
    pub fn label<'a>(&self, resting: &'a str) -> &'a str {
        match self {
            CopyFeedback::Copied => COPIED_LABEL,
            CopyFeedback::Idle | CopyFeedback::Failed => resting,
        }
    }

    /// Whether the button uses its highlighted styling.
    pub fn is_highlighted(&self) -> bool {
        matches!(self, CopyFeedback::Copied)
    }
}

/// Feedback plus a generation counter, so that only the revert scheduled by
/// the latest copy takes effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyButtonState {
    feedback: CopyFeedback,
    generation: u64,
}

impl CopyButtonState {
    pub fn feedback(&self) -> CopyFeedback {
        self.feedback
    }

    /// Record a copy attempt. Returns the generation to pass to [`revert`].
    ///
    /// [`revert`]: Self::revert
    pub fn record(&mut self, succeeded: bool) -> u64 {
        self.generation += 1;
        self.feedback = if succeeded {
            CopyFeedback::Copied
        } else {
            CopyFeedback::Failed
        };
        self.generation
    }

    /// Return to the resting label if no newer copy happened since.
    pub fn revert(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.feedback = CopyFeedback::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CopyFeedback::Idle.label("Copy"), "Copy");
        assert_eq!(CopyFeedback::Copied.label("Copy"), "Copied!");
        assert_eq!(CopyFeedback::Failed.label("Copy"), "Copy");
        assert!(CopyFeedback::Copied.is_highlighted());
        assert!(!CopyFeedback::Failed.is_highlighted());
    }

    #[test]
    fn test_revert_restores_label() {
        let mut state = CopyButtonState::default();
        let generation = state.record(true);
        assert_eq!(state.feedback(), CopyFeedback::Copied);
        assert!(state.revert(generation));
        assert_eq!(state.feedback(), CopyFeedback::Idle);
    }

    #[test]
    fn test_old_revert_ignored_after_second_copy() {
        let mut state = CopyButtonState::default();
        let first = state.record(true);
        let second = state.record(true);

        assert!(!state.revert(first));
        assert_eq!(state.feedback(), CopyFeedback::Copied);
        assert!(state.revert(second));
    }
}
