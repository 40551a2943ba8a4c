use crate::models::Question;

/// Submit outcome for the displayed question. `Wrong` does not lock the
/// question; `Correct` is terminal until the question changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Wrong,
    Correct,
}

/// Presentation cue emitted alongside a state change. The controller only
/// ever consumes the boolean verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Select,
    Discover,
    Correct,
    Incorrect,
}

/// Transient state for one question: created fresh when the active question
/// changes, discarded on navigation away.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<usize>,
    discovery_success: bool,
    interacted: bool,
    status: Status,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status() == Status::Correct
    }

    /// Option selection; frozen once the question is answered correctly.
    /// Reselecting after a wrong submit clears the verdict.
    pub fn select_option(&mut self, question: &Question, idx: usize) -> Option<Feedback> {
        if self.is_complete() || idx >= question.options.len() {
            return None;
        }
        self.selected = Some(idx);
        self.status = Status::Idle;
        Some(Feedback::Select)
    }

    /// Synchronous report from the discovery board, delivered on every
    /// relevant board change.
    pub fn report_discovery(&mut self, success: bool) -> Option<Feedback> {
        self.discovery_success = success;
        self.interacted = true;
        if success {
            Some(Feedback::Discover)
        } else {
            None
        }
    }

    /// Submit is permitted iff an option is selected (when options exist) or
    /// at least one board interaction has occurred (discovery questions).
    pub fn can_submit(&self, question: &Question) -> bool {
        if question.scored_by_options() {
            self.selected.is_some()
        } else if question.template.is_some() {
            self.interacted
        } else {
            false
        }
    }

    /// Resolve the verdict. Options take precedence over the discovery flag
    /// when both mechanisms are present.
    pub fn submit(&mut self, question: &Question) -> Option<Feedback> {
        if self.is_complete() || !self.can_submit(question) {
            return None;
        }

        let correct = if question.scored_by_options() {
            self.selected == question.correct
        } else {
            self.discovery_success
        };

        if correct {
            self.status = Status::Correct;
            Some(Feedback::Correct)
        } else {
            self.status = Status::Wrong;
            Some(Feedback::Incorrect)
        }
    }
}
