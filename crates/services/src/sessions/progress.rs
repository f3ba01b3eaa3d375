use interview_core::model::InterviewSession;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn for_session(session: &InterviewSession) -> Self {
        Self {
            total: session.total_questions(),
            answered: session.answered_count(),
            remaining: session.remaining(),
            is_complete: session.is_complete(),
        }
    }
}
