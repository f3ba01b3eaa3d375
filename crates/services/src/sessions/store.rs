use interview_core::model::{InterviewSession, SessionId};

/// In-memory bookkeeping for interview sessions.
///
/// Owns the session list, the currently viewed session, the in-flight flag,
/// and the last transition error. Consumers read through the accessors;
/// lifecycle mutation happens only through [`super::InterviewService`]
/// transitions, which use the `pub(crate)` mutators.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<InterviewSession>,
    current: Option<SessionId>,
    busy: bool,
    last_error: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All sessions, in creation order.
    #[must_use]
    pub fn sessions(&self) -> &[InterviewSession] {
        &self.sessions
    }

    /// The session currently selected for interaction or display, if any.
    #[must_use]
    pub fn current_session(&self) -> Option<&InterviewSession> {
        self.current.and_then(|id| self.session(id))
    }

    /// True while a start or answer transition is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Message of the most recent failed transition, cleared when the next
    /// transition begins or via [`Self::clear_error`].
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Looks up a session by id.
    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&InterviewSession> {
        self.sessions.iter().find(|session| session.id() == id)
    }

    /// All sessions that have finished, by answering every question or by an
    /// explicit finish.
    #[must_use]
    pub fn completed_sessions(&self) -> Vec<&InterviewSession> {
        self.sessions
            .iter()
            .filter(|session| !session.is_active())
            .collect()
    }

    /// The active session, if any. The start transition finishes any
    /// previous active session, so at most one exists.
    #[must_use]
    pub fn active_session(&self) -> Option<&InterviewSession> {
        self.sessions.iter().find(|session| session.is_active())
    }

    /// Selects a session for display. Returns `false` if the id is unknown.
    /// Does not change the session's activity.
    pub fn show_results(&mut self, id: SessionId) -> bool {
        if self.session(id).is_some() {
            self.current = Some(id);
            true
        } else {
            false
        }
    }

    /// Clears the display selection.
    pub fn hide_results(&mut self) {
        self.current = None;
    }

    /// Clears the last transition error without running a transition.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Deletes a session. Clears the current pointer when it referenced the
    /// removed session. Returns `false` if the id is unknown.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|session| session.id() != id);
        let removed = self.sessions.len() != before;
        if removed && self.current == Some(id) {
            self.current = None;
        }
        removed
    }

    pub(crate) fn current_id(&self) -> Option<SessionId> {
        self.current
    }

    pub(crate) fn session_mut(&mut self, id: SessionId) -> Option<&mut InterviewSession> {
        self.sessions.iter_mut().find(|session| session.id() == id)
    }

    pub(crate) fn push_session(&mut self, session: InterviewSession) {
        self.current = Some(session.id());
        self.sessions.push(session);
    }

    pub(crate) fn set_current(&mut self, id: Option<SessionId>) {
        self.current = id;
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub(crate) fn set_error(&mut self, message: Option<String>) {
        self.last_error = message;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
