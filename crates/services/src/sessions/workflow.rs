use std::sync::Arc;

use interview_core::Clock;
use interview_core::model::{
    Evaluation, InterviewProfile, InterviewSession, SessionError, SessionId, SessionSummary,
};

use super::progress::SessionProgress;
use super::store::SessionStore;
use crate::error::InterviewError;
use crate::interview_api::{InterviewApi, StartInterviewRequest, SubmitAnswerRequest};

/// Orchestrates the interview lifecycle against the remote service.
///
/// Owns the [`SessionStore`] and is the only place that mutates it. Each
/// transition clears the previous error, talks to the remote service where
/// needed, and applies its session update all-or-nothing after the remote
/// call succeeds. A transition invoked while another one is in flight fails
/// fast with [`InterviewError::Busy`] instead of racing it.
pub struct InterviewService {
    clock: Clock,
    api: Arc<dyn InterviewApi>,
    store: SessionStore,
}

impl InterviewService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn InterviewApi>) -> Self {
        Self {
            clock,
            api,
            store: SessionStore::new(),
        }
    }

    /// Read access to sessions, the current pointer, the busy flag, and the
    /// last error.
    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Progress of the currently selected session.
    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.store
            .current_session()
            .map(SessionProgress::for_session)
    }

    /// Starts a new interview for the given role and level.
    ///
    /// Fetches questions and scenario from the remote service, builds the
    /// session, and appends it as the current one. Any previously active
    /// session is finished locally first, so at most one session is ever
    /// active. Returns the newly started session.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Busy` while another transition is in flight,
    /// `InterviewError::Profile` for a blank role or level, and
    /// `InterviewError::Api` when the remote call fails; no session is
    /// created on failure.
    pub async fn start_interview(
        &mut self,
        role: &str,
        level: &str,
        language: Option<&str>,
    ) -> Result<InterviewSession, InterviewError> {
        self.begin()?;
        let result = self.start_inner(role, level, language).await;
        self.settle(&result);
        result
    }

    async fn start_inner(
        &mut self,
        role: &str,
        level: &str,
        language: Option<&str>,
    ) -> Result<InterviewSession, InterviewError> {
        let profile = InterviewProfile::new(role, level, language.map(str::to_owned))?;
        let request = StartInterviewRequest {
            role: profile.role().to_owned(),
            level: profile.level().to_owned(),
            language: profile.language().map(str::to_owned),
        };

        let response = self.api.start_interview(&request).await?;
        let now = self.clock.now();
        let session = InterviewSession::new(profile, response.scenario, response.questions, now)?;

        // At most one active session: finish the previous one before the new
        // session is appended.
        if let Some(open) = self.store.active_session().map(InterviewSession::id) {
            if let Some(previous) = self.store.session_mut(open) {
                previous.finish(now);
            }
        }

        tracing::info!(
            session = %session.id(),
            role = %session.profile().role(),
            questions = session.total_questions(),
            "interview started"
        );
        self.store.push_session(session.clone());
        Ok(session)
    }

    /// Submits the answer to the current question of the current session and
    /// records the returned evaluation.
    ///
    /// With no current session this is a no-op and returns `Ok(None)`,
    /// without touching the remote service.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::Busy` while another transition is in flight,
    /// `InterviewError::Session` with `SessionError::Completed` when the
    /// current session has already finished (checked before the remote call),
    /// and `InterviewError::Api` when scoring fails. The session is only
    /// mutated after the remote call succeeds.
    pub async fn submit_answer(
        &mut self,
        answer: &str,
    ) -> Result<Option<Evaluation>, InterviewError> {
        let Some(current) = self.store.current_id() else {
            return Ok(None);
        };
        self.begin()?;
        let result = self.submit_inner(current, answer).await;
        self.settle(&result);
        result.map(Some)
    }

    async fn submit_inner(
        &mut self,
        id: SessionId,
        answer: &str,
    ) -> Result<Evaluation, InterviewError> {
        let request = {
            let session = self
                .store
                .session(id)
                .ok_or(InterviewError::UnknownSession(id))?;
            let question = session.current_question().ok_or(SessionError::Completed)?;
            SubmitAnswerRequest {
                question: question.prompt().to_owned(),
                answer: answer.to_owned(),
                role: session.profile().role().to_owned(),
                level: session.profile().level().to_owned(),
                language: session.profile().language().map(str::to_owned),
            }
        };

        let response = self.api.submit_answer(&request).await?;
        let evaluation: Evaluation = response.into();

        let answered_at = self.clock.now();
        let session = self
            .store
            .session_mut(id)
            .ok_or(InterviewError::UnknownSession(id))?;
        session.record_answer(answer, evaluation.clone(), answered_at)?;
        if session.is_complete() {
            tracing::info!(session = %id, answered = session.answered_count(), "interview completed");
        }
        Ok(evaluation)
    }

    /// Ends the current session without server-side completion scoring.
    ///
    /// Purely local: marks the session completed (if it still was active)
    /// and clears the current pointer. Returns `false` when there is no
    /// current session.
    pub fn finish_interview(&mut self) -> bool {
        let Some(id) = self.store.current_id() else {
            return false;
        };
        let now = self.clock.now();
        if let Some(session) = self.store.session_mut(id) {
            if session.finish(now) {
                tracing::info!(session = %id, "interview finished early");
            }
        }
        self.store.set_current(None);
        true
    }

    /// Builds the aggregate summary for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::UnknownSession` for an unknown id and
    /// `InterviewError::Summary` if the session is still active.
    pub fn summarize(&self, id: SessionId) -> Result<SessionSummary, InterviewError> {
        let session = self
            .store
            .session(id)
            .ok_or(InterviewError::UnknownSession(id))?;
        Ok(SessionSummary::from_session(session)?)
    }

    /// Selects a session for display routing. See [`SessionStore::show_results`].
    pub fn show_results(&mut self, id: SessionId) -> bool {
        self.store.show_results(id)
    }

    /// Clears the display selection.
    pub fn hide_results(&mut self) {
        self.store.hide_results();
    }

    /// Clears the last transition error.
    pub fn clear_error(&mut self) {
        self.store.clear_error();
    }

    /// Deletes a session from the store.
    pub fn remove_session(&mut self, id: SessionId) -> bool {
        self.store.remove_session(id)
    }

    fn begin(&mut self) -> Result<(), InterviewError> {
        if self.store.is_busy() {
            return Err(InterviewError::Busy);
        }
        self.store.set_busy(true);
        self.store.set_error(None);
        Ok(())
    }

    fn settle<T>(&mut self, result: &Result<T, InterviewError>) {
        if let Err(error) = result {
            self.store.set_error(Some(error.to_string()));
        }
        self.store.set_busy(false);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InterviewApiError;
    use crate::interview_api::{StartInterviewResponse, SubmitAnswerResponse};
    use async_trait::async_trait;
    use interview_core::time::fixed_clock;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct ScriptedApi {
        start_responses: Mutex<Vec<Result<StartInterviewResponse, InterviewApiError>>>,
        answer_responses: Mutex<Vec<Result<SubmitAnswerResponse, InterviewApiError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn with_start(questions: &[&str]) -> Self {
            let api = Self::default();
            api.start_responses
                .lock()
                .unwrap()
                .push(Ok(StartInterviewResponse {
                    questions: questions.iter().map(|q| (*q).to_string()).collect(),
                    scenario: "S".into(),
                }));
            api
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InterviewApi for ScriptedApi {
        async fn start_interview(
            &self,
            _request: &StartInterviewRequest,
        ) -> Result<StartInterviewResponse, InterviewApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.start_responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(InterviewApiError::EmptyQuestions))
        }

        async fn submit_answer(
            &self,
            _request: &SubmitAnswerRequest,
        ) -> Result<SubmitAnswerResponse, InterviewApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer_responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(InterviewApiError::EmptyQuestions))
        }
    }

    #[tokio::test]
    async fn busy_service_rejects_second_transition() {
        let api = Arc::new(ScriptedApi::with_start(&["Q1"]));
        let mut service = InterviewService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn InterviewApi>);

        service.store.set_busy(true);
        let err = service
            .start_interview("backend", "junior", None)
            .await
            .unwrap_err();
        assert!(matches!(err, InterviewError::Busy));
        // The in-flight transition still owns the flag and no remote call
        // was made on its behalf.
        assert!(service.store().is_busy());
        assert!(service.store().last_error().is_none());
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn submit_without_session_is_a_noop() {
        let api = Arc::new(ScriptedApi::default());
        let mut service = InterviewService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn InterviewApi>);

        let result = service.submit_answer("anything").await.unwrap();
        assert!(result.is_none());
        assert_eq!(api.calls(), 0);
        assert!(!service.store().is_busy());
    }

    #[tokio::test]
    async fn submit_on_completed_current_session_fails_before_remote_call() {
        let api = Arc::new(ScriptedApi::with_start(&["Q1"]));
        let mut service = InterviewService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn InterviewApi>);

        let session = service
            .start_interview("backend", "junior", None)
            .await
            .unwrap();
        service.finish_interview();
        assert!(service.show_results(session.id()));
        let calls_before = api.calls();

        let err = service.submit_answer("late").await.unwrap_err();
        assert!(matches!(
            err,
            InterviewError::Session(SessionError::Completed)
        ));
        assert_eq!(api.calls(), calls_before);
        assert_eq!(
            service.store().last_error(),
            Some("interview session already completed")
        );
    }

    #[tokio::test]
    async fn blank_role_is_rejected_without_remote_call() {
        let api = Arc::new(ScriptedApi::with_start(&["Q1"]));
        let mut service = InterviewService::new(fixed_clock(), Arc::clone(&api) as Arc<dyn InterviewApi>);

        let err = service
            .start_interview("  ", "junior", None)
            .await
            .unwrap_err();
        assert!(matches!(err, InterviewError::Profile(_)));
        assert_eq!(api.calls(), 0);
        assert!(service.store().sessions().is_empty());
        assert!(service.store().last_error().is_some());
    }
}
