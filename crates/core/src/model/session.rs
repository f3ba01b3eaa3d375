use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, SessionId};
use crate::model::profile::InterviewProfile;
use crate::model::question::{Evaluation, InterviewQuestion, QuestionResponse};

//
// ─── SESSION ERRORS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("interview started with no questions")]
    Empty,

    #[error("interview session already completed")]
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One complete interview attempt, from start to completion or abandonment.
///
/// The session steps through a fixed list of questions fetched at start time.
/// Each recorded answer either advances the question pointer or, when the
/// last question was just answered, completes the session. A completed
/// session is frozen: further answers are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    id: SessionId,
    profile: InterviewProfile,
    scenario: String,
    questions: Vec<InterviewQuestion>,
    current: usize,
    results: Vec<Evaluation>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
    /// Creates a new active session from the prompts returned by the remote
    /// service, assigning sequential question ids starting at 0.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no prompts are provided.
    pub fn new(
        profile: InterviewProfile,
        scenario: impl Into<String>,
        prompts: Vec<String>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        if prompts.is_empty() {
            return Err(SessionError::Empty);
        }

        let questions = prompts
            .into_iter()
            .enumerate()
            .map(|(ordinal, prompt)| {
                InterviewQuestion::new(QuestionId::new(ordinal as u32), prompt)
            })
            .collect();

        Ok(Self {
            id: SessionId::generate(),
            profile,
            scenario: scenario.into(),
            questions,
            current: 0,
            results: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn profile(&self) -> &InterviewProfile {
        &self.profile
    }

    #[must_use]
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    #[must_use]
    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn results(&self) -> &[Evaluation] {
        &self.results
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// True until the session is completed, by answering the last question
    /// or by an explicit finish.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.completed_at.is_none()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// 0-based pointer into the question list. Equals the question count
    /// once every question has been answered.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&InterviewQuestion> {
        if self.is_active() {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.results.len()
    }

    /// Number of remaining unanswered questions.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    /// Records a scored answer against the current question and advances the
    /// session. Answering the last question completes the session with
    /// `completed_at = answered_at`.
    ///
    /// The question's answer/feedback/score are set in the same step the
    /// evaluation is appended to `results`, so the two never disagree.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn record_answer(
        &mut self,
        answer: impl Into<String>,
        evaluation: Evaluation,
        answered_at: DateTime<Utc>,
    ) -> Result<&Evaluation, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        let Some(question) = self.questions.get_mut(self.current) else {
            return Err(SessionError::Completed);
        };

        question.record_response(QuestionResponse {
            answer: answer.into(),
            feedback: evaluation.feedback.clone(),
            score: evaluation.score,
        });
        self.results.push(evaluation);

        self.current += 1;
        if self.current >= self.questions.len() {
            self.completed_at = Some(answered_at);
        }

        self.results.last().ok_or(SessionError::Completed)
    }

    /// Ends the session without answering the remaining questions.
    ///
    /// Returns `true` if the session transitioned to completed, `false` if
    /// it was already complete (completed sessions are never re-stamped).
    pub fn finish(&mut self, completed_at: DateTime<Utc>) -> bool {
        if self.is_complete() {
            return false;
        }
        self.completed_at = Some(completed_at);
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
