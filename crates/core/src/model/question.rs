use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// A question score on the 0..=10 scale used by the remote evaluator.
///
/// Fractional values are allowed; the evaluator emits scores like 8.5.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// Builds a score, rejecting values outside 0..=10 or non-finite input.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` for values outside the scale.
    pub fn new(value: f64) -> Result<Self, ScoreError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ScoreError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Builds a score by clamping into 0..=10.
    ///
    /// Used at the wire boundary: the remote evaluator is authoritative and
    /// an out-of-scale value should not fail an otherwise valid response.
    /// Non-finite input clamps to the minimum.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(Self::MIN)
        }
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score {value} is outside the 0..=10 scale")]
    OutOfRange { value: f64 },
}

//
// ─── EVALUATION ────────────────────────────────────────────────────────────────
//

/// Raw scoring response for one submitted answer, as returned by the remote
/// evaluator. A session keeps one of these per answered question, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub feedback: String,
    pub score: Option<Score>,
    pub recommendations: Option<String>,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// The answer/feedback/score triple recorded against a question.
///
/// Set in one step when an answer is submitted and scored, so a question is
/// either fully unanswered or fully answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
    pub feedback: String,
    pub score: Option<Score>,
}

/// One question within an interview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    id: QuestionId,
    prompt: String,
    response: Option<QuestionResponse>,
}

impl InterviewQuestion {
    /// Creates an unanswered question with the given ordinal id.
    #[must_use]
    pub fn new(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            response: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn response(&self) -> Option<&QuestionResponse> {
        self.response.as_ref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }

    pub(crate) fn record_response(&mut self, response: QuestionResponse) {
        self.response = Some(response);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_scale_values() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(8.5).unwrap().value(), 8.5);
        assert_eq!(Score::new(10.0).unwrap().value(), 10.0);
    }

    #[test]
    fn score_rejects_out_of_scale() {
        assert!(matches!(
            Score::new(-0.1),
            Err(ScoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            Score::new(10.5),
            Err(ScoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            Score::new(f64::NAN),
            Err(ScoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn score_clamps_at_wire_boundary() {
        assert_eq!(Score::clamped(11.0).value(), 10.0);
        assert_eq!(Score::clamped(-3.0).value(), 0.0);
        assert_eq!(Score::clamped(7.25).value(), 7.25);
        assert_eq!(Score::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn question_starts_unanswered() {
        let question = InterviewQuestion::new(QuestionId::new(0), "Tell me about REST");
        assert!(!question.is_answered());
        assert!(question.response().is_none());
    }

    #[test]
    fn response_sets_answer_feedback_and_score_together() {
        let mut question = InterviewQuestion::new(QuestionId::new(0), "Q");
        question.record_response(QuestionResponse {
            answer: "A".into(),
            feedback: "Good".into(),
            score: Some(Score::new(7.0).unwrap()),
        });

        let response = question.response().unwrap();
        assert_eq!(response.answer, "A");
        assert_eq!(response.feedback, "Good");
        assert_eq!(response.score.unwrap().value(), 7.0);
        assert!(question.is_answered());
    }
}
