use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::SessionId;
use crate::model::question::Score;
use crate::model::session::InterviewSession;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("session is still active")]
    Active,

    #[error("completed_at is before started_at")]
    InvalidTimeRange,
}

/// Qualitative band for an average interview score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    /// Maps an average score onto its band. Thresholds match the results
    /// view of the practice UI: 8 and above is excellent, 6 good, 4 fair.
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        let value = score.value();
        if value >= 8.0 {
            Self::Excellent
        } else if value >= 6.0 {
            Self::Good
        } else if value >= 4.0 {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

/// Aggregate summary for a completed interview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    session_id: SessionId,
    role: String,
    level: String,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    answered: u32,
    average_score: Score,
    band: ScoreBand,
}

impl SessionSummary {
    /// Builds a summary from a completed session.
    ///
    /// The average is the mean over all evaluations, counting a missing
    /// score as zero. A session finished early with no answers averages to
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Active` if the session has not completed, and
    /// `SummaryError::InvalidTimeRange` if its timestamps are inverted.
    pub fn from_session(session: &InterviewSession) -> Result<Self, SummaryError> {
        let completed_at = session.completed_at().ok_or(SummaryError::Active)?;
        if completed_at < session.started_at() {
            return Err(SummaryError::InvalidTimeRange);
        }

        let results = session.results();
        let average = if results.is_empty() {
            0.0
        } else {
            let total: f64 = results
                .iter()
                .map(|evaluation| evaluation.score.map_or(0.0, |s| s.value()))
                .sum();
            total / results.len() as f64
        };
        let average_score = Score::clamped(average);

        Ok(Self {
            session_id: session.id(),
            role: session.profile().role().to_owned(),
            level: session.profile().level().to_owned(),
            started_at: session.started_at(),
            completed_at,
            total_questions: session.total_questions() as u32,
            answered: session.answered_count() as u32,
            average_score,
            band: ScoreBand::from_score(average_score),
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.answered
    }

    #[must_use]
    pub fn average_score(&self) -> Score {
        self.average_score
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        self.band
    }
}
