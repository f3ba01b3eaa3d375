mod ids;
mod profile;
mod question;
mod session;
mod summary;

pub use ids::{ParseIdError, QuestionId, SessionId};
pub use profile::{InterviewProfile, ProfileError};
pub use question::{Evaluation, InterviewQuestion, QuestionResponse, Score, ScoreError};
pub use session::{InterviewSession, SessionError};
pub use summary::{ScoreBand, SessionSummary, SummaryError};
