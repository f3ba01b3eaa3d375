#![forbid(unsafe_code)]

pub mod error;
pub mod interview_api;
pub mod sessions;

pub use interview_core::Clock;

pub use error::{InterviewApiError, InterviewError};
pub use interview_api::{
    HttpInterviewApi, InterviewApi, InterviewApiConfig, StartInterviewRequest,
    StartInterviewResponse, SubmitAnswerRequest, SubmitAnswerResponse,
};
pub use sessions::{InterviewService, SessionProgress, SessionStore};
