//! Client for the remote AI interview service.
//!
//! The service exposes exactly two operations: starting an interview (which
//! returns the question list and a scenario) and scoring a submitted answer.
//! Everything behind those endpoints is opaque to this crate.

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use interview_core::model::{Evaluation, Score};

use crate::error::InterviewApiError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct InterviewApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl InterviewApiConfig {
    /// Reads the config from `INTERVIEW_API_BASE_URL` and
    /// `INTERVIEW_API_TOKEN`. A missing base URL falls back to a local
    /// development server; a blank token is treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("INTERVIEW_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());
        let token = env::var("INTERVIEW_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self { base_url, token }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct StartInterviewRequest {
    pub role: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartInterviewResponse {
    pub questions: Vec<String>,
    pub scenario: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerRequest {
    pub question: String,
    pub answer: String,
    pub role: String,
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerResponse {
    pub feedback: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub recommendations: Option<String>,
}

impl From<SubmitAnswerResponse> for Evaluation {
    fn from(response: SubmitAnswerResponse) -> Self {
        // The evaluator is authoritative: an out-of-scale score is clamped
        // rather than failing the whole response.
        Self {
            feedback: response.feedback,
            score: response.score.map(Score::clamped),
            recommendations: response.recommendations,
        }
    }
}

//
// ─── API TRAIT ─────────────────────────────────────────────────────────────────
//

/// The two remote operations the interview workflow depends on, behind a
/// trait so tests can substitute a scripted double.
#[async_trait]
pub trait InterviewApi: Send + Sync {
    /// Fetches the question list and scenario for a new interview.
    async fn start_interview(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<StartInterviewResponse, InterviewApiError>;

    /// Submits one answer for scoring.
    async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, InterviewApiError>;
}

//
// ─── HTTP IMPLEMENTATION ───────────────────────────────────────────────────────
//

/// `reqwest`-backed implementation of [`InterviewApi`].
#[derive(Clone)]
pub struct HttpInterviewApi {
    client: Client,
    config: InterviewApiConfig,
}

impl HttpInterviewApi {
    #[must_use]
    pub fn new(config: InterviewApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(InterviewApiConfig::from_env())
    }

    async fn post_json<Req, Res>(&self, path: &str, request: &Req) -> Result<Res, InterviewApiError>
    where
        Req: Serialize + Sync,
        Res: for<'de> Deserialize<'de>,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(url = %url, "interview service request");

        let mut builder = self.client.post(&url).json(request);
        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, url = %url, "interview service error response");
            return Err(InterviewApiError::HttpStatus(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl InterviewApi for HttpInterviewApi {
    async fn start_interview(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<StartInterviewResponse, InterviewApiError> {
        let response: StartInterviewResponse =
            self.post_json("/api/ai/interview/start", request).await?;
        if response.questions.is_empty() {
            return Err(InterviewApiError::EmptyQuestions);
        }
        tracing::debug!(
            questions = response.questions.len(),
            "interview questions received"
        );
        Ok(response)
    }

    async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, InterviewApiError> {
        self.post_json("/api/ai/interview/answer", request).await
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
