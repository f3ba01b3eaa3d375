use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// Classification of an interview: the role being practiced for, the
/// seniority level, and an optional interview language.
///
/// Role and level are free text; the remote service is authoritative about
/// what they mean. The only client-side rule is that neither may be blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewProfile {
    role: String,
    level: String,
    language: Option<String>,
}

impl InterviewProfile {
    /// Builds a profile, rejecting blank role or level.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyRole` or `ProfileError::EmptyLevel` when
    /// the respective field is empty or whitespace-only.
    pub fn new(
        role: impl Into<String>,
        level: impl Into<String>,
        language: Option<String>,
    ) -> Result<Self, ProfileError> {
        let role = role.into();
        let level = level.into();
        if role.trim().is_empty() {
            return Err(ProfileError::EmptyRole);
        }
        if level.trim().is_empty() {
            return Err(ProfileError::EmptyLevel);
        }
        Ok(Self {
            role,
            level,
            language,
        })
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
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

//
// ─── PROFILE ERRORS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("interview role must not be empty")]
    EmptyRole,

    #[error("interview level must not be empty")]
    EmptyLevel,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_accepts_role_and_level() {
        let profile = InterviewProfile::new("backend", "junior", None).unwrap();
        assert_eq!(profile.role(), "backend");
        assert_eq!(profile.level(), "junior");
        assert_eq!(profile.language(), None);
    }

    #[test]
    fn profile_keeps_language() {
        let profile = InterviewProfile::new("frontend", "senior", Some("en".into())).unwrap();
        assert_eq!(profile.language(), Some("en"));
    }

    #[test]
    fn blank_role_is_rejected() {
        let err = InterviewProfile::new("   ", "junior", None).unwrap_err();
        assert_eq!(err, ProfileError::EmptyRole);
    }

    #[test]
    fn blank_level_is_rejected() {
        let err = InterviewProfile::new("backend", "", None).unwrap_err();
        assert_eq!(err, ProfileError::EmptyLevel);
    }
}
