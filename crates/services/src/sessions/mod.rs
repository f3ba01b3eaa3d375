mod progress;
mod store;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::InterviewError;
pub use progress::SessionProgress;
pub use store::SessionStore;
pub use workflow::InterviewService;
