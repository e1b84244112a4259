use crate::{ApiError, Session};

/// Remote workout API.
#[allow(async_fn_in_trait)]
pub trait WorkoutApi {
    async fn submit_workout(&self, session: &Session) -> Result<(), ApiError>;
}

/// Result of finishing a session and submitting it to the remote API.
#[derive(Debug)]
pub enum Submission {
    Synced,
    /// The session is only recorded locally.
    LocalOnly(ApiError),
}

impl Submission {
    #[must_use]
    pub fn is_synced(&self) -> bool {
        matches!(self, Submission::Synced)
    }
}
