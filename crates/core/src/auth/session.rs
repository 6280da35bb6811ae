//! Per-request session context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kodestudio_shared::types::{SessionId, UserId};

/// Who is making the request, resolved from the bearer token.
///
/// Built once per request by the auth layer and passed to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Session the token belongs to.
    pub session_id: SessionId,
    /// Logged-in user.
    pub user_id: UserId,
    /// Username at login time.
    pub username: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    /// Returns true if the session has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
