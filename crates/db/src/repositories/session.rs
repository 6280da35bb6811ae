//! Session repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use kodestudio_core::auth::{SessionContext, hash_token};
use kodestudio_shared::types::{SessionId, UserId};

use crate::entities::{sessions, users};

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new session for a freshly issued token.
    ///
    /// Only the token's hash is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<sessions::Model, DbErr> {
        let now = Utc::now().into();

        let session = sessions::ActiveModel {
            id: Set(SessionId::new().into_inner()),
            user_id: Set(user_id.into_inner()),
            token_hash: Set(hash_token(token)),
            expires_at: Set(expires_at.into()),
            revoked_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        session.insert(&self.db).await
    }

    /// Resolves a bearer token to its session context.
    ///
    /// Returns `None` for unknown, revoked or expired tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_active_by_token(
        &self,
        token: &str,
    ) -> Result<Option<SessionContext>, DbErr> {
        let now = Utc::now();

        let found = sessions::Entity::find()
            .filter(sessions::Column::TokenHash.eq(hash_token(token)))
            .filter(sessions::Column::RevokedAt.is_null())
            .filter(sessions::Column::ExpiresAt.gt(now))
            .find_also_related(users::Entity)
            .one(&self.db)
            .await?;

        Ok(found.and_then(|(session, user)| {
            user.map(|u| SessionContext {
                session_id: SessionId::from_uuid(session.id),
                user_id: UserId::from_uuid(u.id),
                username: u.username,
                expires_at: session.expires_at.with_timezone(&Utc),
            })
        }))
    }

    /// Finds a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: SessionId) -> Result<Option<sessions::Model>, DbErr> {
        sessions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
    }

    /// Revokes a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn revoke(&self, id: SessionId) -> Result<(), DbErr> {
        let now = Utc::now().into();

        sessions::ActiveModel {
            id: Set(id.into_inner()),
            revoked_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        tracing::debug!(session_id = %id, "session revoked");
        Ok(())
    }

    /// Deletes expired sessions (for maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn cleanup_expired(&self) -> Result<u64, DbErr> {
        let result = sessions::Entity::delete_many()
            .filter(sessions::Column::ExpiresAt.lt(Utc::now()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
