//! Review repository for the public testimonials carousel.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::entities::reviews;

/// Read-only access to client reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    db: DatabaseConnection,
}

impl ReviewRepository {
    /// Creates a new review repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<reviews::Model>, DbErr> {
        reviews::Entity::find()
            .order_by_desc(reviews::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
