//! Project requirement repository for database operations.

use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, sea_query::Expr,
};

use kodestudio_core::requirement::{RequirementData, RequirementStats};
use kodestudio_shared::types::{Page, PageRequest, RequirementId};

use super::search::any_column_contains;
use crate::entities::project_requirements::{self, Column};

/// Filter options for listing requirements. All filters are exact matches.
#[derive(Debug, Clone, Default)]
pub struct RequirementFilter {
    /// Workflow status.
    pub status: Option<String>,
    /// Priority label.
    pub priority: Option<String>,
    /// Requesting department.
    pub department: Option<String>,
    /// Project type label.
    pub project_type: Option<String>,
}

/// Requirement repository for CRUD, search and dashboard stats.
#[derive(Debug, Clone)]
pub struct RequirementRepository {
    db: DatabaseConnection,
}

impl RequirementRepository {
    /// Creates a new requirement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated requirement.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn insert(&self, data: RequirementData) -> Result<project_requirements::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let mut active = apply(<project_requirements::ActiveModel as Default>::default(), data);
        active.id = Set(RequirementId::new().into_inner());
        active.created_at = Set(now);
        active.updated_at = Set(now);

        active.insert(&self.db).await
    }

    /// Fetches a requirement by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(
        &self,
        id: RequirementId,
    ) -> Result<Option<project_requirements::Model>, DbErr> {
        project_requirements::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
    }

    /// Lists requirements newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: RequirementFilter,
        page: PageRequest,
    ) -> Result<Page<project_requirements::Model>, DbErr> {
        let mut query = project_requirements::Entity::find().order_by_desc(Column::CreatedAt);

        for (column, value) in [
            (Column::Status, filter.status),
            (Column::Priority, filter.priority),
            (Column::Department, filter.department),
            (Column::ProjectType, filter.project_type),
        ] {
            if let Some(value) = value {
                query = query.filter(column.eq(value));
            }
        }

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(items, page, total))
    }

    /// Replaces a requirement's fields. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        id: RequirementId,
        data: RequirementData,
    ) -> Result<Option<project_requirements::Model>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active = apply(existing.into(), data);
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await.map(Some)
    }

    /// Deletes a requirement. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: RequirementId) -> Result<bool, DbErr> {
        let result = project_requirements::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Case-insensitive substring search over title, description, requestor
    /// and department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(&self, term: &str) -> Result<Vec<project_requirements::Model>, DbErr> {
        project_requirements::Entity::find()
            .filter(any_column_contains(
                &[
                    Column::ProjectTitle,
                    Column::Description,
                    Column::RequestorName,
                    Column::Department,
                ],
                term,
            ))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Total count plus counts grouped by status, priority and department.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the queries fail.
    pub async fn stats(&self) -> Result<RequirementStats, DbErr> {
        let total_requirements = project_requirements::Entity::find().count(&self.db).await?;

        let stats = RequirementStats {
            total_requirements,
            status_counts: self.count_by(Column::Status).await?,
            priority_counts: self.count_by(Column::Priority).await?,
            department_counts: self.count_by(Column::Department).await?,
        };

        tracing::debug!(total = stats.total_requirements, "requirement stats computed");
        Ok(stats)
    }

    async fn count_by(&self, column: Column) -> Result<BTreeMap<String, u64>, DbErr> {
        let rows: Vec<(String, i64)> = project_requirements::Entity::find()
            .select_only()
            .column(column)
            .column_as(Expr::col(Column::Id).count(), "count")
            .group_by(column)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(key, count)| (key, u64::try_from(count).unwrap_or_default()))
            .collect())
    }
}

fn apply(
    mut active: project_requirements::ActiveModel,
    data: RequirementData,
) -> project_requirements::ActiveModel {
    active.date = Set(data.date);
    active.project_title = Set(data.project_title);
    active.requestor_name = Set(data.requestor_name);
    active.requestor_phone = Set(data.requestor_phone);
    active.requestor_email = Set(data.requestor_email);
    active.department = Set(data.department);
    active.sponsor_name = Set(data.sponsor_name);
    active.sponsor_phone = Set(data.sponsor_phone);
    active.sponsor_email = Set(data.sponsor_email);
    active.description = Set(data.description);
    active.dependencies = Set(data.dependencies);
    active.requested_end_date = Set(data.requested_end_date);
    active.estimated_budget = Set(data.estimated_budget);
    active.status = Set(data.status);
    active.priority = Set(data.priority);
    active.project_type = Set(data.project_type);
    active.technical_requirements = Set(data.technical_requirements);
    active.business_justification = Set(data.business_justification);
    active.risk_assessment = Set(data.risk_assessment);
    active
}
