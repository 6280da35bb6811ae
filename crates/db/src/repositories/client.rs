//! Client repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use kodestudio_core::client::ClientData;
use kodestudio_shared::types::{ClientId, Page, PageRequest};

use super::search::any_column_contains;
use crate::entities::clients;

/// Filter options for listing clients.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    /// Exact city match.
    pub ciudad: Option<String>,
}

/// Client repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated client.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, data: ClientData) -> Result<clients::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let client = clients::ActiveModel {
            id: Set(ClientId::new().into_inner()),
            nombre: Set(data.nombre),
            celular: Set(data.celular),
            email: Set(data.email),
            ciudad: Set(data.ciudad),
            created_at: Set(now),
            updated_at: Set(now),
        };

        client.insert(&self.db).await
    }

    /// Finds a client by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: ClientId) -> Result<Option<clients::Model>, DbErr> {
        clients::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
    }

    /// Lists clients newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: ClientFilter,
        page: PageRequest,
    ) -> Result<Page<clients::Model>, DbErr> {
        let mut query = clients::Entity::find().order_by_desc(clients::Column::CreatedAt);

        if let Some(ciudad) = filter.ciudad {
            query = query.filter(clients::Column::Ciudad.eq(ciudad));
        }

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.index()).await?;

        Ok(Page::new(items, page, total))
    }

    /// Case-insensitive substring search over name, email, city and phone.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn search(&self, term: &str) -> Result<Vec<clients::Model>, DbErr> {
        clients::Entity::find()
            .filter(any_column_contains(
                &[
                    clients::Column::Nombre,
                    clients::Column::Email,
                    clients::Column::Ciudad,
                    clients::Column::Celular,
                ],
                term,
            ))
            .order_by_desc(clients::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Replaces a client's fields. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn update(
        &self,
        id: ClientId,
        data: ClientData,
    ) -> Result<Option<clients::Model>, DbErr> {
        let Some(client) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: clients::ActiveModel = client.into();
        active.nombre = Set(data.nombre);
        active.celular = Set(data.celular);
        active.email = Set(data.email);
        active.ciudad = Set(data.ciudad);
        active.updated_at = Set(chrono::Utc::now().into());

        active.update(&self.db).await.map(Some)
    }

    /// Deletes a client. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: ClientId) -> Result<bool, DbErr> {
        let result = clients::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
