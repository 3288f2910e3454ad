//! Customer repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set, Statement,
};
use uuid::Uuid;

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use common::{AppError, AppResult};
use domain::{Customer, CustomerDraft};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// List all customers, oldest first
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Create a new customer
    async fn create(&self, draft: CustomerDraft) -> AppResult<Customer>;

    /// Insert several customers at once, returning how many were written
    async fn create_many(&self, drafts: Vec<CustomerDraft>) -> AppResult<u64>;

    /// Replace the editable fields of an existing customer
    async fn update(&self, id: Uuid, draft: CustomerDraft) -> AppResult<Customer>;

    /// Permanently delete customer by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Delete every customer, returning how many were removed
    async fn delete_all(&self) -> AppResult<u64>;

    /// Number of stored customers
    async fn count(&self) -> AppResult<u64>;

    /// Check storage connectivity
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of CustomerRepository backed by SeaORM
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn new_active_model(draft: CustomerDraft) -> ActiveModel {
    let now = chrono::Utc::now();
    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(draft.name),
        email: Set(draft.email),
        phone: Set(draft.phone),
        address: Set(draft.address),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Customer::from))
    }

    async fn list(&self) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find()
            .order_by_asc(customer::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn create(&self, draft: CustomerDraft) -> AppResult<Customer> {
        let model = new_active_model(draft)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(Customer::from(model))
    }

    async fn create_many(&self, drafts: Vec<CustomerDraft>) -> AppResult<u64> {
        if drafts.is_empty() {
            return Ok(0);
        }

        let models: Vec<ActiveModel> = drafts.into_iter().map(new_active_model).collect();
        let inserted = CustomerEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(inserted)
    }

    async fn update(&self, id: Uuid, draft: CustomerDraft) -> AppResult<Customer> {
        let existing = CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(draft.name);
        active.email = Set(draft.email);
        active.phone = Set(draft.phone);
        active.address = Set(draft.address);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Customer::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CustomerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = CustomerEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }

    async fn count(&self) -> AppResult<u64> {
        CustomerEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Database ping failed");
                AppError::service_unavailable("database")
            })?;
        Ok(())
    }
}
