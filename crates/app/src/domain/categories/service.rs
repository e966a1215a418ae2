//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        data::NewCategory,
        errors::CategoriesServiceError,
        records::{CategoryRecord, CategoryUuid},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_category(&mut tx, &category).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieve all categories ordered by title.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Create a category.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Delete a category. Fails with [`CategoriesServiceError::InUse`] while
    /// products still reference it.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;
}
