use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::CategoryInput;
use crate::features::categories::repositories::DynCategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: DynCategoryRepository,
}

impl CategoryService {
    pub fn new(repository: DynCategoryRepository) -> Self {
        Self { repository }
    }

    /// List all categories, newest first
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> Result<CategoryResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: CategoryInput) -> Result<CategoryResponseDto> {
        let category = self.repository.create(&input).await?;
        tracing::info!("Category created: id={}, name={:?}", category.id, category.name);
        Ok(category.into())
    }

    pub async fn update(&self, id: i64, input: CategoryInput) -> Result<CategoryResponseDto> {
        let category = self
            .repository
            .update(id, &input)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Category updated: id={}", category.id);
        Ok(category.into())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}
