use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryInput};
use crate::shared::types::RecordStats;

pub type DynCategoryRepository = Arc<dyn CategoryRepository>;

/// Persistence for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, newest first
    async fn find_all(&self) -> Result<Vec<Category>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn create(&self, input: &CategoryInput) -> Result<Category>;
    /// Returns `None` when no row has this id
    async fn update(&self, id: i64, input: &CategoryInput) -> Result<Option<Category>>;
    /// Returns `false` when no row has this id
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn stats(&self) -> Result<RecordStats>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, active, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, active, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, input: &CategoryInput) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, active)
            VALUES ($1, $2, COALESCE($3, TRUE))
            RETURNING id, name, description, active, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.description_value())
        .bind(input.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: i64, input: &CategoryInput) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1,
                description = CASE WHEN $5 THEN $2 ELSE description END,
                active = COALESCE($3, active),
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, description, active, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.description_value())
        .bind(input.active)
        .bind(id)
        .bind(input.description.is_some())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn stats(&self) -> Result<RecordStats> {
        let (total, active): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COUNT(*) FILTER (WHERE active)
            FROM categories
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(RecordStats { total, active })
    }
}
