use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::marcas::models::{Marca, MarcaInput};
use crate::shared::types::RecordStats;

pub type DynMarcaRepository = Arc<dyn MarcaRepository>;

/// Persistence for marcas
#[async_trait]
pub trait MarcaRepository: Send + Sync {
    /// All marcas, newest first
    async fn find_all(&self) -> Result<Vec<Marca>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Marca>>;
    async fn create(&self, input: &MarcaInput) -> Result<Marca>;
    /// Returns `None` when no row has this id
    async fn update(&self, id: i64, input: &MarcaInput) -> Result<Option<Marca>>;
    /// Returns `false` when no row has this id
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn stats(&self) -> Result<RecordStats>;
}

pub struct PgMarcaRepository {
    pool: PgPool,
}

impl PgMarcaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarcaRepository for PgMarcaRepository {
    async fn find_all(&self) -> Result<Vec<Marca>> {
        sqlx::query_as::<_, Marca>(
            r#"
            SELECT id, nombre, descripcion, activo, created_at, updated_at
            FROM marcas
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list marcas: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Marca>> {
        sqlx::query_as::<_, Marca>(
            r#"
            SELECT id, nombre, descripcion, activo, created_at, updated_at
            FROM marcas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get marca {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, input: &MarcaInput) -> Result<Marca> {
        sqlx::query_as::<_, Marca>(
            r#"
            INSERT INTO marcas (nombre, descripcion, activo)
            VALUES ($1, $2, $3)
            RETURNING id, nombre, descripcion, activo, created_at, updated_at
            "#,
        )
        .bind(&input.nombre)
        .bind(&input.descripcion)
        .bind(input.activo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create marca: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: i64, input: &MarcaInput) -> Result<Option<Marca>> {
        sqlx::query_as::<_, Marca>(
            r#"
            UPDATE marcas
            SET nombre = $1,
                descripcion = $2,
                activo = $3,
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, nombre, descripcion, activo, created_at, updated_at
            "#,
        )
        .bind(&input.nombre)
        .bind(&input.descripcion)
        .bind(input.activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update marca {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM marcas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete marca {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn stats(&self) -> Result<RecordStats> {
        let (total, active): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COUNT(*) FILTER (WHERE activo) FROM marcas")
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(RecordStats { total, active })
    }
}
