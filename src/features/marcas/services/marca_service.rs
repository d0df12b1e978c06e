use crate::core::error::{AppError, Result};
use crate::features::marcas::models::{Marca, MarcaInput};
use crate::features::marcas::repositories::DynMarcaRepository;

/// Service for marca operations
pub struct MarcaService {
    repository: DynMarcaRepository,
}

impl MarcaService {
    pub fn new(repository: DynMarcaRepository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Marca>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Marca> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, input: MarcaInput) -> Result<Marca> {
        let marca = self.repository.create(&input).await?;
        tracing::info!("Marca created: id={}, nombre={:?}", marca.id, marca.nombre);
        Ok(marca)
    }

    pub async fn update(&self, id: i64, input: MarcaInput) -> Result<Marca> {
        let marca = self
            .repository
            .update(id, &input)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Marca updated: id={}", marca.id);
        Ok(marca)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Marca deleted: id={}", id);
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Marca with id {} not found", id))
}
