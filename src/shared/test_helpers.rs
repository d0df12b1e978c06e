use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryInput};
use crate::features::categories::{self, CategoryExportService, CategoryRepository, CategoryService};
use crate::features::dashboard::{self, DashboardService};
use crate::features::marcas::models::{Marca, MarcaInput};
use crate::features::marcas::{self, MarcaRepository, MarcaService};
use crate::shared::types::RecordStats;

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Category repository backed by a vector, for handler tests without Postgres
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    table: Mutex<Table<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, input: &CategoryInput) -> Result<Category> {
        let mut table = self.table.lock().unwrap();
        let now = Utc::now();
        let category = Category {
            id: table.next_id,
            name: input.name.clone(),
            description: input.description_value().map(str::to_string),
            active: input.active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.rows.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, input: &CategoryInput) -> Result<Option<Category>> {
        let mut table = self.table.lock().unwrap();
        let Some(category) = table.rows.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = input.name.clone();
        if let Some(description) = &input.description {
            category.description = description.clone();
        }
        if let Some(active) = input.active {
            category.active = active;
        }
        category.updated_at = Utc::now();
        Ok(Some(category.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|c| c.id != id);
        Ok(table.rows.len() < before)
    }

    async fn stats(&self) -> Result<RecordStats> {
        let table = self.table.lock().unwrap();
        Ok(RecordStats {
            total: table.rows.len() as i64,
            active: table.rows.iter().filter(|c| c.active).count() as i64,
        })
    }
}

/// Marca repository backed by a vector
#[derive(Default)]
pub struct InMemoryMarcaRepository {
    table: Mutex<Table<Marca>>,
}

impl InMemoryMarcaRepository {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn get(&self, id: i64) -> Option<Marca> {
        let table = self.table.lock().unwrap();
        table.rows.iter().find(|m| m.id == id).cloned()
    }
}

#[async_trait]
impl MarcaRepository for InMemoryMarcaRepository {
    async fn find_all(&self) -> Result<Vec<Marca>> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Marca>> {
        Ok(self.get(id))
    }

    async fn create(&self, input: &MarcaInput) -> Result<Marca> {
        let mut table = self.table.lock().unwrap();
        let now = Utc::now();
        let marca = Marca {
            id: table.next_id,
            nombre: input.nombre.clone(),
            descripcion: input.descripcion.clone(),
            activo: input.activo,
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.rows.push(marca.clone());
        Ok(marca)
    }

    async fn update(&self, id: i64, input: &MarcaInput) -> Result<Option<Marca>> {
        let mut table = self.table.lock().unwrap();
        let Some(marca) = table.rows.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };
        marca.nombre = input.nombre.clone();
        marca.descripcion = input.descripcion.clone();
        marca.activo = input.activo;
        marca.updated_at = Utc::now();
        Ok(Some(marca.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|m| m.id != id);
        Ok(table.rows.len() < before)
    }

    async fn stats(&self) -> Result<RecordStats> {
        let table = self.table.lock().unwrap();
        Ok(RecordStats {
            total: table.rows.len() as i64,
            active: table.rows.iter().filter(|m| m.activo).count() as i64,
        })
    }
}

/// Category API, page and export routes over an in-memory repository
pub fn category_router(repository: Arc<InMemoryCategoryRepository>) -> Router {
    let service = Arc::new(CategoryService::new(repository.clone()));
    let export_service = Arc::new(CategoryExportService::new(repository, "Test".to_string()));
    categories::routes(service, export_service)
}

/// Marca pages over an in-memory repository
pub fn marca_router(repository: Arc<InMemoryMarcaRepository>) -> Router {
    marcas::routes(Arc::new(MarcaService::new(repository)))
}

/// Dashboard pages over in-memory repositories
pub fn dashboard_router(
    categories: Arc<InMemoryCategoryRepository>,
    marcas: Arc<InMemoryMarcaRepository>,
) -> Router {
    dashboard::routes(Arc::new(DashboardService::new(categories, marcas)))
}
