use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for marca
#[derive(Debug, Clone, FromRow)]
pub struct Marca {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated form values. Every field is written on insert and on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarcaInput {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub activo: bool,
}
