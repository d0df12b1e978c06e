pub mod marca_repository;

pub use marca_repository::{DynMarcaRepository, MarcaRepository, PgMarcaRepository};
