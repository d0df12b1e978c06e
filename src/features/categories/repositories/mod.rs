pub mod category_repository;

pub use category_repository::{CategoryRepository, DynCategoryRepository, PgCategoryRepository};
