//! Category management.
//!
//! JSON API consumed by the browser client, plus PDF and Excel exports.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | HTML listing page |
//! | GET | `/categories-data` | List categories |
//! | POST | `/categories-data` | Create category |
//! | GET | `/categories-data/{id}` | Get category |
//! | PUT | `/categories-data/{id}` | Update category |
//! | DELETE | `/categories-data/{id}` | Delete category |
//! | GET | `/categories/export/pdf` | Download PDF report |
//! | GET | `/categories/export/excel` | Download Excel report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use repositories::{CategoryRepository, DynCategoryRepository, PgCategoryRepository};
pub use services::{CategoryExportService, CategoryService};
