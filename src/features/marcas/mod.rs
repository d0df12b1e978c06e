//! Marca (brand) management through server-rendered pages.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/marcas` | Index page with pending flash message |
//! | GET | `/marcas/create` | Empty form |
//! | POST | `/marcas` | Create, then redirect to the index |
//! | GET | `/marcas/{id}` | Redirect to the edit form |
//! | GET | `/marcas/{id}/edit` | Prefilled form |
//! | PUT/PATCH | `/marcas/{id}` | Update, then redirect to the index |
//! | DELETE | `/marcas/{id}` | Delete, then redirect to the index |
//! | POST | `/marcas/{id}` | Form submission carrying `_method` |

pub mod dtos;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{DynMarcaRepository, MarcaRepository, PgMarcaRepository};
pub use routes::routes;
pub use services::MarcaService;
