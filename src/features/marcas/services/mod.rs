pub mod marca_service;

pub use marca_service::MarcaService;
