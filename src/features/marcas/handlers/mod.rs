pub mod marca_handler;

pub use marca_handler::*;
