pub mod category_handler;
pub mod export_handler;
pub mod page_handler;

pub use category_handler::*;
pub use export_handler::*;
pub use page_handler::*;
