//! Server-rendered HTML pages.
//!
//! Page templates live in `templates/` and are embedded into the binary, so
//! rendering does not depend on the working directory.

pub mod engine;

pub use engine::{render_page, set_app_name, TemplateError};
