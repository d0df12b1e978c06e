//! Modules layer - Infrastructure components
//!
//! Document writers used by the export endpoints.

pub mod export;
