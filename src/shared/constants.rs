/// Cookie carrying the one-shot flash message key between a redirect and the next page
pub const FLASH_COOKIE: &str = "flash";

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

pub const CONTENT_TYPE_PDF: &str = "application/pdf";

pub const CONTENT_TYPE_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Prefix of exported file names, followed by a `%Y-%m-%d_%H%M%S` timestamp
pub const EXPORT_FILE_PREFIX: &str = "categorias_";
