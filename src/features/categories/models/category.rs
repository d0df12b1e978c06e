use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::modules::export::ReportRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated values for an insert or update.
///
/// `active: None` means "use the column default" on insert and
/// "keep the stored value" on update. `description: None` likewise keeps the
/// stored text on update (NULL on insert); `Some(None)` clears it.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<Option<String>>,
    pub active: Option<bool>,
}

impl CategoryInput {
    /// Description to write, NULL when cleared or not provided
    pub fn description_value(&self) -> Option<&str> {
        self.description.as_ref().and_then(|d| d.as_deref())
    }
}

impl From<Category> for ReportRow {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            active: c.active,
            created_at: c.created_at,
        }
    }
}
