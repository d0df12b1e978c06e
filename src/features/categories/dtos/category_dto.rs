use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryInput};
use crate::shared::validation::{clean_text, lenient_bool, nullable};

const NAME_REQUIRED: &str = "El campo nombre es obligatorio.";

/// Request DTO for creating or updating a category
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CategoryRequestDto {
    /// Category name (required, max 255 characters)
    #[validate(
        required(message = "El campo nombre es obligatorio."),
        length(
            max = 255,
            message = "El campo nombre no debe ser mayor que 255 caracteres."
        )
    )]
    pub name: Option<String>,

    /// Optional free-text description. Omit to keep the stored value on update,
    /// send `null` to clear it.
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    /// Active flag. Defaults to true on create, unchanged on update when omitted.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub active: Option<bool>,
}

impl CategoryRequestDto {
    /// Trim text fields, validate, and produce persistence input
    pub fn into_input(self) -> Result<CategoryInput> {
        let dto = Self {
            name: clean_text(self.name),
            description: self.description.map(clean_text),
            active: self.active,
        };
        dto.validate()?;

        let name = dto
            .name
            .ok_or_else(|| AppError::invalid_field("name", NAME_REQUIRED))?;

        Ok(CategoryInput {
            name,
            description: dto.description,
            active: dto.active,
        })
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            active: c.active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
