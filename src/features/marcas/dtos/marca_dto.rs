use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::marcas::models::{Marca, MarcaInput};
use crate::shared::types::FieldErrors;
use crate::shared::validation::{clean_text, field_errors, parse_form_bool};

const ACTIVO_INVALID: &str = "El campo activo debe ser verdadero o falso.";

/// Submitted marca form (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MarcaFormDto {
    #[validate(
        required(message = "El campo nombre es obligatorio."),
        length(
            max = 255,
            message = "El campo nombre no debe ser mayor que 255 caracteres."
        )
    )]
    pub nombre: Option<String>,

    pub descripcion: Option<String>,

    /// Checkbox values; empty when unchecked. A hidden `activo=0` input placed
    /// before the checkbox is overridden by the checked value that follows it.
    #[serde(default)]
    pub activo: Vec<String>,

    /// HTML method override (`PUT`, `PATCH` or `DELETE`)
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

impl MarcaFormDto {
    /// Validate and produce persistence input, or the errors to show next to each field
    pub fn into_input(&self) -> Result<MarcaInput, FieldErrors> {
        let cleaned = Self {
            nombre: clean_text(self.nombre.clone()),
            descripcion: clean_text(self.descripcion.clone()),
            ..Default::default()
        };

        let mut errors = match cleaned.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };

        let activo = parse_form_bool(self.checkbox());
        if activo.is_none() {
            errors
                .entry("activo".to_string())
                .or_default()
                .push(ACTIVO_INVALID.to_string());
        }

        match (cleaned.nombre, activo) {
            (Some(nombre), Some(activo)) if errors.is_empty() => Ok(MarcaInput {
                nombre,
                descripcion: cleaned.descripcion,
                activo,
            }),
            _ => Err(errors),
        }
    }

    /// Uppercased `_method` override, if any
    pub fn spoofed_method(&self) -> Option<String> {
        self.method
            .as_deref()
            .map(|m| m.trim().to_ascii_uppercase())
            .filter(|m| !m.is_empty())
    }

    /// Values echoed back into the form after a failed submission
    pub fn values(&self) -> MarcaFormValues {
        MarcaFormValues {
            nombre: self.nombre.clone().unwrap_or_default(),
            descripcion: self.descripcion.clone().unwrap_or_default(),
            activo: parse_form_bool(self.checkbox()).unwrap_or(false),
        }
    }

    /// Last submitted `activo` value
    fn checkbox(&self) -> Option<&str> {
        self.activo.last().map(String::as_str)
    }
}

/// Field values rendered into `marcas/form.html`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarcaFormValues {
    pub nombre: String,
    pub descripcion: String,
    pub activo: bool,
}

impl Default for MarcaFormValues {
    /// New marcas start out active
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            activo: true,
        }
    }
}

impl From<Marca> for MarcaFormValues {
    fn from(m: Marca) -> Self {
        Self {
            nombre: m.nombre,
            descripcion: m.descripcion.unwrap_or_default(),
            activo: m.activo,
        }
    }
}
