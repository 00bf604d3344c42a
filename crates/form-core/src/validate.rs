//! Validación con alcance de paso.
//!
//! Sólo se revisan los campos del paso actual aunque el estado de pasos
//! anteriores siga residente. Dos reglas:
//! - requerido y en blanco -> `"<label> is required"`
//! - tipo `Number` con valor presente que no parsea a número positivo ->
//!   `"<label> must be a valid number"`
//!
//! Un campo numérico opcional en blanco pasa: de lo contrario `required:
//! false` no significaría nada para ese tipo.

use indexmap::IndexMap;

use crate::schema::{FieldType, StepSchema};
use crate::state::{FieldValue, FormState};

/// Resultado de validar un paso: mapa campo -> mensaje, vacío si es válido.
#[derive(Debug, Clone, Default)]
pub struct StepValidation {
    pub errors: IndexMap<String, String>,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn invalid_fields(&self) -> Vec<String> {
        self.errors.keys().cloned().collect()
    }
}

/// `true` si el texto parsea como número estrictamente positivo.
pub fn parses_as_positive_number(raw: &str) -> bool {
    raw.trim().parse::<f64>().map(|n| n.is_finite() && n > 0.0).unwrap_or(false)
}

pub fn validate_step(step: &StepSchema, state: &FormState) -> StepValidation {
    let mut errors = IndexMap::new();
    for field in &step.fields {
        let value = state.value(&field.id);
        let blank = value.map(FieldValue::is_blank).unwrap_or(true);
        if field.required && blank {
            errors.insert(field.id.clone(), format!("{} is required", field.label));
            continue;
        }
        if matches!(field.field_type, FieldType::Number) && !blank {
            let ok = value.and_then(|v| v.as_text()).map(parses_as_positive_number).unwrap_or(false);
            if !ok {
                errors.insert(field.id.clone(), format!("{} must be a valid number", field.label));
            }
        }
    }
    StepValidation { errors }
}
