use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{FieldSpec, FieldType};
use crate::errors::EngineError;
use crate::hashing::hash_value;

/// Una página del formulario, con su propio conjunto de campos y alcance de
/// validación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepSchema {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl StepSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self { title: title.into(),
               fields }
    }

    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Definición inmutable del wizard.
///
/// `schema_hash` identifica la definición: se calcula sobre el JSON canónico
/// de nombre, títulos e identidad de campos (id, tipo, required). Cambiar la
/// estructura cambia el hash; cambiar un `helper_text` no.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSchema {
    pub name: String,
    pub steps: Vec<StepSchema>,
    pub schema_hash: String,
}

impl WizardSchema {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&StepSchema> {
        self.steps.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Busca un campo por id, empezando por `preferred_step` (los ids son
    /// únicos por paso, no globalmente).
    pub fn find_field(&self, id: &str, preferred_step: usize) -> Option<&FieldSpec> {
        if let Some(step) = self.steps.get(preferred_step) {
            if let Some(f) = step.field(id) {
                return Some(f);
            }
        }
        self.steps.iter().find_map(|s| s.field(id))
    }
}

/// Construye un `WizardSchema` validando las invariantes declarativas.
pub fn build_wizard_schema(name: impl Into<String>, steps: Vec<StepSchema>) -> Result<WizardSchema, EngineError> {
    let name = name.into();
    if steps.is_empty() {
        return Err(EngineError::InvalidSchema(format!("wizard '{}' has no steps", name)));
    }
    for (idx, step) in steps.iter().enumerate() {
        let mut seen: HashSet<&str> = HashSet::new();
        for field in &step.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(EngineError::InvalidSchema(format!("duplicate field id '{}' in step {}", field.id, idx)));
            }
            match field.field_type {
                FieldType::Select if field.options.is_empty() => {
                    return Err(EngineError::InvalidSchema(format!("select field '{}' has no options", field.id)));
                }
                FieldType::Select | FieldType::Checkbox => {}
                _ if !field.options.is_empty() => {
                    return Err(EngineError::InvalidSchema(format!("field '{}' of type {:?} cannot carry options", field.id, field.field_type)));
                }
                _ => {}
            }
        }
    }

    let identity = json!({
        "name": name,
        "steps": steps.iter().map(|s| json!({
            "title": s.title,
            "fields": s.fields.iter().map(|f| json!({
                "id": f.id,
                "type": format!("{:?}", f.field_type),
                "required": f.required,
            })).collect::<Vec<_>>(),
        })).collect::<Vec<_>>(),
    });
    let schema_hash = hash_value(&identity);

    Ok(WizardSchema { name, steps, schema_hash })
}
