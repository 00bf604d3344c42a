use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::FieldValue;
use crate::hashing::hash_value;
use crate::schema::{FieldSpec, FieldType, StepSchema, WizardSchema};

fn default_for(spec: &FieldSpec) -> FieldValue {
    match spec.field_type {
        FieldType::Checkbox if spec.is_group() => FieldValue::Many(Vec::new()),
        FieldType::Checkbox => FieldValue::Bool(false),
        _ => FieldValue::Text(String::new()),
    }
}

/// Valores acumulados y errores por campo, de una sesión de wizard.
///
/// Ambos mapas preservan orden de inserción: los valores en orden de
/// declaración del esquema, y los grupos de checkboxes el orden de primera
/// inserción de sus miembros. Los errores existen sólo mientras el campo es
/// inválido.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: IndexMap<String, FieldValue>,
    errors: IndexMap<String, String>,
}

impl FormState {
    /// Estado inicial: un slot por campo declarado, con su valor por defecto.
    pub fn new_for(schema: &WizardSchema) -> Self {
        let mut values = IndexMap::new();
        for step in &schema.steps {
            for field in &step.fields {
                values.insert(field.id.clone(), default_for(field));
            }
        }
        Self { values,
               errors: IndexMap::new() }
    }

    /// Vuelve a los valores por defecto (tras un envío terminal exitoso).
    pub fn reset(&mut self, schema: &WizardSchema) {
        *self = Self::new_for(schema);
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    pub fn text(&self, id: &str) -> &str {
        self.values.get(id).and_then(|v| v.as_text()).unwrap_or("")
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(|s| s.as_str())
    }

    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    pub(crate) fn put(&mut self, id: &str, value: FieldValue) {
        self.values.insert(id.to_string(), value);
    }

    /// Alterna la membresía de `member` en un grupo de checkboxes. Quitar y
    /// volver a insertar deja a los miembros restantes en su orden original.
    pub(crate) fn toggle_member(&mut self, id: &str, member: &str) {
        let items = match self.values.get_mut(id) {
            Some(FieldValue::Many(items)) => items,
            _ => {
                self.values.insert(id.to_string(), FieldValue::Many(vec![member.to_string()]));
                return;
            }
        };
        if let Some(pos) = items.iter().position(|m| m == member) {
            items.remove(pos);
        } else {
            items.push(member.to_string());
        }
    }

    pub(crate) fn set_error(&mut self, id: &str, message: impl Into<String>) {
        self.errors.insert(id.to_string(), message.into());
    }

    pub(crate) fn clear_error(&mut self, id: &str) {
        self.errors.shift_remove(id);
    }

    /// Reemplaza los errores de los campos de un paso por los de la última
    /// validación, sin tocar errores de otros pasos.
    pub(crate) fn replace_step_errors(&mut self, step: &StepSchema, fresh: &IndexMap<String, String>) {
        for field in &step.fields {
            self.errors.shift_remove(&field.id);
        }
        for (id, message) in fresh {
            self.errors.insert(id.clone(), message.clone());
        }
    }

    /// Snapshot JSON de los valores (sin errores), en orden de declaración.
    pub fn snapshot_json(&self) -> Value {
        let mut map = Map::new();
        for (id, value) in &self.values {
            map.insert(id.clone(), value.to_json());
        }
        Value::Object(map)
    }

    /// Fingerprint canónico de los valores actuales. Dos estados con los
    /// mismos valores producen el mismo fingerprint, lo que hace verificable
    /// el reintento idempotente tras un envío fallido.
    pub fn fingerprint(&self) -> String {
        hash_value(&self.snapshot_json())
    }
}
