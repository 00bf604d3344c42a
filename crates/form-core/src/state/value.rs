use serde_json::Value;

/// Valor actual de un campo.
///
/// Los campos numéricos, de fecha y de archivo conservan el texto crudo
/// (`Text`): el parseo ocurre en validación/codificación, así el usuario puede
/// seguir tecleando un valor inválido sin que el motor lo rechace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Many(Vec<String>),
}

const NO_MEMBERS: &[String] = &[];

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Vacío según el tipo: texto en blanco, booleano falso, lista sin
    /// miembros.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Bool(b) => !*b,
            FieldValue::Many(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    pub fn as_many(&self) -> &[String] {
        match self {
            FieldValue::Many(items) => items.as_slice(),
            _ => NO_MEMBERS,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Many(items) => Value::Array(items.iter().map(|s| Value::String(s.clone())).collect()),
        }
    }
}
