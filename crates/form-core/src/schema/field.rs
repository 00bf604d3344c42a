use serde::{Deserialize, Serialize};

/// Tipos de campo soportados por el motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Number,
    Email,
    Tel,
    Date,
    Time,
    Select,
    Checkbox,
    File,
}

/// Opción de un campo `Select` o de un grupo de checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(),
               label: label.into() }
    }
}

/// Descripción declarativa de un input.
///
/// Invariantes (verificadas por `build_wizard_schema`):
/// - `id` único dentro de su paso.
/// - `options` obligatorio para `Select`, permitido para `Checkbox` (grupo de
///   membresía) y prohibido para el resto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

impl FieldSpec {
    fn base(id: impl Into<String>, label: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self { id: id.into(),
               label: label.into(),
               field_type,
               required,
               options: Vec::new(),
               helper_text: None }
    }

    pub fn text(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Text, required)
    }

    pub fn number(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Number, required)
    }

    pub fn email(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Email, required)
    }

    pub fn tel(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Tel, required)
    }

    pub fn date(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Date, required)
    }

    pub fn time(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Time, required)
    }

    pub fn file(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::File, required)
    }

    /// Select de valor único: el valor actual se reemplaza en cada cambio.
    pub fn select(id: impl Into<String>, label: impl Into<String>, required: bool, options: Vec<SelectOption>) -> Self {
        let mut f = Self::base(id, label, FieldType::Select, required);
        f.options = options;
        f
    }

    /// Checkbox individual (valor booleano).
    pub fn checkbox(id: impl Into<String>, label: impl Into<String>, required: bool) -> Self {
        Self::base(id, label, FieldType::Checkbox, required)
    }

    /// Grupo de checkboxes: el valor es una lista de membresía sobre
    /// `options`, con orden de primera inserción.
    pub fn checkbox_group(id: impl Into<String>, label: impl Into<String>, required: bool, options: Vec<SelectOption>) -> Self {
        let mut f = Self::base(id, label, FieldType::Checkbox, required);
        f.options = options;
        f
    }

    pub fn with_helper(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Un checkbox con opciones se comporta como grupo de membresía.
    pub fn is_group(&self) -> bool {
        matches!(self.field_type, FieldType::Checkbox) && !self.options.is_empty()
    }
}
