// teacher.rs
use serde::{Deserialize, Serialize};

use crate::common::require_non_blank;
use crate::{DomainError, Gender};

/// Docente acompañante del grupo de una escuela. Recibe sólo certificado de
/// servicio, no de participación.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccompanyingTeacher {
    pub school_id: i64,
    pub name: String,
    pub gender: Gender,
    pub requires_accommodation: bool,
}

impl AccompanyingTeacher {
    pub fn new(school_id: i64, name: impl Into<String>, gender: Gender, requires_accommodation: bool) -> Result<Self, DomainError> {
        let record = Self { school_id,
                            name: name.into(),
                            gender,
                            requires_accommodation };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.school_id <= 0 {
            return Err(DomainError::ValidationError(format!("invalid school id: {}", self.school_id)));
        }
        require_non_blank(&self.name, "accompanying teacher name")
    }
}
