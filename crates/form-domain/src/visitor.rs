//! Grupo de visita científica institucional.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{is_valid_email, is_valid_mobile, require_non_blank};
use crate::reference::reference_code;
use crate::DomainError;

/// Campus visitables del instituto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Campus {
    #[serde(rename = "IPR")]
    Ipr,
    #[serde(rename = "FCIPT")]
    Fcipt,
}

impl Campus {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim() {
            "IPR" => Ok(Campus::Ipr),
            "FCIPT" => Ok(Campus::Fcipt),
            other => Err(DomainError::ValidationError(format!("unknown campus: '{}'", other))),
        }
    }
}

/// Franja horaria preferida por campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw.trim() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            other => Err(DomainError::ValidationError(format!("unknown time slot: '{}'", other))),
        }
    }
}

/// Persona de contacto del grupo visitante.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorContact {
    pub name: String,
    pub position: String,
    pub email: String,
    pub mobile: String,
}

impl VisitorContact {
    pub fn new(name: impl Into<String>, position: impl Into<String>, email: impl Into<String>, mobile: impl Into<String>) -> Result<Self, DomainError> {
        let contact = Self { name: name.into(),
                             position: position.into(),
                             email: email.into(),
                             mobile: mobile.into() };
        require_non_blank(&contact.name, "contact name")?;
        require_non_blank(&contact.position, "contact position")?;
        if !is_valid_email(&contact.email) {
            return Err(DomainError::ValidationError(format!("invalid contact email: '{}'", contact.email)));
        }
        if !is_valid_mobile(&contact.mobile) {
            return Err(DomainError::ValidationError(format!("invalid contact mobile: '{}'", contact.mobile)));
        }
        Ok(contact)
    }
}

/// Solicitud de visita de un grupo estudiantil.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorGroup {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub institution_name: String,
    pub student_branch: String,
    pub student_sem: u32,
    pub num_students: u32,
    pub num_faculty: u32,
    pub contact: VisitorContact,
    pub campuses: Vec<Campus>,
    pub ipr_slot: Option<TimeSlot>,
    pub fcipt_slot: Option<TimeSlot>,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub materials: Vec<String>,
}

impl VisitorGroup {
    #[allow(clippy::too_many_arguments)]
    pub fn new(institution_name: impl Into<String>,
               student_branch: impl Into<String>,
               student_sem: u32,
               num_students: u32,
               num_faculty: u32,
               contact: VisitorContact,
               campuses: Vec<Campus>,
               ipr_slot: Option<TimeSlot>,
               fcipt_slot: Option<TimeSlot>,
               visit_date: NaiveDate,
               visit_time: NaiveTime,
               materials: Vec<String>)
               -> Result<Self, DomainError> {
        let group = Self { id: Uuid::new_v4(),
                           institution_name: institution_name.into(),
                           student_branch: student_branch.into(),
                           student_sem,
                           num_students,
                           num_faculty,
                           contact,
                           campuses,
                           ipr_slot,
                           fcipt_slot,
                           visit_date,
                           visit_time,
                           materials };
        group.validate()?;
        Ok(group)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank(&self.institution_name, "institution name")?;
        require_non_blank(&self.student_branch, "student branch")?;
        if self.student_sem == 0 {
            return Err(DomainError::ValidationError("student semester must be positive".to_string()));
        }
        if self.num_students == 0 {
            return Err(DomainError::ValidationError("number of students must be positive".to_string()));
        }
        if self.num_faculty == 0 {
            return Err(DomainError::ValidationError("number of faculty must be positive".to_string()));
        }
        if self.campuses.is_empty() {
            return Err(DomainError::ValidationError("at least one campus must be selected".to_string()));
        }
        Ok(())
    }

    pub fn reference_code(&self) -> String {
        reference_code(&[&self.institution_name, &self.visit_date.to_string(), &self.contact.email])
    }
}
