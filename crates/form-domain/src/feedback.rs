//! Feedback y calificaciones post-visita.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{is_valid_email, is_valid_mobile, require_non_blank};
use crate::DomainError;

/// Datos de la visita reportados por la institución.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitFeedback {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub institution_name: String,
    pub website: Option<String>,
    pub visit_date: NaiveDate,
    pub staff_name: String,
    pub staff_email: String,
    pub staff_mobile: String,
    pub total_students: u32,
    pub accompanying_staff: u32,
    pub sources: Vec<String>,
    pub comments: Option<String>,
}

impl VisitFeedback {
    #[allow(clippy::too_many_arguments)]
    pub fn new(institution_name: impl Into<String>,
               website: Option<String>,
               visit_date: NaiveDate,
               staff_name: impl Into<String>,
               staff_email: impl Into<String>,
               staff_mobile: impl Into<String>,
               total_students: u32,
               accompanying_staff: u32,
               sources: Vec<String>,
               comments: Option<String>)
               -> Result<Self, DomainError> {
        let record = Self { id: Uuid::new_v4(),
                            institution_name: institution_name.into(),
                            website,
                            visit_date,
                            staff_name: staff_name.into(),
                            staff_email: staff_email.into(),
                            staff_mobile: staff_mobile.into(),
                            total_students,
                            accompanying_staff,
                            sources,
                            comments };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank(&self.institution_name, "institution name")?;
        require_non_blank(&self.staff_name, "staff name")?;
        if !is_valid_email(&self.staff_email) {
            return Err(DomainError::ValidationError(format!("invalid staff email: '{}'", self.staff_email)));
        }
        if !is_valid_mobile(&self.staff_mobile) {
            return Err(DomainError::ValidationError(format!("invalid staff mobile: '{}'", self.staff_mobile)));
        }
        if self.total_students == 0 {
            return Err(DomainError::ValidationError("total students must be positive".to_string()));
        }
        Ok(())
    }
}

/// Calificaciones 1 a 5 de los distintos aspectos de la visita.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRatings {
    pub feedback_id: i64,
    pub ipr_rating: u8,
    pub fcipt_rating: u8,
    pub knowledge: u8,
    pub explanations_ipr: u8,
    pub explanations_fcipt: u8,
    pub knowledge_before: u8,
    pub knowledge_after: u8,
    pub technical_contents: u8,
    pub ease_of_understanding: u8,
}

impl VisitRatings {
    pub fn new(feedback_id: i64, scores: [u8; 9]) -> Result<Self, DomainError> {
        let [ipr_rating, fcipt_rating, knowledge, explanations_ipr, explanations_fcipt, knowledge_before, knowledge_after, technical_contents, ease_of_understanding] = scores;
        let record = Self { feedback_id,
                            ipr_rating,
                            fcipt_rating,
                            knowledge,
                            explanations_ipr,
                            explanations_fcipt,
                            knowledge_before,
                            knowledge_after,
                            technical_contents,
                            ease_of_understanding };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.feedback_id <= 0 {
            return Err(DomainError::ValidationError(format!("invalid feedback id: {}", self.feedback_id)));
        }
        for (what, score) in [("iprRating", self.ipr_rating),
                              ("fciptRating", self.fcipt_rating),
                              ("knowledge", self.knowledge),
                              ("explanationsIPR", self.explanations_ipr),
                              ("explanationsFCIPT", self.explanations_fcipt),
                              ("knowledgeBefore", self.knowledge_before),
                              ("knowledgeAfter", self.knowledge_after),
                              ("technicalContents", self.technical_contents),
                              ("easeOfUnderstanding", self.ease_of_understanding)]
        {
            if !(1..=5).contains(&score) {
                return Err(DomainError::ValidationError(format!("{} must be between 1 and 5, got {}", what, score)));
            }
        }
        Ok(())
    }
}
