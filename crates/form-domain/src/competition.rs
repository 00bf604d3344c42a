//! Competencias del día de la ciencia y sus inscripciones.
//!
//! Cada competencia tiene una etiqueta de cara al usuario, un nombre de
//! endpoint propio y cotas de participantes. La inscripción (`CompetitionEntry`)
//! valida esas cotas, la declaración obligatoria y el adjunto cuando la
//! competencia lo exige.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::require_non_blank;
use crate::reference::reference_code;
use crate::{ClassLevel, DomainError, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Competition {
    StudentModel1,
    StudentModel2,
    Quiz,
    EloquenceEnglish,
    EloquenceHindi,
    EloquenceGujarati,
    EssayEnglish,
    EssayHindi,
    EssayGujarati,
    Poster,
    Skit,
    TeacherModel,
}

impl Competition {
    pub const ALL: [Competition; 12] = [Competition::StudentModel1,
                                        Competition::StudentModel2,
                                        Competition::Quiz,
                                        Competition::EloquenceEnglish,
                                        Competition::EloquenceHindi,
                                        Competition::EloquenceGujarati,
                                        Competition::EssayEnglish,
                                        Competition::EssayHindi,
                                        Competition::EssayGujarati,
                                        Competition::Poster,
                                        Competition::Skit,
                                        Competition::TeacherModel];

    /// Etiqueta tal como aparece en el selector del formulario.
    pub fn label(&self) -> &'static str {
        match self {
            Competition::StudentModel1 => "Student's Model-1",
            Competition::StudentModel2 => "Student's Model-2",
            Competition::Quiz => "Quiz",
            Competition::EloquenceEnglish => "Eloquence - English",
            Competition::EloquenceHindi => "Eloquence - Hindi",
            Competition::EloquenceGujarati => "Eloquence - Gujarati",
            Competition::EssayEnglish => "Essay - English",
            Competition::EssayHindi => "Essay - Hindi",
            Competition::EssayGujarati => "Essay - Gujarati",
            Competition::Poster => "Poster",
            Competition::Skit => "Skit",
            Competition::TeacherModel => "Teacher Model",
        }
    }

    /// Nombre del endpoint de creación de inscripciones.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Competition::StudentModel1 => "student-model-1",
            Competition::StudentModel2 => "student-model-2",
            Competition::Quiz => "quiz",
            Competition::EloquenceEnglish => "eloquence/english",
            Competition::EloquenceHindi => "eloquence/hindi",
            Competition::EloquenceGujarati => "eloquence/gujarati",
            Competition::EssayEnglish => "essay/english",
            Competition::EssayHindi => "essay/hindi",
            Competition::EssayGujarati => "essay/gujarati",
            Competition::Poster => "poster",
            Competition::Skit => "skit",
            Competition::TeacherModel => "teacher-model",
        }
    }

    pub fn parse(label: &str) -> Result<Self, DomainError> {
        Competition::ALL
            .iter()
            .find(|c| c.label() == label.trim())
            .copied()
            .ok_or_else(|| DomainError::ValidationError(format!("unknown competition: '{}'", label)))
    }

    /// Cotas (mínimo, máximo) de participantes por inscripción.
    pub fn participant_bounds(&self) -> (usize, usize) {
        match self {
            Competition::StudentModel1 | Competition::StudentModel2 => (2, 2),
            Competition::Quiz | Competition::Poster => (1, 2),
            Competition::Skit => (1, 6),
            Competition::TeacherModel => (1, 1),
            Competition::EloquenceEnglish
            | Competition::EloquenceHindi
            | Competition::EloquenceGujarati
            | Competition::EssayEnglish
            | Competition::EssayHindi
            | Competition::EssayGujarati => (1, 1),
        }
    }

    /// Competencias que exigen un adjunto (writeup, ensayo o enlace al video).
    pub fn requires_attachment(&self) -> bool {
        matches!(self,
                 Competition::StudentModel1
                 | Competition::StudentModel2
                 | Competition::EssayEnglish
                 | Competition::EssayHindi
                 | Competition::EssayGujarati
                 | Competition::Skit
                 | Competition::TeacherModel)
    }
}

/// Un participante inscripto en una competencia.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    pub gender: Gender,
    /// `None` sólo para el modelo de docentes (no lleva curso).
    pub class_level: Option<ClassLevel>,
    pub requires_accommodation: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, gender: Gender, class_level: Option<ClassLevel>, requires_accommodation: bool) -> Result<Self, DomainError> {
        let p = Self { name: name.into(),
                       gender,
                       class_level,
                       requires_accommodation };
        require_non_blank(&p.name, "participant name")?;
        Ok(p)
    }
}

/// Inscripción de una escuela en una competencia.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionEntry {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub school_id: i64,
    pub competition: Competition,
    pub participants: Vec<Participant>,
    pub declaration_accepted: bool,
    pub attachment_url: Option<String>,
    pub additional_requirements: Option<String>,
}

impl CompetitionEntry {
    pub fn new(school_id: i64,
               competition: Competition,
               participants: Vec<Participant>,
               declaration_accepted: bool,
               attachment_url: Option<String>,
               additional_requirements: Option<String>)
               -> Result<Self, DomainError> {
        let entry = Self { id: Uuid::new_v4(),
                           school_id,
                           competition,
                           participants,
                           declaration_accepted,
                           attachment_url,
                           additional_requirements };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.school_id <= 0 {
            return Err(DomainError::ValidationError(format!("invalid school id: {}", self.school_id)));
        }
        let (min, max) = self.competition.participant_bounds();
        let count = self.participants.len();
        if count < min || count > max {
            return Err(DomainError::ValidationError(format!("{} takes {}..={} participants, got {}",
                                                            self.competition.label(),
                                                            min,
                                                            max,
                                                            count)));
        }
        if !self.declaration_accepted {
            return Err(DomainError::ValidationError(format!("declaration must be accepted for {}", self.competition.label())));
        }
        if self.competition.requires_attachment() {
            let present = self.attachment_url.as_deref().map(|u| !u.trim().is_empty()).unwrap_or(false);
            if !present {
                return Err(DomainError::ValidationError(format!("{} requires an attachment", self.competition.label())));
            }
        }
        Ok(())
    }

    pub fn reference_code(&self) -> String {
        let first = self.participants.first().map(|p| p.name.as_str()).unwrap_or("");
        reference_code(&[self.competition.label(), &self.school_id.to_string(), first])
    }
}
