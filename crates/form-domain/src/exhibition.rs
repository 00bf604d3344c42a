//! Solicitud de sede para la exhibición itinerante.
//!
//! Refleja el cuestionario logístico completo: sala de exhibición, sala de
//! conferencias, logística/alojamiento del equipo, datos para el afiche,
//! programa de formación docente y programa de quiz.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{is_valid_email, is_valid_mobile, require_non_blank};
use crate::reference::reference_code;
use crate::DomainError;

/// Sala principal donde se montan los exhibits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HallDetails {
    pub hall_dimension: String,
    pub is_enclosed_hall: String,
    pub can_be_darkened: String,
    pub has_cooling: Option<String>,
    pub is_ground_floor: String,
    pub has_storage_space: Option<String>,
    pub power_outlets: u32,
    pub num_tables: Option<u32>,
    pub vr_space: String,
    pub has_wifi: Option<String>,
}

/// Sala para conferencias, quiz y competencias.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureHallDetails {
    pub lecture_hall_area: String,
    pub seating_capacity: u32,
    pub has_av_facilities: Option<String>,
    pub distance_from_exhibition: Option<String>,
}

/// Logística y alojamiento del equipo visitante.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsDetails {
    pub accommodation_provided: String,
    pub local_transportation: String,
    pub secure_parking_space: String,
    pub manpower_for_loading: String,
}

/// Contacto que figura en el afiche del evento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterContact {
    pub contact_person_name: String,
    pub contact_person_mobile: String,
    pub contact_person_email: String,
    pub venue_location: String,
}

/// Programa de formación para docentes (cupos 25 a 50).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTraining {
    pub teacher_invitation: u32,
    pub teacher_registration: u32,
    pub provides_writing_materials: Option<String>,
    pub provides_refreshments: Option<String>,
}

/// Programa de quiz para estudiantes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgramme {
    pub quiz_for_school_students: String,
    pub quiz_team_selection: String,
    pub quiz_arrangements: String,
    pub quiz_refreshments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionRequest {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub hall: HallDetails,
    pub lecture_hall: LectureHallDetails,
    pub logistics: LogisticsDetails,
    pub poster: PosterContact,
    pub teacher_training: TeacherTraining,
    pub quiz: QuizProgramme,
}

impl ExhibitionRequest {
    pub fn new(hall: HallDetails,
               lecture_hall: LectureHallDetails,
               logistics: LogisticsDetails,
               poster: PosterContact,
               teacher_training: TeacherTraining,
               quiz: QuizProgramme)
               -> Result<Self, DomainError> {
        let request = Self { id: Uuid::new_v4(),
                             hall,
                             lecture_hall,
                             logistics,
                             poster,
                             teacher_training,
                             quiz };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank(&self.hall.hall_dimension, "hall dimension")?;
        if self.hall.power_outlets == 0 {
            return Err(DomainError::ValidationError("power outlets must be positive".to_string()));
        }
        if self.lecture_hall.seating_capacity == 0 {
            return Err(DomainError::ValidationError("seating capacity must be positive".to_string()));
        }
        // Cupos del programa docente según la invitación: mínimo 25, máximo 50
        for (what, count) in [("teacher invitation", self.teacher_training.teacher_invitation),
                              ("teacher registration", self.teacher_training.teacher_registration)]
        {
            if !(25..=50).contains(&count) {
                return Err(DomainError::ValidationError(format!("{} must be between 25 and 50, got {}", what, count)));
            }
        }
        require_non_blank(&self.poster.contact_person_name, "contact person name")?;
        require_non_blank(&self.poster.venue_location, "venue location")?;
        if !is_valid_mobile(&self.poster.contact_person_mobile) {
            return Err(DomainError::ValidationError(format!("invalid contact mobile: '{}'", self.poster.contact_person_mobile)));
        }
        if !is_valid_email(&self.poster.contact_person_email) {
            return Err(DomainError::ValidationError(format!("invalid contact email: '{}'", self.poster.contact_person_email)));
        }
        Ok(())
    }

    pub fn reference_code(&self) -> String {
        reference_code(&[&self.poster.venue_location, &self.poster.contact_person_email])
    }
}
