//! Decodificador payload JSON -> registros de dominio.
//!
//! Contraparte de los payload builders: materializa lo que un endpoint
//! recibió (o lo que el registro guardó) en tipos de dominio validados. La
//! validación semántica vive en los constructores de `form-domain`; aquí sólo
//! se extrae y parsea la forma del payload.

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use form_domain::exhibition::{HallDetails, LectureHallDetails, LogisticsDetails, PosterContact, QuizProgramme,
                              TeacherTraining};
use form_domain::{AccompanyingTeacher, Campus, ClassLevel, Competition, CompetitionEntry, DomainError, ExhibitionRequest,
                  Gender, Participant, SchoolRegistration, TimeSlot, VisitFeedback, VisitRatings, VisitorContact,
                  VisitorGroup};

fn text(payload: &Value, key: &str) -> String {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("").to_string()
}

fn optional_text(payload: &Value, key: &str) -> Option<String> {
    let raw = text(payload, key);
    if raw.trim().is_empty() { None } else { Some(raw) }
}

/// Entero desde número JSON o desde string numérico (los campos del
/// formulario conservan texto crudo).
fn integer(payload: &Value, key: &str) -> Result<i64, DomainError> {
    match payload.get(key) {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| DomainError::ValidationError(format!("{} is not an integer", key))),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| DomainError::ValidationError(format!("{} is not an integer: '{}'", key, s))),
        _ => Err(DomainError::ValidationError(format!("{} is missing", key))),
    }
}

fn unsigned(payload: &Value, key: &str) -> Result<u32, DomainError> {
    let n = integer(payload, key)?;
    u32::try_from(n).map_err(|_| DomainError::ValidationError(format!("{} must be non-negative, got {}", key, n)))
}

fn optional_unsigned(payload: &Value, key: &str) -> Result<Option<u32>, DomainError> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        _ => unsigned(payload, key).map(Some),
    }
}

fn boolean(payload: &Value, key: &str) -> bool {
    payload.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

fn text_list(payload: &Value, key: &str) -> Vec<String> {
    payload.get(key)
           .and_then(|v| v.as_array())
           .map(|items| items.iter().filter_map(|v| v.as_str().map(|s| s.to_string())).collect())
           .unwrap_or_default()
}

fn date(payload: &Value, key: &str) -> Result<NaiveDate, DomainError> {
    let raw = text(payload, key);
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| DomainError::ValidationError(format!("{} is not a date: '{}'", key, raw)))
}

fn time(payload: &Value, key: &str) -> Result<NaiveTime, DomainError> {
    let raw = text(payload, key);
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
                                           .map_err(|_| DomainError::ValidationError(format!("{} is not a time: '{}'", key, raw)))
}

/// Decodificador de payloads de la plataforma.
#[derive(Clone, Default)]
pub struct FormDecoder;

impl FormDecoder {
    pub fn decode_school(&self, payload: &Value) -> Result<SchoolRegistration, DomainError> {
        let record: SchoolRegistration =
            serde_json::from_value(payload.clone()).map_err(|e| DomainError::ExternalError(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    pub fn decode_teacher(&self, payload: &Value) -> Result<AccompanyingTeacher, DomainError> {
        let record: AccompanyingTeacher =
            serde_json::from_value(payload.clone()).map_err(|e| DomainError::ExternalError(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    pub fn decode_entry(&self, payload: &Value) -> Result<CompetitionEntry, DomainError> {
        let competition = Competition::parse(&text(payload, "competitionName"))?;
        let raw_participants = payload.get("participants")
                                      .and_then(|v| v.as_array())
                                      .ok_or_else(|| DomainError::ValidationError("participants is missing".to_string()))?;
        let mut participants = Vec::with_capacity(raw_participants.len());
        for raw in raw_participants {
            let gender = Gender::parse(&text(raw, "gender"))?;
            let class_level = match optional_text(raw, "classLevel") {
                Some(label) => Some(ClassLevel::parse(&label)?),
                None => None,
            };
            participants.push(Participant::new(text(raw, "name"), gender, class_level, boolean(raw, "requiresAccommodation"))?);
        }
        CompetitionEntry::new(integer(payload, "schoolId")?,
                              competition,
                              participants,
                              boolean(payload, "declarationAccepted"),
                              optional_text(payload, "attachmentUrl"),
                              optional_text(payload, "additionalRequirements"))
    }

    pub fn decode_visitor(&self, payload: &Value) -> Result<VisitorGroup, DomainError> {
        let contact = VisitorContact::new(text(payload, "name"),
                                          text(payload, "position"),
                                          text(payload, "email"),
                                          text(payload, "mobile"))?;
        let mut campuses = Vec::new();
        for raw in text_list(payload, "campus") {
            campuses.push(Campus::parse(&raw)?);
        }
        let ipr_slot = match optional_text(payload, "ipr_time") {
            Some(raw) => Some(TimeSlot::parse(&raw)?),
            None => None,
        };
        let fcipt_slot = match optional_text(payload, "fcipt_time") {
            Some(raw) => Some(TimeSlot::parse(&raw)?),
            None => None,
        };
        VisitorGroup::new(text(payload, "institutionName"),
                          text(payload, "studentBranch"),
                          unsigned(payload, "studentSem")?,
                          unsigned(payload, "numStudents")?,
                          unsigned(payload, "numFaculty")?,
                          contact,
                          campuses,
                          ipr_slot,
                          fcipt_slot,
                          date(payload, "visit_date")?,
                          time(payload, "visit_time")?,
                          text_list(payload, "materials"))
    }

    pub fn decode_exhibition(&self, payload: &Value) -> Result<ExhibitionRequest, DomainError> {
        let hall = HallDetails { hall_dimension: text(payload, "hallDimension"),
                                 is_enclosed_hall: text(payload, "isEnclosedHall"),
                                 can_be_darkened: text(payload, "canBeDarkened"),
                                 has_cooling: optional_text(payload, "hasCooling"),
                                 is_ground_floor: text(payload, "isGroundFloor"),
                                 has_storage_space: optional_text(payload, "hasStorageSpace"),
                                 power_outlets: unsigned(payload, "powerOutlets")?,
                                 num_tables: optional_unsigned(payload, "numTables")?,
                                 vr_space: text(payload, "vrSpace"),
                                 has_wifi: optional_text(payload, "hasWifi") };
        let lecture_hall = LectureHallDetails { lecture_hall_area: text(payload, "lectureHallArea"),
                                                seating_capacity: unsigned(payload, "seatingCapacity")?,
                                                has_av_facilities: optional_text(payload, "hasAVFacilities"),
                                                distance_from_exhibition: optional_text(payload, "distanceFromExhibition") };
        let logistics = LogisticsDetails { accommodation_provided: text(payload, "accommodationProvided"),
                                           local_transportation: text(payload, "localTransportation"),
                                           secure_parking_space: text(payload, "secureParkingSpace"),
                                           manpower_for_loading: text(payload, "manpowerForLoading") };
        let poster = PosterContact { contact_person_name: text(payload, "contactPersonName"),
                                     contact_person_mobile: text(payload, "contactPersonMobile"),
                                     contact_person_email: text(payload, "contactPersonEmail"),
                                     venue_location: text(payload, "venueLocation") };
        let teacher_training = TeacherTraining { teacher_invitation: unsigned(payload, "teacherInvitation")?,
                                                 teacher_registration: unsigned(payload, "teacherRegistration")?,
                                                 provides_writing_materials: optional_text(payload, "providesWritingMaterials"),
                                                 provides_refreshments: optional_text(payload, "providesRefreshments") };
        let quiz = QuizProgramme { quiz_for_school_students: text(payload, "quizForSchoolStudents"),
                                   quiz_team_selection: text(payload, "quizTeamSelection"),
                                   quiz_arrangements: text(payload, "quizArrangements"),
                                   quiz_refreshments: optional_text(payload, "quizRefreshments") };
        ExhibitionRequest::new(hall, lecture_hall, logistics, poster, teacher_training, quiz)
    }

    pub fn decode_feedback(&self, payload: &Value) -> Result<VisitFeedback, DomainError> {
        VisitFeedback::new(text(payload, "institutionName"),
                           optional_text(payload, "website"),
                           date(payload, "visitDate")?,
                           text(payload, "staffName"),
                           text(payload, "staffEmail"),
                           text(payload, "staffMobile"),
                           unsigned(payload, "totalStudents")?,
                           unsigned(payload, "accompanyingStaff")?,
                           text_list(payload, "sources"),
                           optional_text(payload, "comments"))
    }

    pub fn decode_ratings(&self, payload: &Value) -> Result<VisitRatings, DomainError> {
        let mut scores = [0u8; 9];
        for (slot, key) in scores.iter_mut().zip(crate::wizards::feedback::RATING_FIELDS) {
            let n = integer(payload, key)?;
            *slot = u8::try_from(n).map_err(|_| DomainError::ValidationError(format!("{} out of range: {}", key, n)))?;
        }
        VisitRatings::new(integer(payload, "feedbackId")?, scores)
    }
}
