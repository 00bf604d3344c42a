//! Wizard de inscripción al día nacional de la ciencia.
//!
//! Variante de envío incremental: cada paso postea su propio payload y el id
//! asignado por el servidor se inyecta de vuelta al estado para los pasos
//! siguientes (escuela -> docente acompañante -> inscripción a competencia).
//! El wizard se instancia por competencia; para inscribir otra competencia de
//! la misma escuela el caller arranca una nueva sesión reutilizando el
//! `schoolId` ya creado.

use serde_json::{json, Value};

use form_core::{build_wizard_schema, FieldSpec, FormState, StepSchema, StepSubmission, SubmitPlan, WizardSchema};
use form_domain::Competition;

use crate::options::{class_options_for, gender_options, yes_no_options};

pub const SCHOOL_ENDPOINT: &str = "school";
pub const TEACHER_ENDPOINT: &str = "accompanyingTeacher";

pub fn science_day_wizard(competition: Competition) -> WizardSchema {
    let steps = vec![
        StepSchema::new("School Details",
                        vec![FieldSpec::text("coordinatorTeacherName", "Name of the School Coordinator Teacher", true)
                                 .with_helper("Any communication related to the event shall be done by this teacher only."),
                             FieldSpec::tel("coordinatorTeacherMobile", "Mobile Number of the School Coordinator Teacher", true),
                             FieldSpec::text("schoolName", "Name of the School", true),
                             FieldSpec::text("schoolAddress", "Address of the School", true),
                             FieldSpec::text("schoolCity", "City/village of the School", true),
                             FieldSpec::text("pincode", "Pincode", true),
                             FieldSpec::text("affiliationNumber", "Affiliation Number of the School", true)
                                 .with_helper("Enter Gujarat Board/CBSE/ICSC/other board registration number")]),
        StepSchema::new("Student Accompanying Teacher Details",
                        vec![FieldSpec::text("teacherName", "Name of the Accompanying Teacher", true)
                                 .with_helper("Accompanying Teacher will be given only duty-certificate."),
                             FieldSpec::select("teacherGender", "Gender of the Accompanying Teacher", true, gender_options()),
                             FieldSpec::select("teacherAccommodation",
                                               "Do the Accompanying Teacher require Accommodation facility?",
                                               true,
                                               yes_no_options())]),
        StepSchema::new(format!("{} Details", competition.label()), competition_fields(competition)),
    ];

    build_wizard_schema("science-day", steps).expect("science day schema is statically valid")
}

/// Tabla de campos por competencia, derivada de las cotas de participantes y
/// de los requisitos de adjunto/declaración de cada una.
fn competition_fields(competition: Competition) -> Vec<FieldSpec> {
    let (min, max) = competition.participant_bounds();
    let mut fields = Vec::new();

    for n in 1..=max {
        let required = n <= min;
        fields.push(FieldSpec::text(format!("participant{}Name", n),
                                    format!("Name of the Participant {} for {}", n, competition.label()),
                                    required));
        fields.push(FieldSpec::select(format!("participant{}Gender", n),
                                      format!("Gender of Participant {} for {}", n, competition.label()),
                                      required,
                                      gender_options()));
        if competition != Competition::TeacherModel {
            fields.push(FieldSpec::select(format!("participant{}Class", n),
                                          format!("Student Class of Participant {} for {}", n, competition.label()),
                                          required,
                                          class_options_for(competition)));
        }
        fields.push(FieldSpec::select(format!("participant{}Accommodation", n),
                                      format!("Will Participant {} for {} require Accommodation facility?", n, competition.label()),
                                      required,
                                      yes_no_options())
                        .with_helper("Provided, if selected for Final Round at IPR"));
    }

    if matches!(competition,
                Competition::StudentModel1 | Competition::StudentModel2 | Competition::Skit | Competition::TeacherModel)
    {
        fields.push(FieldSpec::text("additionalRequirements",
                                    format!("Additional Requirements for {} presentation (like power, water etc.,)",
                                            competition.label()),
                                    false).with_helper("Provided, if selected for Final Round at IPR"));
    }

    fields.push(FieldSpec::checkbox("declaration", "Declaration", true));

    if competition.requires_attachment() {
        fields.push(FieldSpec::file("attachmentUrl",
                                    format!("Upload for {} (PDF writeup or video link)", competition.label()),
                                    true));
    }

    fields
}

fn school_payload(state: &FormState) -> Value {
    json!({
        "name": state.text("schoolName"),
        "address": state.text("schoolAddress"),
        "city": state.text("schoolCity"),
        "pincode": state.text("pincode"),
        "affiliationNumber": state.text("affiliationNumber"),
        "coordinatorTeacherName": state.text("coordinatorTeacherName"),
        "coordinatorTeacherMobile": state.text("coordinatorTeacherMobile"),
    })
}

fn teacher_payload(state: &FormState) -> Value {
    json!({
        "schoolId": threaded_school_id(state),
        "name": state.text("teacherName"),
        "gender": state.text("teacherGender"),
        "requiresAccommodation": state.text("teacherAccommodation") == "Yes",
    })
}

fn entry_payload(state: &FormState, competition: Competition) -> Value {
    let (_, max) = competition.participant_bounds();
    let mut participants = Vec::new();
    for n in 1..=max {
        let name = state.text(&format!("participant{}Name", n));
        if name.trim().is_empty() {
            continue; // slot opcional sin completar
        }
        let mut p = json!({
            "name": name,
            "gender": state.text(&format!("participant{}Gender", n)),
            "requiresAccommodation": state.text(&format!("participant{}Accommodation", n)) == "Yes",
        });
        if competition != Competition::TeacherModel {
            p["classLevel"] = Value::from(state.text(&format!("participant{}Class", n)));
        }
        participants.push(p);
    }

    let mut payload = json!({
        "schoolId": threaded_school_id(state),
        "competitionName": competition.label(),
        "participants": participants,
        "declarationAccepted": state.value("declaration").map(|v| v.as_bool()).unwrap_or(false),
    });
    if competition.requires_attachment() {
        payload["attachmentUrl"] = Value::from(state.text("attachmentUrl"));
    }
    let extra = state.text("additionalRequirements");
    if !extra.trim().is_empty() {
        payload["additionalRequirements"] = Value::from(extra);
    }
    payload
}

/// Id de escuela inyectado por el envío del paso 0. Cero si aún no existe
/// (el backend lo rechazará como inválido).
fn threaded_school_id(state: &FormState) -> i64 {
    state.text("schoolId").parse::<i64>().unwrap_or(0)
}

pub fn science_day_plan(competition: Competition) -> SubmitPlan {
    SubmitPlan::new()
        .on_step(0, StepSubmission::new(SCHOOL_ENDPOINT, school_payload).threading("id", "schoolId"))
        .on_step(1, StepSubmission::new(TEACHER_ENDPOINT, teacher_payload).threading("id", "accompanyingTeacherId"))
        .on_step(2, StepSubmission::new(competition.endpoint(), move |state| entry_payload(state, competition)))
}
