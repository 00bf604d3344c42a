//! Wizard de feedback post-visita.
//!
//! Dos envíos encadenados como en el formulario original: primero los datos
//! de la visita al endpoint `feedback`, después las calificaciones al
//! endpoint `ratings` referenciando el id recién creado.

use serde_json::{json, Value};

use form_core::{build_wizard_schema, FieldSpec, FormState, SelectOption, StepSchema, StepSubmission, SubmitPlan,
                WizardSchema};

use crate::options::rating_options;

pub const FEEDBACK_ENDPOINT: &str = "feedback";
pub const RATINGS_ENDPOINT: &str = "ratings";

/// Aspectos calificados de 1 a 5, con el nombre de campo que espera el
/// endpoint de ratings.
pub const RATING_FIELDS: [&str; 9] = ["iprRating",
                                      "fciptRating",
                                      "knowledge",
                                      "explanationsIPR",
                                      "explanationsFCIPT",
                                      "knowledgeBefore",
                                      "knowledgeAfter",
                                      "technicalContents",
                                      "easeOfUnderstanding"];

fn source_options() -> Vec<SelectOption> {
    ["Internet", "Social Media", "Friends", "Other"].iter().map(|s| SelectOption::new(*s, *s)).collect()
}

fn campus_visited_options() -> Vec<SelectOption> {
    ["IPR Main", "FCIPT"].iter().map(|s| SelectOption::new(*s, *s)).collect()
}

pub fn feedback_wizard() -> WizardSchema {
    let steps = vec![
        StepSchema::new("Visit Details",
                        vec![FieldSpec::text("institutionName", "Name of the visiting Institution", true),
                             FieldSpec::text("website", "Website of the institution", false),
                             FieldSpec::date("visitDate", "Date of visit", true),
                             FieldSpec::text("staffName", "Name of the in-charge staff member", true),
                             FieldSpec::email("staffEmail", "Email of in-charge staff member", true),
                             FieldSpec::tel("staffMobile", "Mobile number of in-charge staff member", true),
                             FieldSpec::number("totalStudents", "Total number of students", true),
                             FieldSpec::number("accompanyingStaff", "Number of accompanying staff members", true),
                             FieldSpec::checkbox_group("sources", "How did you come to know about IPR?", true, source_options()),
                             FieldSpec::checkbox_group("campuses", "IPR Campuses visited during the trip?", true, campus_visited_options())]),
        StepSchema::new("Ratings and Comments",
                        vec![FieldSpec::select("iprRating", "How do you rate the IPR Main campus visit?", true, rating_options()),
                             FieldSpec::select("fciptRating", "How do you rate the FCIPT campus visit?", true, rating_options()),
                             FieldSpec::select("knowledge", "Knowledge of the presenters", true, rating_options()),
                             FieldSpec::select("explanationsIPR", "Explanations at IPR", true, rating_options()),
                             FieldSpec::select("explanationsFCIPT", "Explanations at FCIPT", true, rating_options()),
                             FieldSpec::select("knowledgeBefore", "Your knowledge about plasma before the visit", true, rating_options()),
                             FieldSpec::select("knowledgeAfter", "Your knowledge about plasma after the visit", true, rating_options()),
                             FieldSpec::select("technicalContents", "Technical contents of the exhibits", true, rating_options()),
                             FieldSpec::select("easeOfUnderstanding", "Ease of understanding", true, rating_options()),
                             FieldSpec::text("best", "What did you like best about the visit?", false),
                             FieldSpec::text("worst", "What did you like the least about the visit?", false),
                             FieldSpec::text("suggestions", "Any suggestions for improvement?", false),
                             FieldSpec::text("comments", "Any additional comments?", false)]),
    ];

    build_wizard_schema("feedback", steps).expect("feedback schema is statically valid")
}

fn feedback_payload(state: &FormState) -> Value {
    json!({
        "institutionName": state.text("institutionName"),
        "website": state.text("website"),
        "visitDate": state.text("visitDate"),
        "staffName": state.text("staffName"),
        "staffEmail": state.text("staffEmail"),
        "staffMobile": state.text("staffMobile"),
        "totalStudents": state.text("totalStudents").trim().parse::<i64>().unwrap_or(0),
        "accompanyingStaff": state.text("accompanyingStaff").trim().parse::<i64>().unwrap_or(0),
        "sources": state.value("sources").map(|v| v.to_json()).unwrap_or(Value::Array(vec![])),
        "campuses": state.value("campuses").map(|v| v.to_json()).unwrap_or(Value::Array(vec![])),
    })
}

fn ratings_payload(state: &FormState) -> Value {
    let mut payload = json!({
        "feedbackId": state.text("feedbackId").parse::<i64>().unwrap_or(0),
        "best": state.text("best"),
        "worst": state.text("worst"),
        "suggestions": state.text("suggestions"),
        "comments": state.text("comments"),
    });
    for field in RATING_FIELDS {
        payload[field] = Value::from(state.text(field).trim().parse::<i64>().unwrap_or(0));
    }
    payload
}

pub fn feedback_plan() -> SubmitPlan {
    SubmitPlan::new()
        .on_step(0, StepSubmission::new(FEEDBACK_ENDPOINT, feedback_payload).threading("id", "feedbackId"))
        .on_step(1, StepSubmission::new(RATINGS_ENDPOINT, ratings_payload))
}
