//! Wizard de registro de visitas científicas.
//!
//! Seis pasos con envío único: el primero es sólo informativo (sin campos),
//! el último junta campus, fecha y materiales. Los contadores viajan como
//! enteros en el payload aunque el estado los guarde como texto crudo.

use serde_json::Value;

use form_core::{build_wizard_schema, FieldSpec, FormState, SelectOption, StepSchema, StepSubmission, SubmitPlan,
                WizardSchema};

pub const VISITOR_ENDPOINT: &str = "visitor/submit-form";

fn campus_options() -> Vec<SelectOption> {
    vec![SelectOption::new("IPR", "IPR Main Campus"), SelectOption::new("FCIPT", "FCIPT")]
}

fn slot_options() -> Vec<SelectOption> {
    vec![SelectOption::new("morning", "Morning"), SelectOption::new("afternoon", "Afternoon")]
}

fn material_options() -> Vec<SelectOption> {
    let labels = ["Posters (set of 10 , in English)",
                  "Posters (set of 10 , in Hindi)",
                  "Book entitled \"Living with plasma (in English)\"",
                  "Book entitled \"Living with plasma (in Hindi)\""];
    labels.iter().map(|l| SelectOption::new(*l, *l)).collect()
}

pub fn visitor_wizard() -> WizardSchema {
    let steps = vec![
        // Paso de bienvenida: texto informativo, nada que validar
        StepSchema::new("Welcome to IPR Scientific Visit", vec![]),
        StepSchema::new("Details of the Student Group",
                        vec![FieldSpec::text("institutionName", "Name of the Institution", true),
                             FieldSpec::text("studentBranch", "Student branch", true),
                             FieldSpec::number("studentSem", "Student semester", true)]),
        StepSchema::new("Group Size",
                        vec![FieldSpec::number("numStudents", "Number of students", true),
                             FieldSpec::number("numFaculty", "Number of faculty", true)]),
        StepSchema::new("Contact Person",
                        vec![FieldSpec::text("name", "Name", true),
                             FieldSpec::text("position", "Position", true),
                             FieldSpec::email("email", "Email", true),
                             FieldSpec::tel("mobile", "Mobile", true)]),
        StepSchema::new("Schedule of the Visit",
                        vec![FieldSpec::checkbox_group("campus", "Campus", true, campus_options())
                                 .with_helper("Depending on the time you have, please choose the campuses that your group would like to visit."),
                             FieldSpec::select("ipr_time", "Preferred time at IPR Main Campus", false, slot_options()),
                             FieldSpec::select("fcipt_time", "Preferred time at FCIPT", false, slot_options()),
                             FieldSpec::date("visit_date", "Visit date", true)
                                 .with_helper("Visit to IPR is restricted to only one day (WEDNESDAY) in a week."),
                             FieldSpec::time("visit_time", "Visit time", true)]),
        StepSchema::new("Resource Materials",
                        vec![FieldSpec::checkbox_group("materials", "Resource materials on plasma", false, material_options())]),
    ];

    build_wizard_schema("visitor", steps).expect("visitor schema is statically valid")
}

fn visitor_payload(state: &FormState) -> Value {
    let mut payload = state.snapshot_json();
    // Los contadores viajan como enteros, igual que el formulario los parsea
    // antes de postear
    for key in ["studentSem", "numStudents", "numFaculty"] {
        let parsed = state.text(key).trim().parse::<i64>().ok();
        if let (Value::Object(map), Some(n)) = (&mut payload, parsed) {
            map.insert(key.to_string(), Value::from(n));
        }
    }
    payload
}

pub fn visitor_plan() -> SubmitPlan {
    SubmitPlan::new().on_step(5, StepSubmission::new(VISITOR_ENDPOINT, visitor_payload))
}
