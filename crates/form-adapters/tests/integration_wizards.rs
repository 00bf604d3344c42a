//! Tests de integración: wizards completos contra el registro en memoria.

use async_trait::async_trait;
use serde_json::Value;

use form_adapters::wizards::{exhibition_plan, exhibition_wizard, feedback_plan, feedback_wizard, science_day_plan,
                             science_day_wizard, visitor_plan, visitor_wizard};
use form_adapters::{FormDecoder, InMemoryRegistry};
use form_core::{EngineError, FieldValue, ServerRecord, SubmitError, SubmitHandler, WizardEngine};
use form_domain::Competition;

fn set(engine: &mut WizardEngine<form_core::InMemoryEventStore, form_core::InMemorySessionRepository>, id: &str, value: &str) {
    engine.set_field(id, FieldValue::text(value)).expect("field exists in schema");
}

fn fill_school_step(engine: &mut WizardEngine<form_core::InMemoryEventStore, form_core::InMemorySessionRepository>) {
    set(engine, "coordinatorTeacherName", "R. Mehta");
    set(engine, "coordinatorTeacherMobile", "9876543210");
    set(engine, "schoolName", "Sunrise School");
    set(engine, "schoolAddress", "12 MG Road");
    set(engine, "schoolCity", "Gandhinagar");
    set(engine, "pincode", "382428");
    set(engine, "affiliationNumber", "GB-1021");
}

#[test]
fn science_day_threads_the_server_assigned_school_id() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(science_day_wizard(Competition::Quiz)).with_plan(science_day_plan(Competition::Quiz));

    fill_school_step(&mut engine);
    let school = tokio_test::block_on(engine.submit_step(&registry)).expect("school step submits");
    assert_eq!(school.id, Some(1));
    assert_eq!(engine.cursor(), 1);
    assert_eq!(engine.form().text("schoolId"), "1", "server id must land in form state");

    set(&mut engine, "teacherName", "S. Patel");
    set(&mut engine, "teacherGender", "Male");
    set(&mut engine, "teacherAccommodation", "Yes");
    let teacher = tokio_test::block_on(engine.submit_step(&registry)).expect("teacher step submits");
    assert_eq!(teacher.id, Some(2));
    assert_eq!(teacher.body.get("schoolId"), Some(&Value::from(1)), "teacher payload references the created school");

    set(&mut engine, "participant1Name", "Asha");
    set(&mut engine, "participant1Gender", "Female");
    set(&mut engine, "participant1Class", "9th Std.");
    set(&mut engine, "participant1Accommodation", "No");
    engine.set_field("declaration", FieldValue::Bool(true)).expect("field exists");

    let entry = tokio_test::block_on(engine.submit_step(&registry)).expect("entry step submits");
    assert!(engine.is_submitted());

    // Los tres registros quedan en sus endpoints, con los tipos de dominio
    // decodificables
    let decoder = FormDecoder;
    let school_record = registry.find("school", 1).expect("school stored");
    let decoded_school = decoder.decode_school(&school_record.body).expect("school decodes");
    assert_eq!(decoded_school.name, "Sunrise School");

    let teacher_record = registry.find("accompanyingTeacher", 2).expect("teacher stored");
    let decoded_teacher = decoder.decode_teacher(&teacher_record.body).expect("teacher decodes");
    assert_eq!(decoded_teacher.school_id, 1);
    assert!(decoded_teacher.requires_accommodation);

    let entry_record = registry.find("quiz", entry.id.expect("entry id")).expect("entry stored");
    let decoded_entry = decoder.decode_entry(&entry_record.body).expect("entry decodes");
    assert_eq!(decoded_entry.school_id, 1);
    assert_eq!(decoded_entry.competition, Competition::Quiz);
    assert_eq!(decoded_entry.participants.len(), 1);
}

#[test]
fn science_day_partial_failure_keeps_earlier_records_and_state() {
    struct FailAfter {
        registry: InMemoryRegistry,
        fail_on: &'static str,
    }

    #[async_trait]
    impl SubmitHandler for FailAfter {
        async fn submit(&self, endpoint: &str, payload: Value) -> Result<ServerRecord, SubmitError> {
            if endpoint == self.fail_on {
                return Err(SubmitError::Server { status: 500, message: "database unavailable".into() });
            }
            self.registry.submit(endpoint, payload).await
        }
    }

    let backend = FailAfter { registry: InMemoryRegistry::new(), fail_on: "accompanyingTeacher" };
    let mut engine = WizardEngine::new(science_day_wizard(Competition::Quiz)).with_plan(science_day_plan(Competition::Quiz));

    fill_school_step(&mut engine);
    tokio_test::block_on(engine.submit_step(&backend)).expect("school step submits");

    set(&mut engine, "teacherName", "S. Patel");
    set(&mut engine, "teacherGender", "Male");
    set(&mut engine, "teacherAccommodation", "No");
    let before = engine.form().clone();

    let err = tokio_test::block_on(engine.submit_step(&backend));
    assert!(matches!(err, Err(EngineError::Submission(SubmitError::Server { status: 500, .. }))));

    // El paso 0 ya persistió (registro huérfano aceptado); el estado del
    // formulario no pierde nada y el cursor no avanza
    assert_eq!(backend.registry.count("school"), 1);
    assert_eq!(engine.cursor(), 1);
    assert_eq!(engine.form(), &before, "a failed step must not corrupt state gathered so far");

    // Reintento sin reeditar: mismo payload, ahora aceptado
    let backend_ok = FailAfter { registry: backend.registry, fail_on: "none" };
    tokio_test::block_on(engine.submit_step(&backend_ok)).expect("retry succeeds");
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn exhibition_wizard_submits_one_terminal_payload() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(exhibition_wizard()).with_plan(exhibition_plan());

    set(&mut engine, "hallDimension", "20m x 18m");
    set(&mut engine, "isEnclosedHall", "Yes");
    set(&mut engine, "canBeDarkened", "Yes, with curtains");
    set(&mut engine, "isGroundFloor", "Yes");
    set(&mut engine, "powerOutlets", "32");
    set(&mut engine, "vrSpace", "4m x 4m corner");
    engine.advance().expect("hall step");

    set(&mut engine, "lectureHallArea", "300 sqm");
    set(&mut engine, "seatingCapacity", "120");
    engine.advance().expect("lecture hall step");

    set(&mut engine, "accommodationProvided", "8 single AC rooms in guest house");
    set(&mut engine, "localTransportation", "Institute bus available");
    set(&mut engine, "secureParkingSpace", "Inside campus");
    set(&mut engine, "manpowerForLoading", "Six persons");
    engine.advance().expect("logistics step");

    set(&mut engine, "contactPersonName", "Dr. K. Iyer");
    set(&mut engine, "contactPersonMobile", "9876501234");
    set(&mut engine, "contactPersonEmail", "k.iyer@college.ac.in");
    set(&mut engine, "venueLocation", "Main Auditorium, Science College, Rajkot");
    engine.advance().expect("poster step");

    set(&mut engine, "teacherInvitation", "40");
    set(&mut engine, "teacherRegistration", "35");
    engine.advance().expect("teacher training step");

    set(&mut engine, "quizForSchoolStudents", "Open to classes 8-12 of district schools");
    set(&mut engine, "quizTeamSelection", "School-level screening, 12 teams");
    set(&mut engine, "quizArrangements", "Auditorium with buzzer system");

    let record = tokio_test::block_on(engine.submit(&registry)).expect("terminal submit");
    assert_eq!(registry.count("iprexhibition"), 1);

    let decoded = FormDecoder.decode_exhibition(&record.body).expect("exhibition decodes");
    assert_eq!(decoded.hall.power_outlets, 32);
    assert_eq!(decoded.teacher_training.teacher_invitation, 40);
    assert_eq!(decoded.lecture_hall.seating_capacity, 120);
}

#[test]
fn exhibition_numeric_fields_gate_their_steps() {
    let mut engine = WizardEngine::new(exhibition_wizard()).with_plan(exhibition_plan());

    set(&mut engine, "hallDimension", "20m x 18m");
    set(&mut engine, "isEnclosedHall", "Yes");
    set(&mut engine, "canBeDarkened", "Yes");
    set(&mut engine, "isGroundFloor", "Yes");
    set(&mut engine, "powerOutlets", "plenty");
    set(&mut engine, "vrSpace", "4m x 4m");

    assert!(engine.advance().is_err());
    assert_eq!(engine.form().error("powerOutlets"),
               Some("No. of 230V (5/15A) power outlets in the hall must be a valid number"));

    set(&mut engine, "powerOutlets", "32");
    engine.advance().expect("now valid");
}

#[test]
fn visitor_wizard_round_trips_into_the_domain_record() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(visitor_wizard()).with_plan(visitor_plan());

    engine.advance().expect("welcome step has nothing to validate");

    set(&mut engine, "institutionName", "LD College of Engineering");
    set(&mut engine, "studentBranch", "Electrical");
    set(&mut engine, "studentSem", "5");
    engine.advance().expect("institution step");

    set(&mut engine, "numStudents", "42");
    set(&mut engine, "numFaculty", "3");
    engine.advance().expect("group size step");

    set(&mut engine, "name", "G. Babu");
    set(&mut engine, "position", "Professor");
    set(&mut engine, "email", "g.babu@ldce.ac.in");
    set(&mut engine, "mobile", "9408785633");
    engine.advance().expect("contact step");

    set(&mut engine, "campus", "IPR");
    set(&mut engine, "campus", "FCIPT");
    set(&mut engine, "ipr_time", "morning");
    set(&mut engine, "fcipt_time", "afternoon");
    set(&mut engine, "visit_date", "2026-02-25");
    set(&mut engine, "visit_time", "10:00");
    engine.advance().expect("schedule step");

    set(&mut engine, "materials", "Posters (set of 10 , in English)");

    let record = tokio_test::block_on(engine.submit(&registry)).expect("terminal submit");
    assert_eq!(record.body.get("numStudents"), Some(&Value::from(42)), "counters travel as integers");

    let group = FormDecoder.decode_visitor(&record.body).expect("visitor decodes");
    assert_eq!(group.campuses.len(), 2);
    assert_eq!(group.num_students, 42);
    assert_eq!(group.visit_date.to_string(), "2026-02-25");
}

#[test]
fn feedback_wizard_threads_the_feedback_id_into_ratings() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(feedback_wizard()).with_plan(feedback_plan());

    set(&mut engine, "institutionName", "LD College of Engineering");
    set(&mut engine, "visitDate", "2026-02-25");
    set(&mut engine, "staffName", "G. Babu");
    set(&mut engine, "staffEmail", "g.babu@ldce.ac.in");
    set(&mut engine, "staffMobile", "9408785633");
    set(&mut engine, "totalStudents", "42");
    set(&mut engine, "accompanyingStaff", "3");
    set(&mut engine, "sources", "Internet");
    set(&mut engine, "campuses", "IPR Main");

    let feedback = tokio_test::block_on(engine.submit_step(&registry)).expect("feedback step submits");
    let feedback_id = feedback.id.expect("feedback id assigned");

    for field in form_adapters::wizards::feedback::RATING_FIELDS {
        set(&mut engine, field, "4");
    }
    let ratings = tokio_test::block_on(engine.submit_step(&registry)).expect("ratings step submits");
    assert!(engine.is_submitted());
    assert_eq!(ratings.body.get("feedbackId"), Some(&Value::from(feedback_id)));

    let decoded = FormDecoder.decode_ratings(&ratings.body).expect("ratings decode");
    assert_eq!(decoded.feedback_id, feedback_id);
    assert_eq!(decoded.ipr_rating, 4);
}
