//! Escenarios end-to-end de la plataforma completa sobre un solo registro.

use form_adapters::wizards::feedback::RATING_FIELDS;
use form_adapters::wizards::{feedback_plan, feedback_wizard, science_day_plan, science_day_wizard};
use form_adapters::{FormDecoder, InMemoryRegistry};
use form_core::{FieldValue, InMemoryEventStore, InMemorySessionRepository, WizardEngine};
use form_domain::Competition;

type Engine = WizardEngine<InMemoryEventStore, InMemorySessionRepository>;

fn fill(engine: &mut Engine, pairs: &[(&str, &str)]) {
    for (id, value) in pairs {
        engine.set_field(id, FieldValue::text(*value)).expect("scenario field exists");
    }
}

fn fill_school_and_teacher(engine: &mut Engine) {
    fill(engine,
         &[("coordinatorTeacherName", "R. Mehta"),
           ("coordinatorTeacherMobile", "9876543210"),
           ("schoolName", "Sunrise School"),
           ("schoolAddress", "12 MG Road"),
           ("schoolCity", "Gandhinagar"),
           ("pincode", "382428"),
           ("affiliationNumber", "GB-1021")]);
}

#[test]
fn feedback_and_ratings_land_in_their_endpoints() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(feedback_wizard()).with_plan(feedback_plan());

    fill(&mut engine,
         &[("institutionName", "LD College"),
           ("visitDate", "2026-02-25"),
           ("staffName", "G. Babu"),
           ("staffEmail", "g.babu@ldce.ac.in"),
           ("staffMobile", "9408785633"),
           ("totalStudents", "42"),
           ("accompanyingStaff", "3"),
           ("sources", "Internet"),
           ("campuses", "IPR Main")]);
    let feedback = tokio_test::block_on(engine.submit_step(&registry)).expect("feedback accepted");

    for field in RATING_FIELDS {
        fill(&mut engine, &[(field, "5")]);
    }
    fill(&mut engine, &[("suggestions", "Longer slot for the plasma demos")]);
    tokio_test::block_on(engine.submit_step(&registry)).expect("ratings accepted");

    assert!(engine.is_submitted());
    assert_eq!(registry.count("feedback"), 1);
    assert_eq!(registry.count("ratings"), 1);

    let decoder = FormDecoder;
    let stored_feedback = registry.records("feedback").remove(0);
    let decoded = decoder.decode_feedback(&stored_feedback.body).expect("feedback decodes");
    assert_eq!(decoded.total_students, 42);

    let stored_ratings = registry.records("ratings").remove(0);
    let ratings = decoder.decode_ratings(&stored_ratings.body).expect("ratings decode");
    assert_eq!(ratings.feedback_id, feedback.id.expect("feedback id"));
}

#[test]
fn a_second_competition_reuses_the_created_school() {
    let registry = InMemoryRegistry::new();

    // Primera sesión: quiz, con escuela y docente creados por el camino
    let mut quiz = WizardEngine::new(science_day_wizard(Competition::Quiz)).with_plan(science_day_plan(Competition::Quiz));
    fill_school_and_teacher(&mut quiz);
    let school = tokio_test::block_on(quiz.submit_step(&registry)).expect("school accepted");
    fill(&mut quiz, &[("teacherName", "S. Patel"), ("teacherGender", "Male"), ("teacherAccommodation", "No")]);
    tokio_test::block_on(quiz.submit_step(&registry)).expect("teacher accepted");
    fill(&mut quiz,
         &[("participant1Name", "Asha"),
           ("participant1Gender", "Female"),
           ("participant1Class", "9th Std."),
           ("participant1Accommodation", "No")]);
    quiz.set_field("declaration", FieldValue::Bool(true)).expect("declaration exists");
    tokio_test::block_on(quiz.submit_step(&registry)).expect("quiz entry accepted");

    // Segunda sesión: póster de la misma escuela. Los pasos previos se
    // recorren con advance() (sin re-postear) y el id ya creado se siembra.
    let mut poster = WizardEngine::new(science_day_wizard(Competition::Poster)).with_plan(science_day_plan(Competition::Poster));
    fill_school_and_teacher(&mut poster);
    poster.advance().expect("school step only validated");
    fill(&mut poster, &[("teacherName", "S. Patel"), ("teacherGender", "Male"), ("teacherAccommodation", "No")]);
    poster.advance().expect("teacher step only validated");

    let school_id = school.id.expect("school id");
    poster.seed_value("schoolId", FieldValue::text(school_id.to_string()));
    fill(&mut poster,
         &[("participant1Name", "Ravi"),
           ("participant1Gender", "Male"),
           ("participant1Class", "8th Std."),
           ("participant1Accommodation", "No")]);
    poster.set_field("declaration", FieldValue::Bool(true)).expect("declaration exists");
    let entry = tokio_test::block_on(poster.submit_step(&registry)).expect("poster entry accepted");

    // Una sola escuela, dos inscripciones referenciando el mismo id
    assert_eq!(registry.count("school"), 1);
    assert_eq!(registry.count("quiz"), 1);
    assert_eq!(registry.count("poster"), 1);

    let decoded = FormDecoder.decode_entry(&registry.find("poster", entry.id.expect("entry id"))
                                                    .expect("poster stored")
                                                    .body).expect("entry decodes");
    assert_eq!(decoded.school_id, school_id);
}
