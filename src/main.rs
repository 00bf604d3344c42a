use form_adapters::wizards::{exhibition_plan, exhibition_wizard, science_day_plan, science_day_wizard, visitor_plan,
                             visitor_wizard};
use form_adapters::{FormDecoder, InMemoryRegistry};
use form_core::{FieldValue, WizardEngine};
use form_domain::Competition;
use formflow_rust::config::CONFIG;

fn fill(engine: &mut WizardEngine<form_core::InMemoryEventStore, form_core::InMemorySessionRepository>,
        pairs: &[(&str, &str)]) {
    for (id, value) in pairs {
        engine.set_field(id, FieldValue::text(*value)).expect("demo field exists in schema");
    }
}

/// Validación: wizard de exhibición completo con envío terminal único.
async fn run_exhibition_validation() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(exhibition_wizard()).with_plan(exhibition_plan());

    // Intento de avanzar con el paso 0 vacío: el cursor no debe moverse
    assert!(engine.advance().is_err(), "empty hall step must not advance");
    assert_eq!(engine.cursor(), 0);

    fill(&mut engine,
         &[("hallDimension", "20m x 18m"),
           ("isEnclosedHall", "Yes"),
           ("canBeDarkened", "Yes, curtains available"),
           ("isGroundFloor", "Yes"),
           ("powerOutlets", "32"),
           ("vrSpace", "4m x 4m corner")]);
    engine.advance().expect("hall step valid");

    fill(&mut engine, &[("lectureHallArea", "300 sqm"), ("seatingCapacity", "120")]);
    engine.advance().expect("lecture hall step valid");

    fill(&mut engine,
         &[("accommodationProvided", "8 single AC rooms"),
           ("localTransportation", "Institute bus"),
           ("secureParkingSpace", "Inside campus"),
           ("manpowerForLoading", "Six persons")]);
    engine.advance().expect("logistics step valid");

    fill(&mut engine,
         &[("contactPersonName", "Dr. K. Iyer"),
           ("contactPersonMobile", "9876501234"),
           ("contactPersonEmail", "k.iyer@college.ac.in"),
           ("venueLocation", "Main Auditorium, Science College, Rajkot")]);
    engine.advance().expect("poster step valid");

    fill(&mut engine, &[("teacherInvitation", "40"), ("teacherRegistration", "35")]);
    engine.advance().expect("teacher training step valid");

    fill(&mut engine,
         &[("quizForSchoolStudents", "Classes 8-12 of district schools"),
           ("quizTeamSelection", "School-level screening, 12 teams"),
           ("quizArrangements", "Auditorium with buzzer system")]);

    let record = engine.submit(&registry).await.expect("terminal submit accepted");
    let decoded = FormDecoder.decode_exhibition(&record.body).expect("payload decodes into the domain record");
    assert_eq!(decoded.hall.power_outlets, 32);
    println!("[exhibition] record {:?} reference {}", record.id, decoded.reference_code());
    println!("[exhibition] events: {:?}", engine.event_variants());
}

/// Validación: variante incremental con inyección del id de escuela.
async fn run_science_day_validation() {
    let registry = InMemoryRegistry::new();
    let competition = Competition::EssayEnglish;
    let mut engine = WizardEngine::new(science_day_wizard(competition)).with_plan(science_day_plan(competition));

    fill(&mut engine,
         &[("coordinatorTeacherName", "R. Mehta"),
           ("coordinatorTeacherMobile", "9876543210"),
           ("schoolName", "Sunrise School"),
           ("schoolAddress", "12 MG Road"),
           ("schoolCity", "Gandhinagar"),
           ("pincode", "382428"),
           ("affiliationNumber", "GB-1021")]);
    let school = engine.submit_step(&registry).await.expect("school step accepted");

    fill(&mut engine, &[("teacherName", "S. Patel"), ("teacherGender", "Male"), ("teacherAccommodation", "No")]);
    let teacher = engine.submit_step(&registry).await.expect("teacher step accepted");
    assert_eq!(teacher.body.get("schoolId").and_then(|v| v.as_i64()), school.id, "server id must thread into the next payload");

    fill(&mut engine,
         &[("participant1Name", "Asha"),
           ("participant1Gender", "Female"),
           ("participant1Class", "11th Std."),
           ("participant1Accommodation", "No"),
           ("attachmentUrl", "https://files.example/essay.pdf")]);
    engine.set_field("declaration", FieldValue::Bool(true)).expect("declaration exists");

    let entry = engine.submit_step(&registry).await.expect("entry step accepted");
    assert!(engine.is_submitted());

    let decoded = FormDecoder.decode_entry(&registry.find(competition.endpoint(), entry.id.expect("entry id"))
                                                    .expect("entry stored")
                                                    .body).expect("entry decodes");
    assert_eq!(decoded.competition, competition);
    println!("[science-day] school {:?}, teacher {:?}, entry {:?}", school.id, teacher.id, entry.id);
    println!("[science-day] events: {:?}", engine.event_variants());
}

/// Validación: wizard de visitas (retroceso sin pérdida de datos incluido).
async fn run_visitor_validation() {
    let registry = InMemoryRegistry::new();
    let mut engine = WizardEngine::new(visitor_wizard()).with_plan(visitor_plan());

    engine.advance().expect("welcome step");
    fill(&mut engine, &[("institutionName", "LD College"), ("studentBranch", "Electrical"), ("studentSem", "5")]);
    engine.advance().expect("institution step");

    fill(&mut engine, &[("numStudents", "42"), ("numFaculty", "3")]);

    // Retroceder y volver: nada se pierde
    engine.retreat().expect("free retreat");
    assert_eq!(engine.form().text("numStudents"), "42");
    engine.advance().expect("institution step again");
    engine.advance().expect("group size step");

    fill(&mut engine,
         &[("name", "G. Babu"), ("position", "Professor"), ("email", "g.babu@ldce.ac.in"), ("mobile", "9408785633")]);
    engine.advance().expect("contact step");

    fill(&mut engine, &[("campus", "IPR"), ("visit_date", "2026-02-25"), ("visit_time", "10:00")]);
    engine.advance().expect("schedule step");

    let record = engine.submit(&registry).await.expect("terminal submit accepted");
    let group = FormDecoder.decode_visitor(&record.body).expect("payload decodes");
    println!("[visitor] {} on {} -> record {:?}", group.institution_name, group.visit_date, record.id);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();
    log::info!("formflow demo for event {}", CONFIG.event.name);

    run_exhibition_validation().await;
    run_science_day_validation().await;
    run_visitor_validation().await;

    println!("all scenario validations passed");
}
