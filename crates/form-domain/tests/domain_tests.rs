use chrono::{NaiveDate, NaiveTime};
use form_domain::{AccompanyingTeacher, Campus, ClassLevel, Competition, CompetitionEntry, DomainError, Gender,
                  Participant, SchoolRegistration, TimeSlot, VisitRatings, VisitorContact, VisitorGroup};

fn participant(name: &str) -> Participant {
    Participant::new(name, Gender::Female, Some(ClassLevel::Std10), false).expect("participant builds")
}

#[test]
fn school_registration_validates_mobile_and_pincode() {
    let ok = SchoolRegistration::new("R. Mehta", "9876543210", "Sunrise School", "12 MG Road", "Gandhinagar", "382428", "GB-1021");
    assert!(ok.is_ok());

    let bad_mobile = SchoolRegistration::new("R. Mehta", "98765", "Sunrise School", "12 MG Road", "Gandhinagar", "382428", "GB-1021");
    assert!(matches!(bad_mobile, Err(DomainError::ValidationError(_))));

    let bad_pincode = SchoolRegistration::new("R. Mehta", "9876543210", "Sunrise School", "12 MG Road", "Gandhinagar", "38242", "GB-1021");
    assert!(matches!(bad_pincode, Err(DomainError::ValidationError(_))));
}

#[test]
fn school_reference_code_is_content_stable() {
    let a = SchoolRegistration::new("R. Mehta", "9876543210", "Sunrise School", "12 MG Road", "Gandhinagar", "382428", "GB-1021").expect("valid");
    let b = SchoolRegistration::new("R. Mehta", "9876543210", "Sunrise School", "12 MG Road", "Gandhinagar", "382428", "GB-1021").expect("valid");
    assert_eq!(a.reference_code(), b.reference_code(), "same content, same code");
    assert_ne!(a.id, b.id, "instances still get distinct ids");
}

#[test]
fn accompanying_teacher_requires_a_persisted_school() {
    assert!(AccompanyingTeacher::new(1, "S. Patel", Gender::Male, true).is_ok());
    assert!(AccompanyingTeacher::new(0, "S. Patel", Gender::Male, true).is_err());
}

#[test]
fn competition_participant_bounds_are_enforced() {
    // El modelo estudiantil exige exactamente dos participantes
    let one = CompetitionEntry::new(1,
                                    Competition::StudentModel1,
                                    vec![participant("Asha")],
                                    true,
                                    Some("https://files.example/model.pdf".into()),
                                    None);
    assert!(one.is_err());

    let two = CompetitionEntry::new(1,
                                    Competition::StudentModel1,
                                    vec![participant("Asha"), participant("Ravi")],
                                    true,
                                    Some("https://files.example/model.pdf".into()),
                                    None);
    assert!(two.is_ok());

    // El skit admite hasta seis
    let seven: Vec<Participant> = (0..7).map(|i| participant(&format!("P{}", i))).collect();
    let skit = CompetitionEntry::new(1, Competition::Skit, seven, true, Some("https://youtu.be/x".into()), None);
    assert!(skit.is_err());
}

#[test]
fn declaration_and_attachment_are_mandatory_where_required() {
    let undeclared = CompetitionEntry::new(1,
                                           Competition::EssayHindi,
                                           vec![participant("Asha")],
                                           false,
                                           Some("https://files.example/essay.pdf".into()),
                                           None);
    assert!(undeclared.is_err());

    let missing_file = CompetitionEntry::new(1, Competition::EssayHindi, vec![participant("Asha")], true, None, None);
    assert!(missing_file.is_err());

    // El quiz no exige adjunto
    let quiz = CompetitionEntry::new(1, Competition::Quiz, vec![participant("Asha")], true, None, None);
    assert!(quiz.is_ok());
}

#[test]
fn competition_labels_round_trip() {
    for competition in Competition::ALL {
        assert_eq!(Competition::parse(competition.label()).expect("label parses"), competition);
    }
    assert!(Competition::parse("Chess").is_err());
}

#[test]
fn visitor_group_needs_campuses_and_valid_contact() {
    let contact = VisitorContact::new("G. Babu", "Professor", "g.babu@univ.ac.in", "9408785633").expect("contact builds");
    let date = NaiveDate::from_ymd_opt(2026, 2, 25).expect("valid date");
    let time = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");

    let ok = VisitorGroup::new("LD College", "Electrical", 5, 40, 2, contact.clone(),
                               vec![Campus::Ipr, Campus::Fcipt],
                               Some(TimeSlot::Morning), Some(TimeSlot::Afternoon),
                               date, time, vec!["Plasma brochure".into()]);
    assert!(ok.is_ok());

    let no_campus = VisitorGroup::new("LD College", "Electrical", 5, 40, 2, contact,
                                      vec![], None, None, date, time, vec![]);
    assert!(no_campus.is_err());

    assert!(VisitorContact::new("G. Babu", "Professor", "not-an-email", "9408785633").is_err());
    assert!(VisitorContact::new("G. Babu", "Professor", "g.babu@univ.ac.in", "12345").is_err());
}

#[test]
fn ratings_must_stay_in_range() {
    assert!(VisitRatings::new(3, [5, 4, 3, 5, 4, 2, 5, 4, 5]).is_ok());
    assert!(VisitRatings::new(3, [5, 4, 3, 5, 4, 0, 5, 4, 5]).is_err());
    assert!(VisitRatings::new(3, [5, 4, 3, 5, 4, 6, 5, 4, 5]).is_err());
    assert!(VisitRatings::new(0, [5, 4, 3, 5, 4, 2, 5, 4, 5]).is_err());
}
