//! Wizard de solicitud de sede para la exhibición itinerante.
//!
//! Seis pasos con envío único al final: el cuestionario completo viaja como
//! un solo payload al endpoint `iprexhibition`, tal como el formulario lo
//! postea de una vez.

use form_core::{build_wizard_schema, FieldSpec, StepSchema, StepSubmission, SubmitPlan, WizardSchema};

pub const EXHIBITION_ENDPOINT: &str = "iprexhibition";

pub fn exhibition_wizard() -> WizardSchema {
    let steps = vec![
        StepSchema::new("Hall for Exhibition",
                        vec![FieldSpec::text("hallDimension", "Hall Dimension", true)
                                 .with_helper("Dimension of the hall (LxB in meters). As large as possible (Min 15mx15m)"),
                             FieldSpec::text("isEnclosedHall", "Is it an enclosed hall?", true)
                                 .with_helper("Enclosed hall required for safety"),
                             FieldSpec::text("canBeDarkened", "Can the hall be darkened with curtains?", true)
                                 .with_helper("Hall should be dark to be able to see plasma properly"),
                             FieldSpec::text("hasCooling", "Does the hall have A/C or fans?", false)
                                 .with_helper("Cooling is required to keep working models cool"),
                             FieldSpec::text("isGroundFloor", "Is it on the ground floor?", true)
                                 .with_helper("Preferably on ground floor for easy unloading"),
                             FieldSpec::text("hasStorageSpace", "Is there storage space for empty exhibit boxes?", false)
                                 .with_helper("Storage space is preferable for easy management"),
                             FieldSpec::number("powerOutlets", "No. of 230V (5/15A) power outlets in the hall", true)
                                 .with_helper("Minimum 30 outlets needed"),
                             FieldSpec::number("numTables", "Tables for placing the exhibits", false)
                                 .with_helper("35 tables and 20 chairs needed"),
                             FieldSpec::text("vrSpace", "Space for VR", true)
                                 .with_helper("Min 3m x 3m for one VR exhibit"),
                             FieldSpec::text("hasWifi", "WiFi Access", false)
                                 .with_helper("WiFi access needed for team members")]),
        StepSchema::new("Hall for Lectures/Quiz/Tokotoy Competition",
                        vec![FieldSpec::text("lectureHallArea", "Area of the hall", true)
                                 .with_helper("Should be able to comfortably seat the audience"),
                             FieldSpec::number("seatingCapacity", "Seating capacity", true)
                                 .with_helper("Should be able to comfortably seat a minimum of 50 people"),
                             FieldSpec::text("hasAVFacilities", "Does the hall have A/V facilities?", false)
                                 .with_helper("Requires digital projector (HDMI input) and audio system"),
                             FieldSpec::text("distanceFromExhibition", "Distance of lecture hall from exhibition hall", false)
                                 .with_helper("As close to the exhibition hall as possible")]),
        StepSchema::new("Logistics and Accommodation",
                        vec![FieldSpec::text("accommodationProvided", "Accommodation for IPR team", true)
                                 .with_helper("8 rooms, A/C, single occupancy required"),
                             FieldSpec::text("localTransportation", "Local transportation for IPR team", true)
                                 .with_helper("For minimum 8 people - airport/railway station pickup/drop"),
                             FieldSpec::text("secureParkingSpace", "Secure parking space for IPR truck", true)
                                 .with_helper("Preferably within the campus"),
                             FieldSpec::text("manpowerForLoading", "Manpower for loading/unloading", true)
                                 .with_helper("At least FOUR persons needed")]),
        StepSchema::new("Event Poster Details",
                        vec![FieldSpec::text("contactPersonName", "Name of the contact person", true)
                                 .with_helper("Will appear on event poster"),
                             FieldSpec::tel("contactPersonMobile", "Mobile Number", true)
                                 .with_helper("Will appear on event poster"),
                             FieldSpec::email("contactPersonEmail", "E-mail", true)
                                 .with_helper("Will appear on event poster"),
                             FieldSpec::text("venueLocation", "Location of the venue", true)
                                 .with_helper("Full address including hall name, building, etc.")]),
        StepSchema::new("Teacher Training Program",
                        vec![FieldSpec::number("teacherInvitation", "Invitation to teachers", true)
                                 .with_helper("Minimum 25, Maximum 50 teachers"),
                             FieldSpec::number("teacherRegistration", "Registration", true)
                                 .with_helper("Minimum 25, Maximum 50"),
                             FieldSpec::text("providesWritingMaterials", "Writing materials provision", false)
                                 .with_helper("Writing pad/pen etc. for participants"),
                             FieldSpec::text("providesRefreshments", "Refreshments arrangement", false)
                                 .with_helper("Tea/lunch arrangements for participants")]),
        StepSchema::new("Quiz Programme",
                        vec![FieldSpec::text("quizForSchoolStudents", "Quiz participation details", true)
                                 .with_helper("For school students (8-12 classes)"),
                             FieldSpec::text("quizTeamSelection", "Team registration process", true)
                                 .with_helper("Minimum 10 teams, 2 participants per team"),
                             FieldSpec::text("quizArrangements", "Quiz arrangements", true)
                                 .with_helper("Arrangements for organizing the quiz"),
                             FieldSpec::text("quizRefreshments", "Refreshments for participants", false)
                                 .with_helper("Arrangements for participants")]),
    ];

    build_wizard_schema("iprexhibition", steps).expect("exhibition schema is statically valid")
}

pub fn exhibition_plan() -> SubmitPlan {
    SubmitPlan::new().on_step(5, StepSubmission::new(EXHIBITION_ENDPOINT, |state| state.snapshot_json()))
}
