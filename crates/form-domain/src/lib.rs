// form-domain library entry point
pub mod common;
pub mod competition;
pub mod error;
pub mod exhibition;
pub mod feedback;
pub mod reference;
pub mod school;
pub mod teacher;
pub mod visitor;
pub use common::{ClassLevel, Gender};
pub use competition::{Competition, CompetitionEntry, Participant};
pub use error::DomainError;
pub use exhibition::ExhibitionRequest;
pub use feedback::{VisitFeedback, VisitRatings};
pub use reference::reference_code;
pub use school::SchoolRegistration;
pub use teacher::AccompanyingTeacher;
pub use visitor::{Campus, TimeSlot, VisitorContact, VisitorGroup};
