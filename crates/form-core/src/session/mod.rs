pub mod types;

pub use types::{InMemorySessionRepository, SessionRepository, StepSlot, StepStatus, WizardInstance};
