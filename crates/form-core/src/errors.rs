//! Errores específicos del motor (simples por ahora).

use thiserror::Error;

use crate::submit::SubmitError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("wizard already submitted")] AlreadySubmitted,
    #[error("already on first step")] AlreadyOnFirstStep,
    #[error("already on final step (use submit)")] AlreadyOnFinalStep,
    #[error("submit only allowed on final step")] NotOnFinalStep,
    #[error("step {step_index} failed validation")] StepNotValid { step_index: usize },
    #[error("a submission is already in flight for this session")] SubmissionInFlight,
    #[error("no submission configured for step {0}")] NoSubmissionForStep(usize),
    #[error("unknown field: {0}")] UnknownField(String),
    #[error("invalid schema: {0}")] InvalidSchema(String),
    #[error("submission failed: {0}")] Submission(#[from] SubmitError),
    #[error("internal: {0}")] Internal(String),
}
