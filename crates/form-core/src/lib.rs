//! form-core: Motor lineal de formularios multi-paso (wizard)
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod schema;
pub mod session;
pub mod state;
pub mod submit;
pub mod validate;


pub use engine::WizardEngine;
pub use errors::EngineError;
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use schema::{build_wizard_schema, FieldSpec, FieldType, SelectOption, StepSchema, WizardSchema};
pub use session::{InMemorySessionRepository, SessionRepository, StepSlot, StepStatus, WizardInstance};
pub use state::{FieldValue, FormState};
pub use submit::{ServerRecord, StepSubmission, SubmitError, SubmitHandler, SubmitPlan, ThreadBinding};
pub use validate::{validate_step, StepValidation};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    fn three_step_schema() -> WizardSchema {
        build_wizard_schema("demo",
                            vec![StepSchema::new("Who", vec![FieldSpec::text("name", "name", true)]),
                                 StepSchema::new("How many", vec![FieldSpec::number("seats", "seats", true)]),
                                 StepSchema::new("Confirm", vec![FieldSpec::checkbox("accepted", "Declaration", true)])]).expect("schema builds")
    }

    struct AcceptingBackend;

    #[async_trait]
    impl SubmitHandler for AcceptingBackend {
        async fn submit(&self, _endpoint: &str, payload: Value) -> Result<ServerRecord, SubmitError> {
            Ok(ServerRecord { id: Some(1),
                              body: payload })
        }
    }

    #[test]
    fn advance_is_gated_by_required_fields() {
        let mut engine = WizardEngine::new(three_step_schema());

        // Con `name` vacío el cursor no se mueve y el error queda en su slot
        let err = engine.advance();
        assert!(matches!(err, Err(EngineError::StepNotValid { step_index: 0 })));
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.form().error("name"), Some("name is required"));

        engine.set_field("name", FieldValue::text("Ada")).expect("known field");
        engine.advance().expect("step 0 should validate");
        assert_eq!(engine.cursor(), 1);
        assert!(engine.form().errors().is_empty());
    }

    #[test]
    fn numeric_fields_reject_non_positive_input() {
        let mut engine = WizardEngine::new(three_step_schema());
        engine.set_field("name", FieldValue::text("Ada")).expect("known field");
        engine.advance().expect("step 0 valid");

        engine.set_field("seats", FieldValue::text("abc")).expect("known field");
        let outcome = engine.validate_current_step();
        assert_eq!(outcome.errors.get("seats").map(|s| s.as_str()), Some("seats must be a valid number"));

        engine.set_field("seats", FieldValue::text("12")).expect("known field");
        assert!(engine.validate_current_step().is_valid());
    }

    #[test]
    fn full_run_emits_completion_event() {
        let mut engine = WizardEngine::new(three_step_schema());
        engine.set_field("name", FieldValue::text("Ada")).expect("known field");
        engine.advance().expect("step 0");
        engine.set_field("seats", FieldValue::text("12")).expect("known field");
        engine.advance().expect("step 1");
        engine.set_field("accepted", FieldValue::Bool(true)).expect("known field");

        let record = tokio_test::block_on(engine.submit(&AcceptingBackend)).expect("terminal submit");
        assert_eq!(record.id, Some(1));
        assert_eq!(record.body.get("name"), Some(&json!("Ada")));
        assert!(engine.is_submitted());
        assert!(engine.session_fingerprint().is_some());
        // El formulario vuelve a defaults tras el cierre
        assert_eq!(engine.form().text("name"), "");
    }
}
