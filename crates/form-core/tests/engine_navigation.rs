//! Navegación del cursor: gating por validación, retroceso libre y replay.

use form_core::{build_wizard_schema, EngineError, FieldSpec, FieldValue, StepSchema, WizardEngine};

fn schema() -> form_core::WizardSchema {
    build_wizard_schema("navigation",
                        vec![StepSchema::new("One", vec![FieldSpec::text("name", "name", true)]),
                             StepSchema::new("Two", vec![FieldSpec::text("city", "City", false)]),
                             StepSchema::new("Three", vec![FieldSpec::text("notes", "Notes", false)])]).expect("schema builds")
}

#[test]
fn advance_never_moves_on_validation_failure() {
    let mut engine = WizardEngine::new(schema());

    for _ in 0..3 {
        assert!(engine.advance().is_err());
        assert_eq!(engine.cursor(), 0, "cursor must not move while step 0 is invalid");
    }
}

#[test]
fn advance_increments_by_exactly_one() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("name", FieldValue::text("Ada")).expect("known field");

    engine.advance().expect("step 0 valid");
    assert_eq!(engine.cursor(), 1);
    engine.advance().expect("step 1 has no required fields");
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn advance_on_final_step_is_rejected() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("name", FieldValue::text("Ada")).expect("known field");
    engine.advance().expect("step 0");
    engine.advance().expect("step 1");

    assert!(matches!(engine.advance(), Err(EngineError::AlreadyOnFinalStep)));
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn retreat_is_an_error_on_first_step() {
    let mut engine = WizardEngine::new(schema());
    assert!(matches!(engine.retreat(), Err(EngineError::AlreadyOnFirstStep)));
    assert_eq!(engine.cursor(), 0);
}

#[test]
fn retreat_ignores_validation_and_keeps_values() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("name", FieldValue::text("Ada")).expect("known field");
    engine.advance().expect("step 0");

    // Valor dejado en un paso posterior, luego abandonado vía retreat
    engine.set_field("city", FieldValue::text("Gandhinagar")).expect("known field");
    engine.retreat().expect("not on first step");
    assert_eq!(engine.cursor(), 0);
    assert_eq!(engine.form().text("city"), "Gandhinagar");

    // Al volver a avanzar el valor sigue residente
    engine.advance().expect("step 0 still valid");
    assert_eq!(engine.form().text("city"), "Gandhinagar");
}

#[test]
fn earlier_steps_are_not_revalidated_when_revisited() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("name", FieldValue::text("Ada")).expect("known field");
    engine.advance().expect("step 0");

    // Vaciar el campo del paso 0 y retroceder: el retroceso no valida
    engine.set_field("name", FieldValue::text("")).expect("known field");
    engine.retreat().expect("free retreat");
    assert_eq!(engine.cursor(), 0);
    assert!(engine.form().errors().is_empty(), "retreat must not write validation errors");
}

#[test]
fn replayed_cursor_matches_live_cursor() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("name", FieldValue::text("Ada")).expect("known field");
    engine.advance().expect("step 0");
    engine.advance().expect("step 1");
    engine.retreat().expect("step 2 -> 1");

    let instance = engine.instance();
    assert_eq!(instance.cursor, engine.cursor());
    assert_eq!(instance.cursor, 1);
    assert!(!instance.submitted);
}
