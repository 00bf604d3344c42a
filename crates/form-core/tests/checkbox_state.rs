//! Grupos de checkboxes: membresía alternada y orden de primera inserción.

use form_core::{build_wizard_schema, FieldSpec, FieldValue, SelectOption, StepSchema, WizardEngine, WizardSchema};

fn schema() -> WizardSchema {
    let campuses = vec![SelectOption::new("IPR", "IPR Main Campus"),
                        SelectOption::new("FCIPT", "FCIPT"),
                        SelectOption::new("ITER", "ITER-India")];
    build_wizard_schema("campus-picker",
                        vec![StepSchema::new("Campuses",
                                             vec![FieldSpec::checkbox_group("campus", "Campus", true, campuses),
                                                  FieldSpec::checkbox("declaration", "Declaration", true)])]).expect("schema builds")
}

#[test]
fn toggling_twice_restores_membership_and_order() {
    let mut engine = WizardEngine::new(schema());

    engine.set_field("campus", FieldValue::text("IPR")).expect("known field");
    engine.set_field("campus", FieldValue::text("FCIPT")).expect("known field");
    engine.set_field("campus", FieldValue::text("ITER")).expect("known field");
    assert_eq!(engine.form().value("campus").map(|v| v.as_many().to_vec()),
               Some(vec!["IPR".to_string(), "FCIPT".to_string(), "ITER".to_string()]));

    // Quitar y volver a insertar un miembro intermedio
    engine.set_field("campus", FieldValue::text("FCIPT")).expect("known field");
    assert_eq!(engine.form().value("campus").map(|v| v.as_many().to_vec()),
               Some(vec!["IPR".to_string(), "ITER".to_string()]),
               "remaining members keep their first-insertion order");

    engine.set_field("campus", FieldValue::text("FCIPT")).expect("known field");
    assert_eq!(engine.form().value("campus").map(|v| v.as_many().to_vec()),
               Some(vec!["IPR".to_string(), "ITER".to_string(), "FCIPT".to_string()]));
}

#[test]
fn empty_group_fails_required_validation() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("declaration", FieldValue::Bool(true)).expect("known field");

    let outcome = engine.validate_current_step();
    assert_eq!(outcome.errors.get("campus").map(|s| s.as_str()), Some("Campus is required"));

    engine.set_field("campus", FieldValue::text("IPR")).expect("known field");
    assert!(engine.validate_current_step().is_valid());
}

#[test]
fn unchecked_declaration_counts_as_blank() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("campus", FieldValue::text("IPR")).expect("known field");

    let outcome = engine.validate_current_step();
    assert_eq!(outcome.errors.get("declaration").map(|s| s.as_str()), Some("Declaration is required"));

    engine.set_field("declaration", FieldValue::Bool(true)).expect("known field");
    assert!(engine.validate_current_step().is_valid());
}

#[test]
fn a_whole_list_replaces_the_membership() {
    let mut engine = WizardEngine::new(schema());
    engine.set_field("campus", FieldValue::Many(vec!["FCIPT".into(), "IPR".into()])).expect("known field");
    assert_eq!(engine.form().value("campus").map(|v| v.as_many().to_vec()),
               Some(vec!["FCIPT".to_string(), "IPR".to_string()]));
}
