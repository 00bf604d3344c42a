//! Esquema declarativo del wizard.
//!
//! Un wizard se define como una tabla de datos, no como control-flow: agregar
//! o quitar un campo o un paso es un cambio de datos. Este módulo define:
//! - `FieldSpec`: descripción declarativa de un input (label, tipo, required,
//!   opciones).
//! - `StepSchema`: una página del formulario con su propio alcance de
//!   validación.
//! - `WizardSchema`: la secuencia ordenada de pasos, con hash canónico de
//!   definición.

pub mod field;
pub mod step;

pub use field::{FieldSpec, FieldType, SelectOption};
pub use step::{build_wizard_schema, StepSchema, WizardSchema};
