//! Esquemas declarativos de los wizards de la plataforma.
//!
//! Cada wizard exporta su `WizardSchema` y su `SubmitPlan`. Agregar o quitar
//! un campo es un cambio en la tabla, no en control-flow.

pub mod exhibition;
pub mod feedback;
pub mod science_day;
pub mod visitor;

pub use exhibition::{exhibition_plan, exhibition_wizard};
pub use feedback::{feedback_plan, feedback_wizard};
pub use science_day::{science_day_plan, science_day_wizard};
pub use visitor::{visitor_plan, visitor_wizard};
