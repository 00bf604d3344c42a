//! Estado navegacional reconstruido (WizardInstance) por replay de eventos.
//!
//! El repositorio aplica un replay lineal: consume eventos en orden y
//! actualiza cursor, slots por paso y flags de sesión. No almacena valores de
//! formulario (eso vive en `FormState`, junto al motor).
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::event::{WizardEvent, WizardEventKind};
use crate::schema::WizardSchema;

/// Estado de un paso en la instancia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Nunca validado.
    Pending,
    /// La última validación falló.
    Invalid,
    /// La última validación pasó.
    Valid,
    /// El envío de este paso fue aceptado por el endpoint.
    Submitted,
}

#[derive(Debug, Clone)]
pub struct StepSlot {
    pub step_index: usize,
    pub status: StepStatus,
    pub validation_attempts: u32,
    pub submission_attempts: u32,
    pub submitted_at: Option<DateTime<Utc>>,
}

pub struct WizardInstance {
    pub id: Uuid,
    pub cursor: usize,
    pub steps: Vec<StepSlot>,
    pub submitted: bool,
    /// Paso con un envío despachado y aún sin resultado. Bloquea un segundo
    /// envío concurrente para la misma sesión.
    pub in_flight: Option<usize>,
}

/// Trait para reconstruir (`replay`) el estado de una sesión a partir de
/// eventos.
pub trait SessionRepository {
    fn load(&self, session_id: Uuid, events: &[WizardEvent], schema: &WizardSchema) -> WizardInstance;
}

pub struct InMemorySessionRepository;

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, session_id: Uuid, events: &[WizardEvent], schema: &WizardSchema) -> WizardInstance {
        let mut steps: Vec<StepSlot> = (0..schema.len()).map(|i| StepSlot { step_index: i,
                                                                            status: StepStatus::Pending,
                                                                            validation_attempts: 0,
                                                                            submission_attempts: 0,
                                                                            submitted_at: None })
                                                        .collect();
        let mut cursor = 0usize;
        let mut submitted = false;
        let mut in_flight = None;

        for ev in events {
            match &ev.kind {
                WizardEventKind::WizardInitialized { .. } => {}
                WizardEventKind::StepValidated { step_index, invalid_fields } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.validation_attempts += 1;
                        if slot.status != StepStatus::Submitted {
                            slot.status = if invalid_fields.is_empty() { StepStatus::Valid } else { StepStatus::Invalid };
                        }
                    }
                }
                WizardEventKind::StepAdvanced { to, .. } | WizardEventKind::StepRetreated { to, .. } => {
                    cursor = *to;
                }
                WizardEventKind::SubmissionStarted { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.submission_attempts += 1;
                    }
                    in_flight = Some(*step_index);
                }
                WizardEventKind::SubmissionSucceeded { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Submitted;
                        slot.submitted_at = Some(ev.ts);
                    }
                    in_flight = None;
                }
                WizardEventKind::SubmissionFailed { .. } => {
                    in_flight = None;
                }
                WizardEventKind::WizardCompleted { .. } => submitted = true,
            }
        }

        let cursor = cursor.min(schema.last_index());
        WizardInstance { id: session_id,
                         cursor,
                         steps,
                         submitted,
                         in_flight }
    }
}
