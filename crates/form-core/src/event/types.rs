//! Tipos de evento del wizard y estructura `WizardEvent`.
//!
//! Rol en la sesión:
//! - Cada operación del `WizardEngine` emite eventos a un `EventStore`
//!   append-only.
//! - Estos eventos permiten reconstruir el estado navegacional
//!   (`WizardInstance`) por replay, sin estructuras mutables aparte.
//! - El enum `WizardEventKind` define el contrato observable del motor.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Emisión inicial de una sesión: fija `schema_hash` y cantidad de pasos.
    /// Invariante: debe ser el primer evento de un `session_id`.
    WizardInitialized { schema_hash: String, step_count: usize },
    /// Resultado de validar el paso actual. `invalid_fields` vacío = válido.
    StepValidated { step_index: usize, invalid_fields: Vec<String> },
    /// El cursor avanzó tras una validación exitosa.
    StepAdvanced { from: usize, to: usize },
    /// El cursor retrocedió. Sin validación; los valores quedan residentes.
    StepRetreated { from: usize, to: usize },
    /// Se despachó un payload hacia un endpoint. Mientras no llegue su
    /// terminal (`Succeeded`/`Failed`) la sesión tiene un envío en vuelo.
    SubmissionStarted {
        step_index: usize,
        endpoint: String,
        payload_fingerprint: String,
    },
    /// El endpoint aceptó el payload y devolvió un registro (id opcional).
    SubmissionSucceeded {
        step_index: usize,
        endpoint: String,
        record_id: Option<i64>,
        payload_fingerprint: String,
    },
    /// El envío falló. Reintentable: el estado del formulario no se toca.
    SubmissionFailed {
        step_index: usize,
        endpoint: String,
        payload_fingerprint: String,
        error: String,
    },
    /// Evento de cierre con fingerprint agregado de la sesión (hash de los
    /// fingerprints de envíos exitosos en orden).
    WizardCompleted { session_fingerprint: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub session_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprints)
}
