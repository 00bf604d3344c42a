//! Puerto de envío hacia los endpoints externos.
//!
//! El motor consume exactamente una capacidad de su entorno: una función de
//! envío `submit(endpoint, payload) -> Result<ServerRecord, SubmitError>`,
//! invocada a lo más una vez por evento de envío. El `ServerRecord` puede
//! aportar valores (p.ej. el id recién creado) que un `ThreadBinding` vuelve
//! a inyectar en el `FormState` para pasos posteriores.
//!
//! Los builders de payload deben ser deterministas respecto al estado: el
//! mismo `FormState` produce el mismo payload (y por tanto el mismo
//! fingerprint), lo que hace verificable el reintento idempotente.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::state::{FieldValue, FormState};

/// Fallos de envío. Siempre reintentables: ninguno es fatal para la sesión.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")] Network(String),
    #[error("server responded {status}: {message}")] Server { status: u16, message: String },
}

/// Registro devuelto por el endpoint tras aceptar un payload.
#[derive(Debug, Clone)]
pub struct ServerRecord {
    pub id: Option<i64>,
    pub body: Value,
}

impl ServerRecord {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}

/// Función de envío inyectada. Una implementación por backend (registro en
/// memoria, cliente HTTP, etc.).
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn submit(&self, endpoint: &str, payload: Value) -> Result<ServerRecord, SubmitError>;
}

pub type PayloadFn = Box<dyn Fn(&FormState) -> Value + Send + Sync>;

/// Vincula un campo del registro del servidor con un slot del `FormState`.
/// Así un id asignado por el servidor (p.ej. `school_id`) queda disponible
/// para los payloads de pasos posteriores como un valor ordinario.
#[derive(Debug, Clone)]
pub struct ThreadBinding {
    pub record_field: String,
    pub form_field: String,
}

impl ThreadBinding {
    pub fn new(record_field: impl Into<String>, form_field: impl Into<String>) -> Self {
        Self { record_field: record_field.into(),
               form_field: form_field.into() }
    }
}

/// Configuración de envío de un paso: endpoint, builder de payload y
/// bindings de vuelta hacia el estado.
pub struct StepSubmission {
    pub endpoint: String,
    pub build: PayloadFn,
    pub thread: Vec<ThreadBinding>,
}

impl StepSubmission {
    pub fn new(endpoint: impl Into<String>, build: impl Fn(&FormState) -> Value + Send + Sync + 'static) -> Self {
        Self { endpoint: endpoint.into(),
               build: Box::new(build),
               thread: Vec::new() }
    }

    pub fn threading(mut self, record_field: impl Into<String>, form_field: impl Into<String>) -> Self {
        self.thread.push(ThreadBinding::new(record_field, form_field));
        self
    }

    /// Copia al estado los campos del registro declarados en los bindings.
    /// Los valores no-string se almacenan en su forma textual (los payloads
    /// siguientes los re-parsean al codificar).
    pub(crate) fn apply_record(&self, record: &ServerRecord, state: &mut FormState) {
        for binding in &self.thread {
            let Some(value) = record.field(&binding.record_field) else { continue };
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            state.put(&binding.form_field, FieldValue::Text(text));
        }
    }
}

impl fmt::Debug for StepSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSubmission")
         .field("endpoint", &self.endpoint)
         .field("thread", &self.thread)
         .finish_non_exhaustive()
    }
}

/// Mapa paso -> envío. Un wizard de envío único configura sólo el paso
/// terminal; la variante incremental configura cada paso.
#[derive(Debug, Default)]
pub struct SubmitPlan {
    per_step: HashMap<usize, StepSubmission>,
}

impl SubmitPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_step(mut self, step_index: usize, submission: StepSubmission) -> Self {
        self.per_step.insert(step_index, submission);
        self
    }

    pub fn step(&self, step_index: usize) -> Option<&StepSubmission> {
        self.per_step.get(&step_index)
    }

    pub fn is_empty(&self) -> bool {
        self.per_step.is_empty()
    }
}
