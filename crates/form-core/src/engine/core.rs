//! Core WizardEngine implementation

use serde_json::json;
use uuid::Uuid;

use crate::errors::EngineError;
use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
use crate::hashing::hash_value;
use crate::schema::{FieldType, StepSchema, WizardSchema};
use crate::session::{InMemorySessionRepository, SessionRepository, WizardInstance};
use crate::state::{FieldValue, FormState};
use crate::submit::{ServerRecord, SubmitHandler, SubmitPlan};
use crate::validate::{parses_as_positive_number, validate_step, StepValidation};

/// Motor de wizards multi-paso.
///
/// Gobierna la secuencia de pasos, el gating por validación y la entrega al
/// puerto de envío. El cursor y los flags de sesión se derivan por replay de
/// eventos (`SessionRepository`); los valores del formulario viven junto al
/// motor en un `FormState` explícito.
pub struct WizardEngine<E, R>
    where E: EventStore,
          R: SessionRepository
{
    event_store: E,
    repository: R,
    schema: WizardSchema,
    plan: SubmitPlan,
    state: FormState,
    session_id: Option<Uuid>,
}

impl WizardEngine<InMemoryEventStore, InMemorySessionRepository> {
    /// Crea un motor con stores en memoria.
    pub fn new(schema: WizardSchema) -> Self {
        Self::new_with_stores(schema, InMemoryEventStore::default(), InMemorySessionRepository::new())
    }
}

impl<E, R> WizardEngine<E, R>
    where E: EventStore,
          R: SessionRepository
{
    /// Crea un motor con los stores proporcionados.
    pub fn new_with_stores(schema: WizardSchema, event_store: E, repository: R) -> Self {
        debug_assert!(!schema.is_empty(), "wizard schema must declare at least one step");
        let state = FormState::new_for(&schema);
        Self { event_store,
               repository,
               schema,
               plan: SubmitPlan::new(),
               state,
               session_id: None }
    }

    /// Configura el plan de envíos (único o por paso).
    pub fn with_plan(mut self, plan: SubmitPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn schema(&self) -> &WizardSchema {
        &self.schema
    }

    pub fn form(&self) -> &FormState {
        &self.state
    }

    pub fn plan(&self) -> &SubmitPlan {
        &self.plan
    }

    /// Define/genera un `session_id` si no existe aún y lo retorna.
    pub fn ensure_session_id(&mut self) -> Uuid {
        if self.session_id.is_none() {
            self.session_id = Some(Uuid::new_v4());
        }
        self.session_id.unwrap_or_default()
    }

    /// Fija explícitamente un `session_id`.
    pub fn set_session_id(&mut self, session_id: Uuid) {
        self.session_id = Some(session_id);
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Garantiza el evento `WizardInitialized` y retorna los eventos actuales
    /// de la sesión (incluyéndolo si acaba de agregarse).
    fn load_or_init(&mut self) -> (Uuid, Vec<WizardEvent>) {
        let session_id = self.ensure_session_id();
        let mut events = self.event_store.list(session_id);
        let has_init = events.iter().any(|e| matches!(e.kind, WizardEventKind::WizardInitialized { .. }));
        if !has_init {
            let ev = self.event_store
                         .append_kind(session_id,
                                      WizardEventKind::WizardInitialized { schema_hash: self.schema.schema_hash.clone(),
                                                                           step_count: self.schema.len() });
            events.push(ev);
        }
        (session_id, events)
    }

    /// Estado navegacional reconstruido por replay. Sin sesión iniciada
    /// equivale a una instancia fresca (cursor 0, nada enviado).
    pub fn instance(&self) -> WizardInstance {
        let session_id = self.session_id.unwrap_or(Uuid::nil());
        let events = self.session_id.map(|sid| self.event_store.list(sid)).unwrap_or_default();
        self.repository.load(session_id, &events, &self.schema)
    }

    pub fn cursor(&self) -> usize {
        self.instance().cursor
    }

    pub fn is_submitted(&self) -> bool {
        self.instance().submitted
    }

    /// Paso en el cursor. Sin efectos secundarios.
    pub fn current_step(&self) -> &StepSchema {
        let idx = self.cursor().min(self.schema.last_index());
        &self.schema.steps[idx]
    }

    /// Aplica la normalización propia del tipo del campo y registra o limpia
    /// su slot de error. Nunca rechaza input: un valor numérico no parseable
    /// queda residente con su error, y el usuario puede seguir tecleando.
    pub fn set_field(&mut self, id: &str, value: FieldValue) -> Result<(), EngineError> {
        let cursor = self.cursor();
        let spec = self.schema
                       .find_field(id, cursor)
                       .ok_or_else(|| EngineError::UnknownField(id.to_string()))?
                       .clone();

        match spec.field_type {
            FieldType::Checkbox if spec.is_group() => match value {
                // Un string alterna membresía; una lista reemplaza completa.
                FieldValue::Text(member) => self.state.toggle_member(id, &member),
                other => self.state.put(id, other),
            },
            FieldType::Checkbox => {
                let checked = match value {
                    FieldValue::Bool(b) => b,
                    other => !other.is_blank(),
                };
                self.state.put(id, FieldValue::Bool(checked));
            }
            FieldType::Number => {
                let invalid = value.as_text().map(|raw| !raw.trim().is_empty() && !parses_as_positive_number(raw)).unwrap_or(false);
                self.state.put(id, value);
                if invalid {
                    self.state.set_error(id, format!("{} must be a valid number", spec.label));
                    return Ok(());
                }
            }
            _ => self.state.put(id, value),
        }
        self.state.clear_error(id);
        Ok(())
    }

    /// Siembra un valor fuera de esquema, p.ej. un id creado por una sesión
    /// anterior, para que los payload builders lo encuentren igual que si lo
    /// hubiera inyectado un envío de esta sesión.
    pub fn seed_value(&mut self, id: &str, value: FieldValue) {
        self.state.put(id, value);
    }

    /// Valida sólo el paso actual, sincroniza los slots de error del
    /// formulario y registra el resultado como evento.
    pub fn validate_current_step(&mut self) -> StepValidation {
        let (session_id, _events) = self.load_or_init();
        let idx = self.cursor();
        let step = &self.schema.steps[idx];
        let outcome = validate_step(step, &self.state);
        self.state.replace_step_errors(step, &outcome.errors);
        self.event_store.append_kind(session_id,
                                     WizardEventKind::StepValidated { step_index: idx,
                                                                      invalid_fields: outcome.invalid_fields() });
        outcome
    }

    /// Única puerta contra saltarse input requerido: valida y, sólo si el
    /// paso pasa, mueve el cursor exactamente un lugar.
    pub fn advance(&mut self) -> Result<(), EngineError> {
        if self.is_submitted() {
            return Err(EngineError::AlreadySubmitted);
        }
        let idx = self.cursor();
        if idx >= self.schema.last_index() {
            return Err(EngineError::AlreadyOnFinalStep);
        }
        let outcome = self.validate_current_step();
        if !outcome.is_valid() {
            return Err(EngineError::StepNotValid { step_index: idx });
        }
        let (session_id, _events) = self.load_or_init();
        self.event_store.append_kind(session_id, WizardEventKind::StepAdvanced { from: idx, to: idx + 1 });
        Ok(())
    }

    /// Retrocede sin validar. Los valores de pasos posteriores quedan
    /// residentes en el estado.
    pub fn retreat(&mut self) -> Result<(), EngineError> {
        if self.is_submitted() {
            return Err(EngineError::AlreadySubmitted);
        }
        let idx = self.cursor();
        if idx == 0 {
            return Err(EngineError::AlreadyOnFirstStep);
        }
        let (session_id, _events) = self.load_or_init();
        self.event_store.append_kind(session_id, WizardEventKind::StepRetreated { from: idx, to: idx - 1 });
        Ok(())
    }

    /// Envío terminal: sólo desde el último paso. Re-valida, entrega el
    /// payload al handler y, si fue aceptado, cierra la sesión y resetea el
    /// formulario. Un fallo deja el `FormState` intacto para reintentar.
    pub async fn submit(&mut self, handler: &dyn SubmitHandler) -> Result<ServerRecord, EngineError> {
        let instance = self.instance();
        if instance.submitted {
            return Err(EngineError::AlreadySubmitted);
        }
        if instance.in_flight.is_some() {
            return Err(EngineError::SubmissionInFlight);
        }
        if instance.cursor != self.schema.last_index() {
            return Err(EngineError::NotOnFinalStep);
        }
        self.submit_at(instance.cursor, handler, true).await
    }

    /// Variante incremental: envía el payload del paso actual, inyecta de
    /// vuelta los campos del registro (ids asignados por el servidor) y
    /// avanza. En el último paso equivale a `submit`.
    pub async fn submit_step(&mut self, handler: &dyn SubmitHandler) -> Result<ServerRecord, EngineError> {
        let instance = self.instance();
        if instance.submitted {
            return Err(EngineError::AlreadySubmitted);
        }
        if instance.in_flight.is_some() {
            return Err(EngineError::SubmissionInFlight);
        }
        let idx = instance.cursor;
        let terminal = idx == self.schema.last_index();
        if !terminal && self.plan.step(idx).is_none() {
            return Err(EngineError::NoSubmissionForStep(idx));
        }
        self.submit_at(idx, handler, terminal).await
    }

    async fn submit_at(&mut self, idx: usize, handler: &dyn SubmitHandler, terminal: bool) -> Result<ServerRecord, EngineError> {
        let outcome = self.validate_current_step();
        if !outcome.is_valid() {
            return Err(EngineError::StepNotValid { step_index: idx });
        }

        let (endpoint, payload) = match self.plan.step(idx) {
            Some(submission) => (submission.endpoint.clone(), (submission.build)(&self.state)),
            // Sin plan, el paso terminal envía el snapshot completo al
            // endpoint homónimo del wizard.
            None => (self.schema.name.clone(), self.state.snapshot_json()),
        };
        let fingerprint = hash_value(&payload);

        let (session_id, _events) = self.load_or_init();
        self.event_store.append_kind(session_id,
                                     WizardEventKind::SubmissionStarted { step_index: idx,
                                                                          endpoint: endpoint.clone(),
                                                                          payload_fingerprint: fingerprint.clone() });

        match handler.submit(&endpoint, payload).await {
            Ok(record) => {
                log::info!("submission accepted: endpoint={} step={} record_id={:?}", endpoint, idx, record.id);
                self.event_store.append_kind(session_id,
                                             WizardEventKind::SubmissionSucceeded { step_index: idx,
                                                                                    endpoint,
                                                                                    record_id: record.id,
                                                                                    payload_fingerprint: fingerprint });
                if let Some(submission) = self.plan.step(idx) {
                    submission.apply_record(&record, &mut self.state);
                }
                if terminal {
                    self.complete(session_id);
                    self.state.reset(&self.schema);
                } else {
                    self.event_store.append_kind(session_id, WizardEventKind::StepAdvanced { from: idx, to: idx + 1 });
                }
                Ok(record)
            }
            Err(err) => {
                log::warn!("submission failed: endpoint={} step={} error={}", endpoint, idx, err);
                self.event_store.append_kind(session_id,
                                             WizardEventKind::SubmissionFailed { step_index: idx,
                                                                                 endpoint,
                                                                                 payload_fingerprint: fingerprint,
                                                                                 error: err.to_string() });
                Err(EngineError::Submission(err))
            }
        }
    }

    fn complete(&mut self, session_id: Uuid) {
        let events = self.event_store.list(session_id);
        let submission_fps: Vec<String> = events.iter()
                                                .filter_map(|e| match &e.kind {
                                                    WizardEventKind::SubmissionSucceeded { payload_fingerprint, .. } => {
                                                        Some(payload_fingerprint.clone())
                                                    }
                                                    _ => None,
                                                })
                                                .collect();

        let session_fp = hash_value(&json!({
                                        "engine_version": crate::constants::ENGINE_VERSION,
                                        "schema_hash": self.schema.schema_hash,
                                        "submission_fingerprints": submission_fps,
                                    }));

        let _ = self.event_store
                    .append_kind(session_id, WizardEventKind::WizardCompleted { session_fingerprint: session_fp });
    }

    /// Lista eventos de la sesión actual.
    pub fn events(&self) -> Vec<WizardEvent> {
        self.session_id.map(|sid| self.event_store.list(sid)).unwrap_or_default()
    }

    /// Variante compacta de eventos para asserts y trazas.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                WizardEventKind::WizardInitialized { .. } => "I",
                WizardEventKind::StepValidated { .. } => "V",
                WizardEventKind::StepAdvanced { .. } => "A",
                WizardEventKind::StepRetreated { .. } => "R",
                WizardEventKind::SubmissionStarted { .. } => "S",
                WizardEventKind::SubmissionSucceeded { .. } => "F",
                WizardEventKind::SubmissionFailed { .. } => "X",
                WizardEventKind::WizardCompleted { .. } => "C",
            })
            .collect()
    }

    /// Fingerprint de la sesión si ya completó.
    pub fn session_fingerprint(&self) -> Option<String> {
        self.events().iter().rev().find_map(|e| match &e.kind {
                                      WizardEventKind::WizardCompleted { session_fingerprint } => Some(session_fingerprint.clone()),
                                      _ => None,
                                  })
    }
}
