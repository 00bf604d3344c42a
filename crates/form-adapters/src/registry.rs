//! Registro en memoria que simula el backend REST.
//!
//! Cada endpoint es una colección append-only: un envío aceptado recibe un id
//! secuencial y queda consultable, igual que los controladores `create` del
//! backend real devuelven la fila creada con su id.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use form_core::{ServerRecord, SubmitError, SubmitHandler};

#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: i64,
    pub body: Value,
}

#[derive(Default)]
struct RegistryInner {
    next_id: i64,
    records: HashMap<String, Vec<StoredRecord>>,
}

#[derive(Default)]
pub struct InMemoryRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, endpoint: &str) -> Vec<StoredRecord> {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        inner.records.get(endpoint).cloned().unwrap_or_default()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        inner.records.get(endpoint).map(|r| r.len()).unwrap_or(0)
    }

    pub fn find(&self, endpoint: &str, id: i64) -> Option<StoredRecord> {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        inner.records.get(endpoint).and_then(|records| records.iter().find(|r| r.id == id).cloned())
    }

    /// Endpoints con al menos un registro, en orden alfabético.
    pub fn endpoints(&self) -> Vec<String> {
        let inner = self.inner.lock().expect("registry mutex poisoned");
        let mut names: Vec<String> = inner.records.keys().cloned().collect();
        names.sort();
        names
    }
}

#[async_trait]
impl SubmitHandler for InMemoryRegistry {
    async fn submit(&self, endpoint: &str, payload: Value) -> Result<ServerRecord, SubmitError> {
        if !payload.is_object() {
            return Err(SubmitError::Server { status: 400,
                                             message: format!("{} expects a JSON object", endpoint) });
        }
        let mut inner = self.inner.lock().expect("registry mutex poisoned");
        inner.next_id += 1;
        let id = inner.next_id;

        let mut body = payload;
        if let Value::Object(map) = &mut body {
            map.insert("id".to_string(), Value::from(id));
        }
        inner.records.entry(endpoint.to_string()).or_default().push(StoredRecord { id, body: body.clone() });
        log::info!("registry: created record {} at {}", id, endpoint);
        Ok(ServerRecord { id: Some(id), body })
    }
}
