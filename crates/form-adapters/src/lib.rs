//! form-adapters: Capa de adaptación Dominio ↔ Core
//!
//! Este crate provee:
//! - Los esquemas declarativos de los wizards de la plataforma (exhibición,
//!   visitas, día de la ciencia, feedback) con sus planes de envío.
//! - `FormDecoder` para materializar payloads JSON en registros de dominio
//!   validados.
//! - `InMemoryRegistry`, implementación del puerto `SubmitHandler` que
//!   simula los controladores REST (create + id secuencial).
//!
//! Nota: el core sólo conoce `FormState` y payloads JSON neutrales. La
//! semántica de cada formulario (ids de campo, endpoints, inyección de ids
//! del servidor) vive aquí.

pub mod decode;
pub mod options;
pub mod registry;
pub mod wizards;

pub use decode::FormDecoder;
pub use registry::{InMemoryRegistry, StoredRecord};
