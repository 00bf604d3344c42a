//! Estado vivo del formulario.
//!
//! El `FormState` es un objeto explícito, propiedad del motor y pasado por
//! referencia en cada operación; nunca contexto mutable ambiente. Eso permite
//! testear el motor sin capa de renderizado.

pub mod form;
pub mod value;

pub use form::FormState;
pub use value::FieldValue;
