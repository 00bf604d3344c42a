//! Hashing canónico de payloads y esquemas.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::hash_str;

use serde_json::Value;

/// Hash hex de un `Value` serializado en forma canónica.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}
