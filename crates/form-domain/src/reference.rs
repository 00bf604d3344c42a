//! Código de referencia estable derivado del contenido del registro.

use sha2::{Digest, Sha256};

/// Calcula un código hex a partir de las partes identitarias de un registro.
/// El mismo contenido produce siempre el mismo código, lo que lo hace apto
/// como token de confirmación sin estado adicional.
pub fn reference_code(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0u8]); // separador, evita colisiones por concatenación
    }
    format!("{:x}", hasher.finalize())
}
