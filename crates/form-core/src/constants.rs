//! Constantes del motor core.
//!
//! Valores estáticos que participan en el cálculo de fingerprints. Un cambio
//! de versión del motor invalida determinísticamente los fingerprints de
//! sesión aunque el esquema y los datos no cambien.

/// Versión lógica del motor de wizards. Mantener estable mientras no haya
/// cambios incompatibles en el formato de payloads o eventos.
pub const ENGINE_VERSION: &str = "W1.0";
