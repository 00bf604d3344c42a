//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! El backend por defecto es el registro en memoria; la URL del API sólo se
//! usa cuando un despliegue apunta los wizards contra el backend REST real.
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones: logging, etc.).
pub struct AppConfig {
    /// Datos del evento en curso.
    pub event: EventConfig,
    /// Configuración del backend de envíos.
    pub submissions: SubmissionConfig,
}

pub struct EventConfig {
    /// Nombre corto del evento (aparece en logs y trazas).
    pub name: String,
}

pub struct SubmissionConfig {
    /// Base del API REST (p.ej. http://localhost:3000). Vacío = registro en
    /// memoria.
    pub api_base: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    let name = env::var("FORMFLOW_EVENT").unwrap_or_else(|_| "NSD2026".to_string());
    let api_base = env::var("FORMFLOW_API_BASE").unwrap_or_default();
    AppConfig { event: EventConfig { name },
                submissions: SubmissionConfig { api_base } }
});
