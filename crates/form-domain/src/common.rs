//! Enumeraciones y validadores compartidos entre registros.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parsea la etiqueta tal como viaja en los formularios ("Male"/"Female"/
    /// "Other").
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(DomainError::ValidationError(format!("unknown gender: '{}'", other))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Curso del participante (8vo a 12vo estándar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassLevel {
    #[serde(rename = "8th Std.")]
    Std8,
    #[serde(rename = "9th Std.")]
    Std9,
    #[serde(rename = "10th Std.")]
    Std10,
    #[serde(rename = "11th Std.")]
    Std11,
    #[serde(rename = "12th Std.")]
    Std12,
}

impl ClassLevel {
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label.trim() {
            "8th Std." => Ok(ClassLevel::Std8),
            "9th Std." => Ok(ClassLevel::Std9),
            "10th Std." => Ok(ClassLevel::Std10),
            "11th Std." => Ok(ClassLevel::Std11),
            "12th Std." => Ok(ClassLevel::Std12),
            other => Err(DomainError::ValidationError(format!("unknown class: '{}'", other))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassLevel::Std8 => "8th Std.",
            ClassLevel::Std9 => "9th Std.",
            ClassLevel::Std10 => "10th Std.",
            ClassLevel::Std11 => "11th Std.",
            ClassLevel::Std12 => "12th Std.",
        }
    }
}

/// Móvil de 10 dígitos, sin separadores.
pub fn is_valid_mobile(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == 10 && raw.chars().all(|c| c.is_ascii_digit())
}

/// Forma mínima de correo: algo@algo.algo, sin espacios.
pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else { return false };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Pincode postal de 6 dígitos.
pub fn is_valid_pincode(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == 6 && raw.chars().all(|c| c.is_ascii_digit())
}

pub(crate) fn require_non_blank(value: &str, what: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::ValidationError(format!("{} must not be blank", what)));
    }
    Ok(())
}
