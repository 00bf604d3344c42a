// school.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{is_valid_mobile, is_valid_pincode, require_non_blank};
use crate::reference::reference_code;
use crate::DomainError;

/// Registro de escuela participante. Toda comunicación del evento pasa por el
/// docente coordinador declarado aquí.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRegistration {
    #[serde(skip_deserializing, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub coordinator_teacher_name: String,
    pub coordinator_teacher_mobile: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub affiliation_number: String,
}

impl SchoolRegistration {
    /// Crea un registro validado.
    ///
    /// # Errores
    /// `DomainError::ValidationError` con campos en blanco, móvil que no sea
    /// de 10 dígitos o pincode que no sea de 6 dígitos.
    #[allow(clippy::too_many_arguments)]
    pub fn new(coordinator_teacher_name: impl Into<String>,
               coordinator_teacher_mobile: impl Into<String>,
               name: impl Into<String>,
               address: impl Into<String>,
               city: impl Into<String>,
               pincode: impl Into<String>,
               affiliation_number: impl Into<String>)
               -> Result<Self, DomainError> {
        let record = Self { id: Uuid::new_v4(),
                            coordinator_teacher_name: coordinator_teacher_name.into(),
                            coordinator_teacher_mobile: coordinator_teacher_mobile.into(),
                            name: name.into(),
                            address: address.into(),
                            city: city.into(),
                            pincode: pincode.into(),
                            affiliation_number: affiliation_number.into() };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank(&self.coordinator_teacher_name, "coordinator teacher name")?;
        require_non_blank(&self.name, "school name")?;
        require_non_blank(&self.address, "school address")?;
        require_non_blank(&self.city, "school city")?;
        require_non_blank(&self.affiliation_number, "affiliation number")?;
        if !is_valid_mobile(&self.coordinator_teacher_mobile) {
            return Err(DomainError::ValidationError(format!("invalid coordinator mobile: '{}'", self.coordinator_teacher_mobile)));
        }
        if !is_valid_pincode(&self.pincode) {
            return Err(DomainError::ValidationError(format!("invalid pincode: '{}'", self.pincode)));
        }
        Ok(())
    }

    /// Token de confirmación estable para la escuela.
    pub fn reference_code(&self) -> String {
        reference_code(&[&self.name, &self.pincode, &self.affiliation_number])
    }
}
