use thiserror::Error;

use crate::Scale;

/// Failure of a single conversion attempt. None of them is fatal to a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Error: '{0}' no es un número válido.")]
    InvalidInput(String),

    #[error(
        "Error: {} {} es físicamente imposible. La temperatura más baja posible es el cero absoluto.",
        display_value(.value),
        .scale
    )]
    ImpossibleTemperature { value: f64, scale: Scale },

    #[error("Opción no válida")]
    InvalidMode(u32),
}

// Plain decimal with a point between 1e-3 and 1e7 ("-1.0", "-273.16"),
// scientific with a capital E outside ("-1.0E7", "-1.0E-4").
fn display_value(value: &f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("'{0}' no es un número válido")]
    InvalidNumber(String),
    #[error("Operación desconocida")]
    UnknownOperator(String),
    #[error("Error división por cero")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("El nombre debe tener al menos {min} caracteres")]
    NameTooShort { min: usize },
    #[error("El email no es válido")]
    InvalidEmail,
    #[error("La edad debe estar entre {min} y {max}", min = crate::registration::MIN_AGE, max = crate::registration::MAX_AGE)]
    AgeOutOfRange(i64),
}

impl RegistrationError {
    /// Name of the form field the error refers to, as shown to the user.
    pub fn field(&self) -> &'static str {
        match self {
            RegistrationError::NameTooShort { .. } => "nombre",
            RegistrationError::InvalidEmail => "email",
            RegistrationError::AgeOutOfRange(_) => "edad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("Unknown time zone '{0}'")]
    UnknownTimezone(String),
}
