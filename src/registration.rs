use std::fmt;

use crate::RegistrationError;

pub const MIN_NAME_LEN: usize = 3;
pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;

/// A user whose fields have all passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Usuario(nombre={}, correo={}, edad={})",
            self.name, self.email, self.age
        )
    }
}

pub fn validate_name(name: &str) -> Result<&str, RegistrationError> {
    if name.chars().count() < MIN_NAME_LEN {
        Err(RegistrationError::NameTooShort { min: MIN_NAME_LEN })
    } else {
        Ok(name)
    }
}

pub fn validate_email(email: &str) -> Result<&str, RegistrationError> {
    if email.contains('@') && email.contains('.') {
        Ok(email)
    } else {
        Err(RegistrationError::InvalidEmail)
    }
}

pub fn validate_age(age: i64) -> Result<i64, RegistrationError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(RegistrationError::AgeOutOfRange(age))
    }
}

/// Age typed by the user; anything unparsable counts as -1 and fails validation.
pub fn parse_age(s: &str) -> i64 {
    s.trim().parse().unwrap_or(-1)
}

/// Line shown once the form has been checked.
pub fn format_registration(result: &Result<User, RegistrationError>) -> String {
    match result {
        Ok(user) => format!("Usuario creado: {user}"),
        Err(err) => format!("Error en {}: {err}", err.field()),
    }
}

/// Validate name, email and age in that order, stopping at the first failure.
pub fn register(name: &str, email: &str, age: i64) -> Result<User, RegistrationError> {
    let name = validate_name(name)?;
    let email = validate_email(email)?;
    let age = validate_age(age)?;
    Ok(User {
        name: name.to_string(),
        email: email.to_string(),
        age,
    })
}
