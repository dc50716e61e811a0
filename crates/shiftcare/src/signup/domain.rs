use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Audience segment a sign-up belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Professional,
    Clinic,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Professional, Role::Clinic];

    /// Value sent on the wire and used as the radio input value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Professional => "professional",
            Role::Clinic => "clinic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Professional => "Medical Professional",
            Role::Clinic => "Clinic / Hospital",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "professional" => Ok(Role::Professional),
            "clinic" => Ok(Role::Clinic),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// Raw values held by the sign-up form until they are submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl SignupForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Some(role.as_str().to_string()),
        }
    }

    /// Clear every field, leaving an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.role.is_none()
    }

    /// Required-field checks applied before a submission may start.
    ///
    /// Surrounding whitespace only counts for the checks; the name and email
    /// are sent exactly as entered.
    pub fn validate(&self) -> Result<SignupFields, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField { field: "email" });
        }
        if !looks_like_email(email) {
            return Err(ValidationError::MalformedEmail);
        }

        let role = match self.role.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingField { field: "role" }),
            Some(raw) => raw.parse::<Role>()?,
        };

        Ok(SignupFields {
            name: self.name.clone(),
            email: self.email.clone(),
            role,
        })
    }
}

// Same bar as an `<input type="email">`: one '@' with something on each side.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validated copy of the form, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SignupFields {
    /// Multipart field-value encoding expected by the relay.
    pub fn to_multipart(&self) -> reqwest::multipart::Form {
        reqwest::multipart::Form::new()
            .text("name", self.name.clone())
            .text("email", self.email.clone())
            .text("role", self.role.as_str())
    }
}

/// A form that may not be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("email must look like name@domain")]
    MalformedEmail,
    #[error("role '{0}' is not one of professional, clinic")]
    UnknownRole(String),
}
