//! User records and creation input
//!
//! `NewUser` can only be built from a request carrying both fields,
//! so the store never sees an insert without a name or email.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// User row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// POST /users body. Fields are optional so a missing one
/// surfaces as a validation error rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated input for an insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Both fields must be present and non-empty.
    ///
    /// # Example
    /// ```
    /// use dockyard_server::models::NewUser;
    ///
    /// assert!(NewUser::new("Alice", "alice@example.com").is_ok());
    /// assert!(NewUser::new("", "alice@example.com").is_err());
    /// ```
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingUserFields);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = ValidationError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        match (req.name, req.email) {
            (Some(name), Some(email)) => Self::new(&name, &email),
            _ => Err(ValidationError::MissingUserFields),
        }
    }
}
