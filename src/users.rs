//! In-memory user registry
//!
//! Accounts behind the register and login commands. The list is capped at
//! five users and lives only for the process; passwords are held as
//! entered, with no hashing or field validation.

use log::info;

use crate::{IvnError, Result};

/// Maximum number of registered users.
pub const MAX_USERS: usize = 5;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            age,
        }
    }
}

/// Process-wide user list.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Fails once the registry holds `MAX_USERS` entries,
    /// leaving the list unchanged.
    pub fn register(&mut self, user: User) -> Result<()> {
        if self.users.len() >= MAX_USERS {
            return Err(IvnError::Registry(format!(
                "user limit of {} reached",
                MAX_USERS
            )));
        }

        info!("Registered user {}", user.email);
        self.users.push(user);
        Ok(())
    }

    /// Exact email + password match.
    pub fn login(&self, email: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.email == email && user.password == password)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
