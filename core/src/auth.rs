//! Fixed desk accounts.
//!
//! These are stand-ins, not a security boundary: passwords are
//! compared in plain text and there is no identity provider.

use crate::{
    error::{MusterError, MusterResult},
    permission::Role,
    types::UserId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id:       UserId,
    pub username: String,
    pub role:     Role,
    pub name:     String,
}

struct Account {
    username: &'static str,
    password: &'static str,
    id:       &'static str,
    role:     Role,
    name:     &'static str,
}

const ACCOUNTS: [Account; 3] = [
    Account {
        username: "commander", password: "admin123", id: "1",
        role: Role::Commander, name: "Col. Sarah Johnson",
    },
    Account {
        username: "hr", password: "hr123", id: "2",
        role: Role::Hr, name: "Maj. David Chen",
    },
    Account {
        username: "medical", password: "med123", id: "3",
        role: Role::MedicalOfficer, name: "Dr. Emily Rodriguez",
    },
];

/// Check a username (case-insensitive) and password against the fixed accounts.
pub fn authenticate(username: &str, password: &str) -> MusterResult<User> {
    let username = username.trim().to_lowercase();
    ACCOUNTS
        .iter()
        .find(|a| a.username == username && a.password == password)
        .map(|a| User {
            id:       a.id.to_string(),
            username: a.username.to_string(),
            role:     a.role,
            name:     a.name.to_string(),
        })
        .ok_or(MusterError::InvalidCredentials)
}
