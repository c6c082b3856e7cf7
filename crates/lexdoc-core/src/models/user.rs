use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a user in the case workflow. The backend serializes roles in
/// uppercase ("CLIENT", "LAWYER", "ADMIN").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Client,
    Lawyer,
    Admin,
}

impl Role {
    /// Only clients and lawyers may stage files for upload.
    pub fn can_upload(&self) -> bool {
        matches!(self, Role::Client | Role::Lawyer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "CLIENT"),
            Role::Lawyer => write!(f, "LAWYER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CLIENT" => Ok(Role::Client),
            "LAWYER" => Ok(Role::Lawyer),
            "ADMIN" => Ok(Role::Admin),
            other => Err(format!(
                "Invalid role: {} (expected CLIENT, LAWYER, or ADMIN)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_upload_permission() {
        assert!(Role::Client.can_upload());
        assert!(Role::Lawyer.can_upload());
        assert!(!Role::Admin.can_upload());
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("client".parse::<Role>().unwrap(), Role::Client);
        assert_eq!("LAWYER".parse::<Role>().unwrap(), Role::Lawyer);
        assert!("judge".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"CLIENT\"");
    }
}
