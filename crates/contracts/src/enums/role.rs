use serde::{Deserialize, Serialize};

/// User roles as reported by the accounts API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Gp,
    Receptionist,
    PracticeManager,
    /// Any role string the client does not recognize, including none at all
    Unknown,
}

impl Role {
    /// Get the server-side code for the role
    pub fn code(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Gp => "GP",
            Role::Receptionist => "RECEPTIONIST",
            Role::PracticeManager => "PRACTICE_MANAGER",
            Role::Unknown => "",
        }
    }

    /// Get a human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Gp => "GP",
            Role::Receptionist => "Receptionist",
            Role::PracticeManager => "Practice manager",
            Role::Unknown => "Unknown",
        }
    }

    /// Parse a role string sent by the server. Matching is case-insensitive;
    /// unrecognized values map to `Unknown`.
    pub fn parse(code: &str) -> Self {
        match code.to_ascii_uppercase().as_str() {
            "PATIENT" => Role::Patient,
            "GP" => Role::Gp,
            "RECEPTIONIST" => Role::Receptionist,
            "PRACTICE_MANAGER" => Role::PracticeManager,
            _ => Role::Unknown,
        }
    }

    /// Get all known roles
    pub fn all() -> Vec<Role> {
        vec![
            Role::Patient,
            Role::Gp,
            Role::Receptionist,
            Role::PracticeManager,
        ]
    }
}
