// src/engine/outcome.rs
use std::fmt;
use serde::{Serialize, Deserialize};

/// Message attached to outcomes refused by a target's username policy
pub const USERNAME_NOT_ALLOWED: &str = "User Name Not Allowed!";

/// Terminal state of one target's probe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProbeStatus {
    Found,
    NotFound,
    Rejected,
    Failed,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Found => write!(f, "Found"),
            ProbeStatus::NotFound => write!(f, "Not Found"),
            ProbeStatus::Rejected => write!(f, "Rejected"),
            ProbeStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Classified result for one target. Created once, never changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProbeOutcome {
    pub target_name: String,
    pub status: ProbeStatus,
    /// Final URL when found, templated URL when not found,
    /// policy message when rejected, error text when failed
    pub detail: String,
}

impl ProbeOutcome {
    pub fn found(target_name: impl Into<String>, final_url: impl Into<String>) -> Self {
        Self::new(target_name, ProbeStatus::Found, final_url)
    }

    pub fn not_found(target_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(target_name, ProbeStatus::NotFound, url)
    }

    pub fn rejected(target_name: impl Into<String>) -> Self {
        Self::new(target_name, ProbeStatus::Rejected, USERNAME_NOT_ALLOWED)
    }

    pub fn failed(target_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(target_name, ProbeStatus::Failed, error)
    }

    fn new(target_name: impl Into<String>, status: ProbeStatus, detail: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            status,
            detail: detail.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == ProbeStatus::Found
    }
}
