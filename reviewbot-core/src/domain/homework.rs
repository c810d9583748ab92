//! Homework domain types

use serde::Deserialize;

/// A single homework record returned by the status API
///
/// Only the fields the translator reads are decoded. Everything else the API
/// sends (`id`, `lesson_name`, `reviewer_comment`, ...) is ignored whatever
/// its type. `status` and `homework_name` are optional because their absence
/// is reported by the translator as a typed error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homework_name: Option<String>,
}

impl Submission {
    /// Creates a submission with both fields set
    pub fn new(status: impl Into<String>, homework_name: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            homework_name: Some(homework_name.into()),
        }
    }
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parses a status code as sent by the API
    ///
    /// Returns `None` for any code outside the known verdict set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}
