//! Status, priority, and type classifications carried by every task.

use super::{ParseTaskPriorityError, ParseTaskStatusError, ParseTaskTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
///
/// Every status may move to every other status; none is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been opened but nobody is working on it yet.
    Pending,
    /// A technician is working on the task.
    InProgress,
    /// The task has been resolved.
    Completed,
    /// The task was dropped.
    Cancelled,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the label shown to dashboard users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::InProgress => "Em Andamento",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal queue position.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// All priorities from least to most severe.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Severity rank used for ordering; lower ranks are more severe.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Urgent => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the label shown to dashboard users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::Urgent => "Urgente",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of IT work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// Physical equipment.
    Hardware,
    /// Installed programs and operating systems.
    Software,
    /// Connectivity and network equipment.
    Network,
    /// Scheduled upkeep.
    Maintenance,
    /// Access control, malware, and audits.
    Security,
}

impl TaskType {
    /// All task types in display order.
    pub const ALL: [Self; 5] = [
        Self::Hardware,
        Self::Software,
        Self::Network,
        Self::Maintenance,
        Self::Security,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::Maintenance => "maintenance",
            Self::Security => "security",
        }
    }

    /// Returns the label shown to dashboard users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Network => "Rede",
            Self::Maintenance => "Manutenção",
            Self::Security => "Segurança",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "hardware" => Ok(Self::Hardware),
            "software" => Ok(Self::Software),
            "network" => Ok(Self::Network),
            "maintenance" => Ok(Self::Maintenance),
            "security" => Ok(Self::Security),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
