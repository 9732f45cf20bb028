//! Sort keys and directions for task lists.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Field a task list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Creation timestamp.
    CreatedAt,
    /// Deadline; undated tasks always come last.
    DueDate,
    /// Severity rank, urgent first when ascending.
    Priority,
}

impl SortKey {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::DueDate => "due_date",
            Self::Priority => "priority",
        }
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "due_date" | "dueDate" => Ok(Self::DueDate),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseSortKeyError(value.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a sort key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orients an ascending comparison result.
    #[must_use]
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    /// Field to order by.
    pub key: SortKey,
    /// Direction of the ordering.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort order from its parts.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ascending order on `key`.
    #[must_use]
    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Descending order on `key`.
    #[must_use]
    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Newest tasks first.
    #[must_use]
    pub const fn newest_first() -> Self {
        Self::descending(SortKey::CreatedAt)
    }

    /// Result of a user picking `key`: the same key flips direction, a new
    /// key starts descending.
    #[must_use]
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::descending(key)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::newest_first()
    }
}
