//! Immutable salary report records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted salary amount (inclusive).
pub const MIN_SALARY_AMOUNT: i64 = 15_000;
/// Highest accepted salary amount (inclusive).
pub const MAX_SALARY_AMOUNT: i64 = 500_000;

/// Unique identifier for a salary report (UUID v7 for time-ordering).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(uuid::Uuid);

impl ReportId {
    /// Generate a new time-ordered report ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportId({})", self.short_id())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single salary report in the ledger. Immutable once created.
///
/// `salary_amount` is validated at insert time
/// ([`MIN_SALARY_AMOUNT`]..=[`MAX_SALARY_AMOUNT`]), never at read time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryReport {
    pub id: ReportId,
    pub company_name: String,
    pub salary_amount: i64,
    pub reported_at: DateTime<Utc>,
}
