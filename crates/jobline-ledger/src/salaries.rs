//! The salary report ledger, insertion order.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use jobline_directory::{stats, CompanyDirectory, StatisticsPatch};
use jobline_store::{keys, Collection, KeyValueStore};
use jobline_types::{ReportId, SalaryReport, MAX_SALARY_AMOUNT, MIN_SALARY_AMOUNT};

use crate::error::{LedgerError, Result};

/// Input for [`SalaryLedger::report`]; id and timestamp are assigned at
/// insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSalaryReport {
    pub company_name: String,
    pub salary_amount: i64,
}

/// Append-only salary reports with the reported-salary aggregate.
///
/// Reports are appended and never reordered. After each insert the ledger
/// recomputes `average_reported_salary` over the company's full report set
/// and merges it onto the company record.
pub struct SalaryLedger {
    store: Arc<dyn KeyValueStore>,
    ledger: Collection<Vec<SalaryReport>>,
    directory: CompanyDirectory,
}

impl SalaryLedger {
    /// Bind a salary ledger to the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            directory: CompanyDirectory::new(store.clone()),
            ledger: Collection::new(keys::SALARIES),
            store,
        }
    }

    /// Insert a salary report and refresh the owning company's aggregate.
    ///
    /// The amount must lie within [`MIN_SALARY_AMOUNT`]..=[`MAX_SALARY_AMOUNT`]
    /// (inclusive); out-of-range input fails with
    /// [`LedgerError::SalaryOutOfRange`] and nothing is persisted.
    pub fn report(&self, new: NewSalaryReport) -> Result<SalaryReport> {
        if !(MIN_SALARY_AMOUNT..=MAX_SALARY_AMOUNT).contains(&new.salary_amount) {
            return Err(LedgerError::SalaryOutOfRange {
                amount: new.salary_amount,
                min: MIN_SALARY_AMOUNT,
                max: MAX_SALARY_AMOUNT,
            });
        }

        let report = SalaryReport {
            id: ReportId::new(),
            company_name: new.company_name,
            salary_amount: new.salary_amount,
            reported_at: Utc::now(),
        };

        let mut ledger = self.ledger.load(self.store.as_ref());
        ledger.push(report.clone());
        self.ledger.save(self.store.as_ref(), &ledger);

        let amounts: Vec<i64> = ledger
            .iter()
            .filter(|r| r.company_name == report.company_name)
            .map(|r| r.salary_amount)
            .collect();
        let average = stats::rounded_mean(&amounts);

        if !self
            .directory
            .merge_statistics(&report.company_name, &StatisticsPatch::reported_salary(average))
        {
            debug!(company = %report.company_name, report = %report.id, "salary report stored for unknown company");
        }

        Ok(report)
    }

    /// Reports for one company, in insertion order.
    pub fn list_for(&self, company_name: &str) -> Vec<SalaryReport> {
        self.ledger
            .load(self.store.as_ref())
            .into_iter()
            .filter(|r| r.company_name == company_name)
            .collect()
    }

    /// Rounded mean of the company's reported salaries; 0 with no reports.
    pub fn average_for(&self, company_name: &str) -> i64 {
        let amounts: Vec<i64> = self
            .ledger
            .load(self.store.as_ref())
            .into_iter()
            .filter(|r| r.company_name == company_name)
            .map(|r| r.salary_amount)
            .collect();
        stats::rounded_mean(&amounts)
    }
}

impl std::fmt::Debug for SalaryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalaryLedger")
            .field("key", &self.ledger.key())
            .finish()
    }
}
