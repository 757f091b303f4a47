/// Domain-rule violations raised at insert time.
///
/// These are propagated to the caller and never swallowed: dropping one
/// silently would corrupt user-visible state. Storage failures are handled
/// separately (logged and swallowed) and never surface through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("rating {rating} is out of range; expected {min} to {max}")]
    RatingOutOfRange { rating: u8, min: u8, max: u8 },

    #[error("salary amount {amount} is out of range; expected {min} to {max}")]
    SalaryOutOfRange { amount: i64, min: i64, max: i64 },
}

/// Result alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
