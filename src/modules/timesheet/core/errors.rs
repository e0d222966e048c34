use chrono::NaiveDate;

/// Reasons a command is rejected before anything changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecideError {
    #[error("a user name is required")]
    MissingUserName,

    #[error("an entry already exists for {}", .0.format("%d.%m.%Y"))]
    DuplicateDate(NaiveDate),

    #[error("time entry {0} not found")]
    EntryNotFound(String),

    #[error("carry-over values must be finite numbers")]
    InvalidCarryOver,

    #[error("no entries to export for {0}")]
    NothingToExport(String),
}
