use log::{log, Level};
use thiserror::Error;

/// Everything an inventory operation can fail with.
///
/// Failures are logged where they happen, so a caller that ignores the
/// returned error still leaves a trace of what went wrong.
#[derive(Debug, Error)]
pub enum InvsError {
    #[error("Invalid item: {0}. Must be a non-empty string.")]
    InvalidItem(String),
    #[error("Invalid qty for {item}: {qty}. Must be an integer.")]
    InvalidQty { item: String, qty: String },
    #[error("Qty for {item} out of range: {current} {op} {qty} does not fit.")]
    QtyOutOfRange {
        item: String,
        current: i64,
        op: char,
        qty: i64,
    },
    #[error("Item '{0}' not found in stock.")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl InvsError {
    /// Severity the error is reported with.
    pub fn level(&self) -> Level {
        match self {
            InvsError::NotFound(_) => Level::Warn,
            _ => Level::Error,
        }
    }

    pub(crate) fn logged(self) -> Self {
        log!(self.level(), "{}", self);
        self
    }
}

pub type Result<T> = std::result::Result<T, InvsError>;
