use std::fmt;

use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid dataset query: {0}")]
    InvalidQuery(String),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch dataset: {0}")]
    Fetch(String),
}

impl ViewerError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedDataset(message.into())
    }

    /// Returns `true` for failures caused by the dataset contents rather than
    /// by the transport that delivered them.
    #[must_use]
    pub fn is_malformed_dataset(&self) -> bool {
        matches!(self, Self::MalformedDataset(_))
    }
}

/// Raised when a hover pass computes a time index with no backing sample.
///
/// Clamping makes this unreachable for well-formed data, so it is only ever
/// logged and the current frame is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfRangeWarning {
    pub category: String,
    pub player: usize,
    pub index: usize,
    pub series_len: usize,
}

impl fmt::Display for IndexOutOfRangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time index {} out of range for player {} category `{}` (len {})",
            self.index, self.player, self.category, self.series_len
        )
    }
}
