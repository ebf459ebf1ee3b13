use thiserror::Error;

/// Error type returned by user callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Please provide a valid callback option for filter '{filter}'")]
    MissingCallback { filter: String },

    #[error("Callback of filter '{filter}' failed: {source}")]
    Callback {
        filter: String,
        #[source]
        source: CallbackError,
    },

    #[error("The query has no root alias to filter on")]
    MissingRootAlias,

    #[error("Invalid filter options: {0}")]
    InvalidOptions(#[source] serde_json::Error),

    #[error("Invalid filter data: {0}")]
    InvalidData(#[source] serde_json::Error),
}
