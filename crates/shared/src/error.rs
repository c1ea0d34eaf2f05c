#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load {0}")]
    LoadFailure(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("category '{id}' still contains {count} dishes")]
    CategoryNotEmpty { id: String, count: usize },

    #[error("no dishes selected")]
    EmptySelection,

    #[error("{0} not found")]
    NotFound(String),

    #[error("data has not been loaded")]
    NotLoaded,

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl Error {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::LoadFailure(_) => "load_failure",
            Error::InvalidFormat(_) => "invalid_format",
            Error::Validate(_) => "validation",
            Error::CategoryNotEmpty { .. } => "category_not_empty",
            Error::EmptySelection => "empty_selection",
            Error::NotFound(_) => "not_found",
            Error::NotLoaded => "not_loaded",
            Error::Json(_) => "json",
            Error::Unknown(_) => "unknown",
        }
    }
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! invalid {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::InvalidFormat(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::InvalidFormat(format!($fmt, $($arg)*)))
    };
}
