//! Unified error type for the drink/order service.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants carry the
//! offending value so the HTTP layer can build a precise message, and
//! [`Error::kind`] groups them into the four categories the API reports on.

use sea_orm::DbErr;
use thiserror::Error;

/// Coarse classification used to pick an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input (400)
    Validation,
    /// Uniqueness violation (409)
    Conflict,
    /// A referenced record does not exist (404)
    NotFound,
    /// Anything unexpected (500)
    Internal,
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required request field was absent
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A price was negative, NaN or infinite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// Any other input validation failure
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description
        message: String,
    },

    /// A drink with this name already exists
    #[error("Drink '{name}' already exists")]
    DrinkNameTaken {
        /// The conflicting name
        name: String,
    },

    /// A user with this email already exists
    #[error("User '{email}' already exists")]
    EmailTaken {
        /// The conflicting email
        email: String,
    },

    /// No drink with this id
    #[error("Drink not found: {id}")]
    DrinkNotFound {
        /// The missing drink id
        id: i64,
    },

    /// No order with this id
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// The missing order id
        id: i64,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Error bubbled up from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Filesystem or socket error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Bind address could not be parsed
    #[error("Invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } | Self::InvalidPrice { .. } | Self::Validation { .. } => {
                ErrorKind::Validation
            }
            Self::DrinkNameTaken { .. } | Self::EmailTaken { .. } => ErrorKind::Conflict,
            Self::DrinkNotFound { .. } | Self::OrderNotFound { .. } => ErrorKind::NotFound,
            Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::EnvVar(_)
            | Self::AddrParse(_) => ErrorKind::Internal,
        }
    }

    /// Returns true when a database error was caused by a `UNIQUE` constraint.
    pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
        matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
