//! Error types for sqlfactory.

use sqlx::error::DatabaseError;
use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

use crate::params::Args;

/// The main error type for sqlfactory operations.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The database rejected the statement.
    #[error(transparent)]
    Logic(Box<DatabaseLogicError>),

    /// Opening the connection failed.
    #[error(transparent)]
    Connection(sqlx::Error),

    /// Any other driver failure, passed through as-is.
    #[error(transparent)]
    Sqlx(sqlx::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FactoryError {
    /// The diagnostic error, if this is a database-reported failure.
    pub fn as_logic(&self) -> Option<&DatabaseLogicError> {
        match self {
            FactoryError::Logic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DatabaseLogicError> for FactoryError {
    fn from(err: DatabaseLogicError) -> Self {
        FactoryError::Logic(Box::new(err))
    }
}

/// Result type alias for sqlfactory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

/// A database-reported failure together with the statement that caused it.
///
/// The display form is the full diagnostic: resolved code, driver message,
/// query text and one tab-indented line per argument.
#[derive(Debug, Error)]
#[error("{formatted}")]
pub struct DatabaseLogicError {
    code: i32,
    resolved_code: String,
    message: String,
    query: String,
    args: Args,
    formatted: String,
    #[source]
    source: sqlx::Error,
}

impl DatabaseLogicError {
    pub fn new(
        source: sqlx::Error,
        code: i32,
        resolved_code: impl Into<String>,
        query: impl Into<String>,
        args: Args,
    ) -> Self {
        let resolved_code = resolved_code.into();
        let query = query.into();
        let message = match &source {
            sqlx::Error::Database(db_err) => db_err.message().to_string(),
            other => other.to_string(),
        };
        let formatted = format_message(&resolved_code, &message, &query, &args);

        Self {
            code,
            resolved_code,
            message,
            query,
            args,
            formatted,
            source,
        }
    }

    /// Numeric code reported by the database.
    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn resolved_code(&self) -> &str {
        &self.resolved_code
    }

    /// The driver's own message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn source_error(&self) -> &sqlx::Error {
        &self.source
    }
}

pub(crate) fn format_message(resolved_code: &str, message: &str, query: &str, args: &Args) -> String {
    let mut out = String::new();
    out.push_str(resolved_code);
    out.push('\n');
    out.push_str(message);
    out.push('\n');
    out.push_str("Query: ");
    out.push_str(query);
    out.push('\n');

    for (name, value) in args {
        out.push_str(&format!("\t{name}: {value}\n"));
    }

    out
}

/// Numeric code of a database error.
///
/// MySQL reports its server error number. Every other driver reports a code
/// string: SQLite's extended result code, or the SQLSTATE for PostgreSQL.
/// Missing or non-numeric codes map to 0.
pub(crate) fn database_code(err: &dyn DatabaseError) -> i32 {
    if let Some(mysql) = err.try_downcast_ref::<MySqlDatabaseError>() {
        return i32::from(mysql.number());
    }

    err.code()
        .and_then(|code| code.parse::<i32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    /// Stand-in for a driver error, so translation can be tested offline.
    #[derive(Debug)]
    pub struct FakeDbError {
        pub code: Option<&'static str>,
        pub message: &'static str,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    pub fn driver_error(code: Option<&'static str>, message: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code, message }))
    }
}
