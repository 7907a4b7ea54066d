//! # sqlfactory
//!
//! Open a connection, run parameterized SQL, close the connection. When the
//! database rejects a statement, the error says which statement and which
//! arguments, and can carry an application-level name for the error code.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use sqlfactory::prelude::*;
//!
//! let db = SqlConnectionFactory::with_resolver(
//!     "sqlite://app.db?mode=rwc",
//!     CodeTable::new().with(2067, "DUPLICATE_KEY"),
//! );
//!
//! db.execute(
//!     "INSERT INTO users (id, name) VALUES (?, ?)",
//!     Args::new().with("UserId", 5).with("Name", "A"),
//! )
//! .await?;
//!
//! // A second insert fails with:
//! //
//! // DUPLICATE_KEY
//! // UNIQUE constraint failed: users.id
//! // Query: INSERT INTO users (id, name) VALUES (?, ?)
//! //     UserId: 5
//! //     Name: A
//! ```
//!
//! ## Operations
//!
//! | Method           | Returns                             |
//! |------------------|-------------------------------------|
//! | `execute`        | affected rows                       |
//! | `execute_scalar` | first column of the first row       |
//! | `query`          | every row, through `FromRow`        |
//! | `single`         | the first row, or `None`            |

pub mod config;
pub mod engine;
pub mod error;
pub mod params;
pub mod resolver;

pub use config::FactoryConfig;
pub use engine::{JsonRow, SqlConnectionFactory};
pub use error::{DatabaseLogicError, FactoryError, FactoryResult};
pub use params::{Args, Value};
pub use resolver::{CodeTable, DatabaseCodeResolver, UNRESOLVED};

pub mod prelude {
    pub use crate::config::FactoryConfig;
    pub use crate::engine::{JsonRow, SqlConnectionFactory};
    pub use crate::error::*;
    pub use crate::params::{Args, Value};
    pub use crate::resolver::{CodeTable, DatabaseCodeResolver, UNRESOLVED};
}
