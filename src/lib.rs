//! # tablewright
//!
//! A fluent builder for MySQL DDL: CREATE, ALTER, DROP and TRUNCATE TABLE
//! statements assembled from method-style declarations. It only produces
//! text; nothing here connects to a database.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablewright::prelude::*;
//!
//! # fn main() -> tablewright::Result<()> {
//! let sql = Schema::create("users", |t| {
//!     t.auto_increment();
//!     t.string("email").size(191).unique();
//!     t.tiny_int("age").unsigned().nullable();
//!     Ok(())
//! })?;
//!
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE users (`ID` INT NOT NULL AUTO_INCREMENT, \
//!      `email` varchar(191) NOT NULL, `age` unsigned tinyint(2) NULL, \
//!      PRIMARY KEY (`ID`), UNIQUE `email` (`email`)) \
//!      ENGINE = InnoDB default charset=UTF8;"
//! );
//!
//! let sql = Schema::alter("users", |a| {
//!     a.change(
//!         |t| {
//!             t.tiny_int("age").unsigned();
//!             Ok(())
//!         },
//!         "years",
//!     )?;
//!     Ok(())
//! })?;
//! assert_eq!(
//!     sql,
//!     "ALTER TABLE users CHANGE `age` `years` unsigned tinyint(2) NOT NULL;"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! | Crate                | Contents                                        |
//! |----------------------|-------------------------------------------------|
//! | `tablewright-core`   | [`SchemaError`], [`Result`], tracing macros     |
//! | `tablewright-types`  | type keywords, DDL entities and their rendering |
//! | `tablewright-mysql`  | [`Table`], [`Alter`], [`Schema`]                |

pub use tablewright_core::error::Result;

/// Error types
pub mod error {
    pub use tablewright_core::error::SchemaError;
}
pub use error::SchemaError;

/// DDL entities and their SQL rendering
pub use tablewright_types as ddl;

/// Table, alter and statement builders
pub use tablewright_mysql as mysql;
pub use tablewright_mysql::{Alter, Field, FieldId, Names, Schema, SchemaConfig, Table};

#[cfg(feature = "toml")]
pub use tablewright_mysql::ConfigError;

/// Everything needed to declare and render tables
pub mod prelude {
    pub use crate::{Alter, Field, FieldId, Names, Result, Schema, SchemaConfig, SchemaError, Table};
    pub use tablewright_types::prelude::*;
}
