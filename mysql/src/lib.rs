//! MySQL DDL builders for tablewright
//!
//! - [`Table`] and [`Field`] declare a table body column by column
//! - [`Alter`] queues ALTER TABLE actions
//! - [`Schema`] turns declarations into finished statements
//!
//! ```
//! use tablewright_mysql::Schema;
//!
//! # fn main() -> tablewright_core::Result<()> {
//! let create = Schema::create("posts", |t| {
//!     t.auto_increment();
//!     t.string("title");
//!     t.int("author_id").unsigned().references("users.id")?;
//!     Ok(())
//! })?;
//! assert!(create.starts_with("CREATE TABLE posts (`ID` INT NOT NULL AUTO_INCREMENT"));
//!
//! let alter = Schema::alter("posts", |a| {
//!     a.drop_column("title");
//!     a.add_index("index", "author_idx", "author_id")?;
//!     Ok(())
//! })?;
//! assert_eq!(
//!     alter,
//!     "ALTER TABLE posts DROP COLUMN `title`; \
//!      ALTER TABLE posts ADD INDEX INDEX `author_idx` (`author_id`);"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `serde` - serialization of [`SchemaConfig`] and the DDL entities
//! - `toml` - [`SchemaConfig::from_toml_str`]
//! - `tracing` - emit rendered statements and queued alter actions as events

mod alter;
mod config;
mod names;
mod schema;
mod table;

pub use alter::Alter;
#[cfg(feature = "toml")]
pub use config::ConfigError;
pub use config::SchemaConfig;
pub use names::Names;
pub use schema::Schema;
pub use table::{Field, FieldId, Table};

pub use tablewright_core::{Result, SchemaError};
