//! MySQL DDL (Data Definition Language) entity types
//!
//! Runtime types describing one table body and the alter actions that can be
//! applied to a table, together with their SQL rendering in [`sql`].
//!
//! # Examples
//!
//! ```
//! use tablewright_types::mysql::MySqlType;
//! use tablewright_types::mysql::ddl::{Column, Modifier, TableDef};
//!
//! let mut users = TableDef::new();
//! users.auto_increment = Some("ID".into());
//! users.columns.push(Column::new("name", MySqlType::Varchar));
//! users
//!     .columns
//!     .push(Column::new("age", MySqlType::TinyInt).modifier(Modifier::Unsigned));
//!
//! assert_eq!(
//!     users.create_table_sql("users", "InnoDB", "UTF8"),
//!     "CREATE TABLE users (`ID` INT NOT NULL AUTO_INCREMENT, \
//!      `name` varchar(100) NOT NULL, `age` unsigned tinyint(2) NOT NULL) \
//!      ENGINE = InnoDB default charset=UTF8;"
//! );
//! ```

mod alter;
mod column;
mod foreign_key;
mod index;
mod modifier;
pub mod sql;
mod table;
mod unique_constraint;

pub use alter::AlterAction;
pub use column::{Column, TypeArgs};
pub use foreign_key::ForeignKey;
pub use index::{IndexDef, IndexKind};
pub use modifier::{Modifier, ModifierSet};
pub use table::{
    DEFAULT_AUTO_INCREMENT, DEFAULT_CHARSET, DEFAULT_ENGINE, PrimaryKey, TableDef,
};
pub use unique_constraint::UniqueConstraint;

// SQL generation
pub use sql::Fragment;
