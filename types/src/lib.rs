//! Shared type definitions for tablewright
//!
//! This crate holds everything that describes a table without building one:
//!
//! - [`mysql::MySqlType`] - the closed set of column type keywords
//! - [`mysql::TypeClass`] - semantic classification of those keywords
//! - [`mysql::ddl`] - column, constraint, index and alter entities plus their SQL rendering
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of DDL entities

pub mod mysql;
pub mod serde_helpers;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::mysql::ddl::{
        AlterAction, Column, ForeignKey, Fragment, IndexDef, IndexKind, Modifier, ModifierSet,
        TableDef, TypeArgs, UniqueConstraint,
    };
    pub use crate::mysql::{MySqlType, TypeClass};
}
