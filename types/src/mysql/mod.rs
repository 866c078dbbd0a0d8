//! MySQL type definitions
//!
//! This module provides type definitions for MySQL including:
//!
//! - [`MySqlType`] - column type keywords
//! - [`TypeClass`] - semantic classification of type keywords
//! - [`ddl`] - DDL entities and their SQL rendering

pub mod ddl;
mod sql_type;
mod type_category;

pub use sql_type::MySqlType;
pub use type_category::TypeClass;
