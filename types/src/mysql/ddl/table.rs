//! MySQL Table DDL types
//!
//! [`TableDef`] is everything declared inside one table body: columns in
//! declaration order plus the table-level keys and options.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_option_from_string};

use super::{Column, ForeignKey, UniqueConstraint};

/// Storage engine used when the table does not set one
pub const DEFAULT_ENGINE: &str = "InnoDB";

/// Character set used when the table does not set one
pub const DEFAULT_CHARSET: &str = "UTF8";

/// Column name used by a bare `auto_increment()`
pub const DEFAULT_AUTO_INCREMENT: &str = "ID";

/// Primary key of a table
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrimaryKey {
    /// Key column
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub column: Cow<'static, str>,

    /// Set as a side effect of declaring an auto-increment column
    #[cfg_attr(feature = "serde", serde(default))]
    pub implicit: bool,
}

impl PrimaryKey {
    /// An explicitly declared primary key
    #[must_use]
    pub fn new(column: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: column.into(),
            implicit: false,
        }
    }

    /// A primary key implied by an auto-increment column
    #[must_use]
    pub fn implicit(column: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column: column.into(),
            implicit: true,
        }
    }
}

/// Runtime table body.
///
/// # Examples
///
/// ```
/// use tablewright_types::mysql::MySqlType;
/// use tablewright_types::mysql::ddl::{Column, PrimaryKey, TableDef};
///
/// let mut def = TableDef::new();
/// def.columns.push(Column::new("id", MySqlType::Int));
/// def.primary_key = Some(PrimaryKey::new("id"));
///
/// assert_eq!(
///     def.definition_sql(),
///     "(`id` int(11) NOT NULL, PRIMARY KEY (`id`))"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TableDef {
    /// Declared columns, in order
    #[cfg_attr(feature = "serde", serde(default))]
    pub columns: Vec<Column>,

    /// Auto-increment column, rendered before every declared column
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub auto_increment: Option<Cow<'static, str>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub primary_key: Option<PrimaryKey>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub foreign_keys: Vec<ForeignKey>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub uniques: Vec<UniqueConstraint>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub engine: Option<Cow<'static, str>>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub charset: Option<Cow<'static, str>>,
}

impl TableDef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine to render, falling back to `default`
    #[must_use]
    pub fn engine_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.engine.as_deref().unwrap_or(default)
    }

    /// Charset to render, falling back to `default`
    #[must_use]
    pub fn charset_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.charset.as_deref().unwrap_or(default)
    }
}
