//! MySQL Column DDL types
//!
//! A [`Column`] is one declared field: its type keyword, name, display size,
//! type-specific arguments and the modifiers attached after declaration.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

use super::{Modifier, ModifierSet};
use crate::mysql::{MySqlType, TypeClass};

// =============================================================================
// Type arguments
// =============================================================================

/// Type-specific parameters beyond the display size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TypeArgs {
    /// No extra parameters
    #[default]
    Plain,
    /// Float precision: `float(size,digits)`
    Float {
        /// Digits after the decimal point
        digits: Option<u32>,
    },
    /// Allowed values of a `set` or `enum`
    Values {
        /// Values in declaration order
        values: Vec<Cow<'static, str>>,
    },
}

// =============================================================================
// Runtime Type
// =============================================================================

/// Runtime column entity.
///
/// # Examples
///
/// ```
/// use tablewright_types::mysql::MySqlType;
/// use tablewright_types::mysql::ddl::{Column, Modifier};
///
/// let age = Column::new("age", MySqlType::Int).modifier(Modifier::Unsigned);
///
/// assert_eq!(age.size(), Some(11));
/// assert_eq!(age.fragment().to_sql(), "`age` unsigned int(11) NOT NULL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    /// Column name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Type keyword
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub sql_type: MySqlType,

    /// Declared display size
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub size: Option<u32>,

    /// Type-specific parameters
    #[cfg_attr(feature = "serde", serde(default))]
    pub args: TypeArgs,

    /// Modifiers in attachment order
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: ModifierSet,
}

impl Column {
    /// Create a column with the type's default display size
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, sql_type: MySqlType) -> Self {
        let args = match sql_type.class() {
            TypeClass::Float => TypeArgs::Float { digits: None },
            TypeClass::Set => TypeArgs::Values { values: Vec::new() },
            _ => TypeArgs::Plain,
        };

        Self {
            name: name.into(),
            sql_type,
            size: sql_type.default_size(),
            args,
            modifiers: ModifierSet::new(),
        }
    }

    /// Create a float-class column with `(size, digits)` precision
    #[must_use]
    pub fn float(
        name: impl Into<Cow<'static, str>>,
        sql_type: MySqlType,
        size: u32,
        digits: Option<u32>,
    ) -> Self {
        Self {
            size: Some(size),
            args: TypeArgs::Float { digits },
            ..Self::new(name, sql_type)
        }
    }

    /// Create a set-class column with its allowed values
    #[must_use]
    pub fn values<I, V>(name: impl Into<Cow<'static, str>>, sql_type: MySqlType, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cow<'static, str>>,
    {
        Self {
            size: None,
            args: TypeArgs::Values {
                values: values.into_iter().map(Into::into).collect(),
            },
            ..Self::new(name, sql_type)
        }
    }

    /// Replace the declared display size
    #[must_use]
    pub fn with_size(mut self, size: Option<u32>) -> Self {
        self.size = size;
        self
    }

    /// Attach a modifier
    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.set(modifier);
        self
    }

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the type keyword
    #[inline]
    #[must_use]
    pub const fn sql_type(&self) -> MySqlType {
        self.sql_type
    }

    /// Get the type class
    #[inline]
    #[must_use]
    pub const fn class(&self) -> TypeClass {
        self.sql_type.class()
    }

    /// Effective display size: a `Size` modifier wins over the declared size
    #[must_use]
    pub fn size(&self) -> Option<u32> {
        self.modifiers.size().or(self.size)
    }

    /// Allowed values of a set-class column
    #[must_use]
    pub fn allowed_values(&self) -> &[Cow<'static, str>] {
        match &self.args {
            TypeArgs::Values { values } => values,
            _ => &[],
        }
    }

    /// Check if unsigned applies to this column
    #[must_use]
    pub fn is_unsigned(&self) -> bool {
        self.class().accepts_unsigned() && self.modifiers.is_unsigned()
    }
}
