//! MySQL Unique Constraint DDL types

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

/// Runtime unique constraint entity: ``UNIQUE `name` (`column`)``
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UniqueConstraint {
    /// Constraint name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Constrained column
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub column: Cow<'static, str>,
}

impl UniqueConstraint {
    /// Create a named unique constraint
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, column: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
        }
    }

    /// Create a unique constraint named after its column
    #[must_use]
    pub fn on_column(column: impl Into<Cow<'static, str>>) -> Self {
        let column = column.into();
        Self {
            name: column.clone(),
            column,
        }
    }

    /// Get the constraint name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
