//! MySQL Foreign Key DDL types

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

/// Runtime foreign key entity: `FOREIGN KEY (`column`) REFERENCES `table_to` (`column_to`)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForeignKey {
    /// Local column
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub column: Cow<'static, str>,

    /// Referenced table
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub table_to: Cow<'static, str>,

    /// Referenced column
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub column_to: Cow<'static, str>,
}

impl ForeignKey {
    /// Create a new foreign key
    #[must_use]
    pub fn new(
        column: impl Into<Cow<'static, str>>,
        table_to: impl Into<Cow<'static, str>>,
        column_to: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            column: column.into(),
            table_to: table_to.into(),
            column_to: column_to.into(),
        }
    }

    /// Build a foreign key from a `table.column` reference.
    ///
    /// Returns `None` when the reference has no separator or either side is empty.
    ///
    /// ```
    /// use tablewright_types::mysql::ddl::ForeignKey;
    ///
    /// let fk = ForeignKey::from_reference("user_id", "users.id").unwrap();
    /// assert_eq!(fk.table_to, "users");
    /// assert_eq!(fk.column_to, "id");
    ///
    /// assert!(ForeignKey::from_reference("user_id", "users").is_none());
    /// ```
    #[must_use]
    pub fn from_reference(column: impl Into<Cow<'static, str>>, reference: &str) -> Option<Self> {
        let (table, column_to) = reference.split_once('.')?;
        if table.is_empty() || column_to.is_empty() {
            return None;
        }
        Some(Self::new(
            column,
            table.to_string(),
            column_to.to_string(),
        ))
    }
}
