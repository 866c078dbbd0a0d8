//! MySQL Index DDL types

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_from_string, cow_vec_from_strings};

/// Index kind accepted by `ADD INDEX`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexKind {
    Index,
    Unique,
    Fulltext,
    Primary,
    Spatial,
}

impl IndexKind {
    /// Parse an index kind (case-insensitive)
    ///
    /// ```
    /// use tablewright_types::mysql::ddl::IndexKind;
    ///
    /// assert_eq!(IndexKind::parse("FullText"), Some(IndexKind::Fulltext));
    /// assert_eq!(IndexKind::parse("btree"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        [
            Self::Index,
            Self::Unique,
            Self::Fulltext,
            Self::Primary,
            Self::Spatial,
        ]
        .into_iter()
        .find(|kind| kind.as_sql().eq_ignore_ascii_case(s))
    }

    /// Uppercase keyword
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Index => "INDEX",
            Self::Unique => "UNIQUE",
            Self::Fulltext => "FULLTEXT",
            Self::Primary => "PRIMARY",
            Self::Spatial => "SPATIAL",
        }
    }
}

impl core::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Runtime index entity
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct IndexDef {
    pub kind: IndexKind,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_vec_from_strings"))]
    pub columns: Vec<Cow<'static, str>>,
}

impl IndexDef {
    #[must_use]
    pub fn new<I, C>(kind: IndexKind, name: impl Into<Cow<'static, str>>, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        Self {
            kind,
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the index name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
