//! MySQL type class definitions
//!
//! Classifies raw type keywords into the groups that select formatting rules.

// =============================================================================
// TypeClass - semantic class used to pick a formatting rule
// =============================================================================

/// Semantic class of a type keyword.
///
/// The class decides how a column's type text is rendered: float types take
/// a `(size,digits)` pair, set types take a quoted value list, integer types
/// accept the `unsigned` prefix, and everything else renders `keyword(size)`.
///
/// # Examples
///
/// ```
/// use tablewright_types::mysql::TypeClass;
///
/// assert_eq!(TypeClass::from_keyword("varchar"), Some(TypeClass::Textual));
/// assert_eq!(TypeClass::from_keyword("DOUBLE"), Some(TypeClass::Float));
/// assert_eq!(TypeClass::from_keyword("geometry"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TypeClass {
    /// VARCHAR, CHAR, TEXT and friends, BLOB
    Textual,
    /// TINYINT, SMALLINT, MEDIUMINT, INT, BIGINT
    Integer,
    /// REAL, FLOAT, DOUBLE
    Float,
    /// TIME, YEAR, DATETIME, DATE, TIMESTAMP
    Date,
    /// SET, ENUM
    Set,
}

const TEXTUAL: &[&str] = &[
    "varchar",
    "char",
    "text",
    "tinytext",
    "mediumtext",
    "longtext",
    "blob",
];

const INTEGERS: &[&str] = &["tinyint", "int", "smallint", "mediumint", "bigint"];

const FLOATS: &[&str] = &["real", "float", "double"];

const DATES: &[&str] = &["time", "year", "datetime", "date", "timestamp"];

const SETS: &[&str] = &["set", "enum"];

impl TypeClass {
    /// Look up the class of a raw type keyword (case-insensitive).
    ///
    /// Returns `None` for keywords outside the known tables.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let tables: [(&[&str], Self); 5] = [
            (TEXTUAL, Self::Textual),
            (INTEGERS, Self::Integer),
            (FLOATS, Self::Float),
            (DATES, Self::Date),
            (SETS, Self::Set),
        ];

        tables.iter().find_map(|(keywords, class)| {
            keywords
                .iter()
                .any(|k| k.eq_ignore_ascii_case(keyword))
                .then_some(*class)
        })
    }

    /// Whether `unsigned` changes the rendered type text
    #[must_use]
    pub const fn accepts_unsigned(&self) -> bool {
        matches!(self, Self::Integer)
    }

    /// Lowercase class name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Date => "date",
            Self::Set => "set",
        }
    }
}

impl core::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
