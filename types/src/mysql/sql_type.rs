//! MySQL column type definitions
//!
//! Defines the closed set of type keywords the builder can declare.

use super::TypeClass;

/// Enum representing the MySQL column types a table can declare.
///
/// Every variant renders as its lowercase keyword and carries the display
/// size the builder uses when the caller does not give one.
///
/// # Examples
///
/// ```
/// use tablewright_types::mysql::{MySqlType, TypeClass};
///
/// let varchar = MySqlType::Varchar;
/// assert_eq!(varchar.keyword(), "varchar");
/// assert_eq!(varchar.default_size(), Some(100));
/// assert_eq!(varchar.class(), TypeClass::Textual);
///
/// assert_eq!(MySqlType::from_keyword("BIGINT"), Some(MySqlType::BigInt));
/// assert_eq!(MySqlType::from_keyword("geometry"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MySqlType {
    /// `VARCHAR` - variable-length string
    Varchar,
    /// `CHAR` - fixed-length string
    Char,
    /// `TEXT`
    Text,
    /// `TINYTEXT`
    TinyText,
    /// `MEDIUMTEXT`
    MediumText,
    /// `LONGTEXT`
    LongText,
    /// `BLOB`
    Blob,
    /// `TINYINT`
    TinyInt,
    /// `SMALLINT`
    SmallInt,
    /// `MEDIUMINT`
    MediumInt,
    /// `INT`
    Int,
    /// `BIGINT`
    BigInt,
    /// `REAL`
    Real,
    /// `FLOAT`
    Float,
    /// `DOUBLE`
    Double,
    /// `DATE`
    Date,
    /// `DATETIME`
    DateTime,
    /// `TIMESTAMP`
    Timestamp,
    /// `TIME`
    Time,
    /// `YEAR`
    Year,
    /// `SET('a','b',...)`
    Set,
    /// `ENUM('a','b',...)`
    Enum,
}

/// Every variant, in declaration order
const ALL: &[MySqlType] = &[
    MySqlType::Varchar,
    MySqlType::Char,
    MySqlType::Text,
    MySqlType::TinyText,
    MySqlType::MediumText,
    MySqlType::LongText,
    MySqlType::Blob,
    MySqlType::TinyInt,
    MySqlType::SmallInt,
    MySqlType::MediumInt,
    MySqlType::Int,
    MySqlType::BigInt,
    MySqlType::Real,
    MySqlType::Float,
    MySqlType::Double,
    MySqlType::Date,
    MySqlType::DateTime,
    MySqlType::Timestamp,
    MySqlType::Time,
    MySqlType::Year,
    MySqlType::Set,
    MySqlType::Enum,
];

impl MySqlType {
    /// Resolve a type keyword (case-insensitive)
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        ALL.iter()
            .copied()
            .find(|ty| ty.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Get the keyword as it appears in generated SQL
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Varchar => "varchar",
            Self::Char => "char",
            Self::Text => "text",
            Self::TinyText => "tinytext",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
            Self::Blob => "blob",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Real => "real",
            Self::Float => "float",
            Self::Double => "double",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Year => "year",
            Self::Set => "set",
            Self::Enum => "enum",
        }
    }

    /// Display size used when the declaration does not give one
    #[must_use]
    pub const fn default_size(&self) -> Option<u32> {
        match self {
            Self::Varchar => Some(100),
            Self::Char => Some(1),
            Self::Text => Some(255),
            Self::Blob => Some(50),
            Self::TinyInt => Some(2),
            Self::SmallInt => Some(4),
            Self::MediumInt => Some(8),
            Self::Int => Some(11),
            Self::BigInt => Some(25),
            Self::Timestamp => Some(14),
            Self::Year => Some(4),
            _ => None,
        }
    }

    /// Semantic class of this keyword
    #[must_use]
    pub const fn class(&self) -> TypeClass {
        match self {
            Self::Varchar
            | Self::Char
            | Self::Text
            | Self::TinyText
            | Self::MediumText
            | Self::LongText
            | Self::Blob => TypeClass::Textual,
            Self::TinyInt | Self::SmallInt | Self::MediumInt | Self::Int | Self::BigInt => {
                TypeClass::Integer
            }
            Self::Real | Self::Float | Self::Double => TypeClass::Float,
            Self::Date | Self::DateTime | Self::Timestamp | Self::Time | Self::Year => {
                TypeClass::Date
            }
            Self::Set | Self::Enum => TypeClass::Set,
        }
    }
}

impl core::fmt::Display for MySqlType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.keyword())
    }
}
