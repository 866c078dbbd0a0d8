use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// `add_index` was given a kind outside index, unique, fulltext, primary, spatial
    #[error("Invalid key type: {0}")]
    InvalidIndexType(String),

    /// Spatial indexes cover exactly one column
    #[error("Spatial index requires exactly one column, got {0}")]
    SpatialIndexColumns(usize),

    /// An index needs at least one column
    #[error("Index `{0}` requires at least one column")]
    EmptyIndexColumns(String),

    /// A field-relative operation ran before any field was declared, or the
    /// addressed field belongs to another table
    #[error("No field selected")]
    NoFieldSelected,

    /// Keys declared inside a `modify`, `modify_column` or `change` block
    #[error("Keys cannot be declared inside {0}; use add or add_index")]
    KeysNotAllowed(&'static str),

    /// Drop or truncate called with an empty list of table names
    #[error("Empty table name list")]
    EmptyTableList,

    /// A second explicit primary key was declared
    #[error("Duplicated primary key: `{existing}` is already the primary key")]
    DuplicatePrimaryKey { existing: String },

    /// Foreign key reference without the `table.column` separator
    #[error("Referenced column must be written as table.column, got `{0}`")]
    InvalidReference(String),

    /// Several fields were changed but only one new name was supplied
    #[error("Names must be a list when changing {0} fields")]
    NamesNotList(usize),

    /// The number of new names does not match the number of changed fields
    #[error("Invalid names number: {fields} fields, {names} names")]
    NameCountMismatch { fields: usize, names: usize },

    /// `Alter::results` was called with nothing queued
    #[error("Empty alter table actions")]
    EmptyAlterActions,

    /// `set` / `enum` declared without any allowed value
    #[error("Column `{0}` requires at least one allowed value")]
    EmptyValueList(String),

    /// Type keyword not known to the builder
    #[error("Unknown column type: {0}")]
    UnknownType(String),
}

/// Result type for schema building
pub type Result<T> = std::result::Result<T, SchemaError>;
