//! Table body builder
//!
//! [`Table`] accumulates column declarations in order. Every declaration
//! returns a [`Field`] handle bound to the declared column, so modifiers
//! always land on the column they were chained from:
//!
//! ```
//! use tablewright_mysql::Table;
//!
//! # fn main() -> tablewright_core::Result<()> {
//! let mut t = Table::new();
//! t.int("id").unsigned().primary_key()?;
//! t.string("email").size(191).unique();
//! let age = t.tiny_int("age").nullable().id();
//! t.field(age)?.comment("years");
//!
//! assert_eq!(
//!     t.render(true),
//!     "(`id` unsigned int(11) NOT NULL, `email` varchar(191) NOT NULL, \
//!      `age` tinyint(2) NULL COMMENT 'years', \
//!      PRIMARY KEY (`id`), UNIQUE `email` (`email`))"
//! );
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

use tablewright_core::{Result, SchemaError};
use tablewright_types::mysql::MySqlType;
use tablewright_types::mysql::ddl::{
    Column, DEFAULT_AUTO_INCREMENT, ForeignKey, Modifier, PrimaryKey, TableDef, TypeArgs,
    UniqueConstraint, sql::quote_literal,
};

use crate::SchemaConfig;

static NEXT_TABLE: AtomicU64 = AtomicU64::new(0);

/// A declared column: the table that declared it and its position there
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId {
    table: u64,
    index: usize,
}

impl FieldId {
    /// Zero-based declaration index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Builder for one table body
#[derive(Clone, Debug)]
pub struct Table {
    id: u64,
    def: TableDef,
    config: SchemaConfig,
}

impl Default for Table {
    fn default() -> Self {
        Self::with_config(SchemaConfig::default())
    }
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for the engine and charset defaults
    #[must_use]
    pub fn with_config(config: SchemaConfig) -> Self {
        Self {
            id: NEXT_TABLE.fetch_add(1, Ordering::Relaxed),
            def: TableDef::new(),
            config,
        }
    }

    const fn field_id(&self, index: usize) -> FieldId {
        FieldId {
            table: self.id,
            index,
        }
    }

    fn register(&mut self, column: Column) -> Field<'_> {
        let id = self.field_id(self.def.columns.len());
        self.def.columns.push(column);
        Field { table: self, id }
    }

    fn declare(&mut self, name: impl Into<Cow<'static, str>>, sql_type: MySqlType) -> Field<'_> {
        self.register(Column::new(name, sql_type))
    }

    // TEXTUAL

    /// `varchar(100)`
    pub fn string(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Varchar)
    }

    /// `char(1)`
    pub fn char(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Char)
    }

    /// `text(255)`
    pub fn text(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Text)
    }

    pub fn tiny_text(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::TinyText)
    }

    pub fn medium_text(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::MediumText)
    }

    pub fn long_text(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::LongText)
    }

    /// `blob(50)`
    pub fn blob(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Blob)
    }

    // INTEGERS

    /// `tinyint(2)`
    pub fn tiny_int(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::TinyInt)
    }

    /// `smallint(4)`
    pub fn small_int(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::SmallInt)
    }

    /// `mediumint(8)`
    pub fn medium_int(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::MediumInt)
    }

    /// `int(11)`
    pub fn int(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Int)
    }

    /// `bigint(25)`
    pub fn big_int(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::BigInt)
    }

    // FLOATS

    /// `float(size,digits)`, or `float(size)` without digits
    pub fn float(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        size: u32,
        digits: Option<u32>,
    ) -> Field<'_> {
        self.register(Column::float(name, MySqlType::Float, size, digits))
    }

    pub fn double(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        size: u32,
        digits: Option<u32>,
    ) -> Field<'_> {
        self.register(Column::float(name, MySqlType::Double, size, digits))
    }

    pub fn real(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        size: u32,
        digits: Option<u32>,
    ) -> Field<'_> {
        self.register(Column::float(name, MySqlType::Real, size, digits))
    }

    // DATE

    pub fn datetime(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::DateTime)
    }

    pub fn date(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Date)
    }

    /// `timestamp(14)`
    pub fn timestamp(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Timestamp)
    }

    pub fn time(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Time)
    }

    /// `year(4)`
    pub fn year(&mut self, name: impl Into<Cow<'static, str>>) -> Field<'_> {
        self.declare(name, MySqlType::Year)
    }

    // SETS

    /// `set('a','b',...)`; fails without values
    pub fn set<I, V>(&mut self, name: impl Into<Cow<'static, str>>, values: I) -> Result<Field<'_>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Cow<'static, str>>,
    {
        self.declare_values(name, MySqlType::Set, values)
    }

    /// `enum('a','b',...)`; fails without values
    pub fn enumeration<I, V>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        values: I,
    ) -> Result<Field<'_>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Cow<'static, str>>,
    {
        self.declare_values(name, MySqlType::Enum, values)
    }

    fn declare_values<I, V>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        sql_type: MySqlType,
        values: I,
    ) -> Result<Field<'_>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Cow<'static, str>>,
    {
        let column = Column::values(name, sql_type, values);
        if column.allowed_values().is_empty() {
            return Err(SchemaError::EmptyValueList(column.name().to_string()));
        }
        Ok(self.register(column))
    }

    /// Declare a column by raw type keyword.
    ///
    /// `size` replaces the keyword's default display size when given. Set and
    /// enum keywords need their values and fail here with
    /// [`SchemaError::EmptyValueList`]; use [`Table::set`] or
    /// [`Table::enumeration`] for those.
    pub fn column(
        &mut self,
        keyword: &str,
        name: impl Into<Cow<'static, str>>,
        size: Option<u32>,
    ) -> Result<Field<'_>> {
        let sql_type = MySqlType::from_keyword(keyword)
            .ok_or_else(|| SchemaError::UnknownType(keyword.to_string()))?;
        let column = Column::new(name, sql_type);

        if matches!(column.args, TypeArgs::Values { .. }) {
            return Err(SchemaError::EmptyValueList(column.name().to_string()));
        }

        let size = size.or(column.size);
        Ok(self.register(column.with_size(size)))
    }

    // FIELD ACCESS

    /// Re-address a previously declared column.
    ///
    /// Fails with [`SchemaError::NoFieldSelected`] for an id handed out by
    /// another table.
    pub fn field(&mut self, id: FieldId) -> Result<Field<'_>> {
        if id.table != self.id || id.index >= self.def.columns.len() {
            return Err(SchemaError::NoFieldSelected);
        }
        Ok(Field { table: self, id })
    }

    /// The most recently declared column
    pub fn current(&mut self) -> Result<Field<'_>> {
        let id = self.current_id()?;
        Ok(Field { table: self, id })
    }

    fn current_id(&self) -> Result<FieldId> {
        self.def
            .columns
            .len()
            .checked_sub(1)
            .map(|index| self.field_id(index))
            .ok_or(SchemaError::NoFieldSelected)
    }

    fn column_name(&self, id: FieldId) -> Cow<'static, str> {
        self.def.columns[id.index].name.clone()
    }

    // KEYS

    fn set_primary_key(&mut self, column: Cow<'static, str>) -> Result<()> {
        match &self.def.primary_key {
            Some(existing) if !existing.implicit => Err(SchemaError::DuplicatePrimaryKey {
                existing: existing.column.to_string(),
            }),
            _ => {
                self.def.primary_key = Some(PrimaryKey::new(column));
                Ok(())
            }
        }
    }

    /// Make the most recently declared column the primary key
    pub fn primary_key(&mut self) -> Result<&mut Self> {
        let id = self.current_id()?;
        self.set_primary_key(self.column_name(id))?;
        Ok(self)
    }

    /// Put a unique constraint, named after the column, on the most recently declared column
    pub fn unique(&mut self) -> Result<&mut Self> {
        let id = self.current_id()?;
        let column = self.column_name(id);
        self.def.uniques.push(UniqueConstraint::on_column(column));
        Ok(self)
    }

    /// Put a named unique constraint on the most recently declared column
    pub fn unique_named(&mut self, name: impl Into<Cow<'static, str>>) -> Result<&mut Self> {
        let id = self.current_id()?;
        let column = self.column_name(id);
        self.def.uniques.push(UniqueConstraint::new(name, column));
        Ok(self)
    }

    /// Add an `ID` auto-increment column that is also the primary key
    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment_named(DEFAULT_AUTO_INCREMENT, true)
    }

    /// Add a named auto-increment column.
    ///
    /// With `primary_key` the column becomes the primary key unless one was
    /// already declared explicitly. A later explicit `primary_key()` call
    /// replaces it.
    pub fn auto_increment_named(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        primary_key: bool,
    ) -> &mut Self {
        let name = name.into();
        let explicit_key = self.def.primary_key.as_ref().is_some_and(|pk| !pk.implicit);
        if primary_key && !explicit_key {
            self.def.primary_key = Some(PrimaryKey::implicit(name.clone()));
        }
        self.def.auto_increment = Some(name);
        self
    }

    /// Add a foreign key from `field` to a `table.column` reference
    pub fn foreign_key(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        reference: &str,
    ) -> Result<&mut Self> {
        let fk = ForeignKey::from_reference(field, reference)
            .ok_or_else(|| SchemaError::InvalidReference(reference.to_string()))?;
        self.def.foreign_keys.push(fk);
        Ok(self)
    }

    // OPTIONS

    pub fn engine(&mut self, engine: impl Into<Cow<'static, str>>) -> &mut Self {
        self.def.engine = Some(engine.into());
        self
    }

    pub fn charset(&mut self, charset: impl Into<Cow<'static, str>>) -> &mut Self {
        self.def.charset = Some(charset.into());
        self
    }

    // OUTPUT

    /// Everything declared so far
    #[must_use]
    pub fn definition(&self) -> &TableDef {
        &self.def
    }

    #[must_use]
    pub fn into_definition(self) -> TableDef {
        self.def
    }

    /// Render the table body.
    ///
    /// With `fields_only` this is the parenthesized column and key list;
    /// otherwise the engine, charset and terminator follow.
    #[must_use]
    pub fn render(&self, fields_only: bool) -> String {
        if fields_only {
            self.def.definition_sql()
        } else {
            self.def.table_sql(&self.config.engine, &self.config.charset)
        }
    }
}

/// Handle on one declared column.
///
/// Modifier methods consume and return the handle so they chain; keys that
/// can fail return a [`Result`].
#[derive(Debug)]
pub struct Field<'a> {
    table: &'a mut Table,
    id: FieldId,
}

impl<'a> Field<'a> {
    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.table.def.columns[self.id.index].name()
    }

    /// The column as declared so far
    #[must_use]
    pub fn column(&self) -> &Column {
        &self.table.def.columns[self.id.index]
    }

    /// Attach any modifier
    pub fn modifier(self, modifier: Modifier) -> Self {
        self.table.def.columns[self.id.index].modifiers.set(modifier);
        self
    }

    pub fn nullable(self) -> Self {
        self.modifier(Modifier::Nullable)
    }

    pub fn not_null(self) -> Self {
        self.modifier(Modifier::NotNull)
    }

    /// `DEFAULT <value>`, rendered verbatim
    pub fn default(self, value: impl Into<Cow<'static, str>>) -> Self {
        self.modifier(Modifier::Default(value.into()))
    }

    /// `DEFAULT '<text>'`
    pub fn default_text(self, text: &str) -> Self {
        self.modifier(Modifier::Default(Cow::Owned(quote_literal(text))))
    }

    /// Render integer types as `unsigned <type>`; ignored by other classes
    pub fn unsigned(self) -> Self {
        self.modifier(Modifier::Unsigned)
    }

    pub fn comment(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.modifier(Modifier::Comment(text.into()))
    }

    /// Override the declared display size
    pub fn size(self, size: u32) -> Self {
        self.modifier(Modifier::Size(size))
    }

    /// Make this column the primary key
    pub fn primary_key(self) -> Result<Self> {
        let name = self.table.column_name(self.id);
        self.table.set_primary_key(name)?;
        Ok(self)
    }

    /// Unique constraint named after this column
    pub fn unique(self) -> Self {
        let name = self.table.column_name(self.id);
        self.table.def.uniques.push(UniqueConstraint::on_column(name));
        self
    }

    /// Named unique constraint on this column
    pub fn unique_named(self, name: impl Into<Cow<'static, str>>) -> Self {
        let column = self.table.column_name(self.id);
        self.table.def.uniques.push(UniqueConstraint::new(name, column));
        self
    }

    /// Foreign key from this column to a `table.column` reference
    pub fn references(self, reference: &str) -> Result<Self> {
        let name = self.table.column_name(self.id);
        self.table.foreign_key(name, reference)?;
        Ok(self)
    }
}
