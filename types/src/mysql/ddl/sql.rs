//! SQL generation for MySQL DDL types
//!
//! Columns render into [`Fragment`]s first. A fragment keeps the unquoted
//! column name next to its definition, so callers that rename or split
//! columns never have to parse rendered SQL back apart.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

use super::{
    AlterAction, Column, ForeignKey, IndexDef, PrimaryKey, TableDef, TypeArgs, UniqueConstraint,
};
use crate::mysql::TypeClass;

/// Quote an identifier with backticks
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Quote a string literal with single quotes.
///
/// Quotes and backslashes are doubled. This matches MySQL's default escaping;
/// a server in `NO_BACKSLASH_ESCAPES` mode reads each doubled backslash as two.
#[must_use]
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "''"))
}

fn quote_idents<'a>(idents: impl IntoIterator<Item = &'a Cow<'static, str>>) -> String {
    idents
        .into_iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Fragment
// =============================================================================

/// One rendered column
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Fragment {
    /// Unquoted column name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Type text and modifiers, without the name
    pub definition: String,
}

impl Fragment {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }

    /// The auto-increment column
    #[must_use]
    pub fn auto_increment(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, "INT NOT NULL AUTO_INCREMENT")
    }

    /// `` `name` definition ``
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!("{} {}", quote_ident(&self.name), self.definition)
    }

    /// Same definition under another name
    #[must_use]
    pub fn renamed_sql(&self, new_name: &str) -> String {
        format!(
            "{} {} {}",
            quote_ident(&self.name),
            quote_ident(new_name),
            self.definition
        )
    }
}

// =============================================================================
// Column SQL Generation
// =============================================================================

impl Column {
    /// Generate the type text, e.g. `unsigned int(11)`, `float(8,2)`, `enum('a','b')`
    pub fn type_sql(&self) -> String {
        let keyword = self.sql_type().keyword();

        match (&self.args, self.class()) {
            (TypeArgs::Values { values }, _) => {
                let values = values
                    .iter()
                    .map(|v| quote_literal(v))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{}({})", keyword, values)
            }
            (TypeArgs::Float { digits }, _) => match (self.size(), digits) {
                (Some(size), Some(digits)) => format!("{}({},{})", keyword, size, digits),
                (Some(size), None) => format!("{}({})", keyword, size),
                (None, _) => keyword.to_string(),
            },
            (TypeArgs::Plain, class) => {
                let mut sql = String::new();
                if class == TypeClass::Integer && self.is_unsigned() {
                    sql.push_str("unsigned ");
                }
                sql.push_str(keyword);
                if let Some(size) = self.size() {
                    sql.push_str(&format!("({})", size));
                }
                sql
            }
        }
    }

    /// Generate the column definition without the name: type text plus modifiers
    pub fn definition_sql(&self) -> String {
        let mut sql = self.type_sql();
        self.modifiers.write_sql(&mut sql);
        sql
    }

    /// Render into a fragment
    pub fn fragment(&self) -> Fragment {
        Fragment::new(self.name.clone(), self.definition_sql())
    }
}

// =============================================================================
// Constraint SQL Generation
// =============================================================================

impl PrimaryKey {
    /// Generate the PRIMARY KEY clause
    pub fn to_constraint_sql(&self) -> String {
        format!("PRIMARY KEY ({})", quote_ident(&self.column))
    }
}

impl ForeignKey {
    /// Generate the FOREIGN KEY ... REFERENCES clause
    pub fn to_constraint_sql(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_ident(&self.column),
            quote_ident(&self.table_to),
            quote_ident(&self.column_to)
        )
    }
}

impl UniqueConstraint {
    /// Generate the UNIQUE clause
    pub fn to_constraint_sql(&self) -> String {
        format!(
            "UNIQUE {} ({})",
            quote_ident(self.name()),
            quote_ident(&self.column)
        )
    }
}

// =============================================================================
// Table SQL Generation
// =============================================================================

impl TableDef {
    /// Column fragments: the auto-increment column first, then declared columns in order
    pub fn column_fragments(&self) -> Vec<Fragment> {
        self.auto_increment
            .iter()
            .map(|name| Fragment::auto_increment(name.clone()))
            .chain(self.columns.iter().map(Column::fragment))
            .collect()
    }

    /// Key clauses: primary key, then foreign keys, then unique constraints
    pub fn constraint_clauses(&self) -> Vec<String> {
        self.primary_key
            .iter()
            .map(PrimaryKey::to_constraint_sql)
            .chain(self.foreign_keys.iter().map(ForeignKey::to_constraint_sql))
            .chain(self.uniques.iter().map(UniqueConstraint::to_constraint_sql))
            .collect()
    }

    /// Generate the parenthesized body: columns and key clauses
    pub fn definition_sql(&self) -> String {
        let lines = self
            .column_fragments()
            .iter()
            .map(Fragment::to_sql)
            .chain(self.constraint_clauses())
            .collect::<Vec<_>>();

        format!("({})", lines.join(", "))
    }

    /// Generate the body followed by table options and the terminator
    pub fn table_sql(&self, engine: &str, charset: &str) -> String {
        format!(
            "{} ENGINE = {} default charset={};",
            self.definition_sql(),
            self.engine_or(engine),
            self.charset_or(charset)
        )
    }

    /// Generate CREATE TABLE SQL
    pub fn create_table_sql(&self, name: &str, engine: &str, charset: &str) -> String {
        format!("CREATE TABLE {} {}", name, self.table_sql(engine, charset))
    }
}

// =============================================================================
// Index SQL Generation
// =============================================================================

impl IndexDef {
    /// Generate the ADD INDEX clause
    pub fn add_index_sql(&self) -> String {
        format!(
            "ADD INDEX {} {} ({})",
            self.kind.as_sql(),
            quote_ident(self.name()),
            quote_idents(&self.columns)
        )
    }
}

// =============================================================================
// Alter SQL Generation
// =============================================================================

impl AlterAction {
    /// Generate the clause that follows `ALTER TABLE <name>`
    pub fn to_sql(&self) -> String {
        match self {
            Self::AddColumn { column } => format!("ADD COLUMN {}", column.to_sql()),
            Self::AddPrimaryKey { key } => format!("ADD {}", key.to_constraint_sql()),
            Self::AddForeignKey { fk } => format!("ADD {}", fk.to_constraint_sql()),
            Self::AddUnique { unique } => format!("ADD {}", unique.to_constraint_sql()),
            Self::Modify { column } => format!("MODIFY {}", column.to_sql()),
            Self::ModifyColumn { column } => format!("MODIFY COLUMN {}", column.to_sql()),
            Self::Change { column, new_name } => {
                format!("CHANGE {}", column.renamed_sql(new_name))
            }
            Self::DropColumn { name } => format!("DROP COLUMN {}", quote_ident(name)),
            Self::RenameTo { name } => format!("RENAME TO {}", name),
            Self::DropIndex { name } => format!("DROP INDEX {}", quote_ident(name)),
            Self::DropPrimaryKey => "DROP PRIMARY KEY".to_string(),
            Self::AddIndex { index } => index.add_index_sql(),
        }
    }

    /// Generate the full `ALTER TABLE` statement
    pub fn alter_table_sql(&self, table: &str) -> String {
        format!("ALTER TABLE {} {};", table, self.to_sql())
    }
}

// =============================================================================
// Table-level utilities
// =============================================================================

/// Generate DROP TABLE SQL
pub fn drop_table_sql(name: &str) -> String {
    format!("DROP TABLE {};", name)
}

/// Generate DROP TABLE IF EXISTS SQL
pub fn drop_table_if_exists_sql(name: &str) -> String {
    format!("DROP TABLE IF EXISTS {};", name)
}

/// Generate TRUNCATE TABLE SQL
pub fn truncate_table_sql(name: &str) -> String {
    format!("TRUNCATE TABLE {};", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mysql::MySqlType;
    use crate::mysql::ddl::{IndexKind, Modifier};

    #[test]
    fn test_plain_column() {
        let col = Column::new("name", MySqlType::Varchar);
        assert_eq!(col.fragment().to_sql(), "`name` varchar(100) NOT NULL");
    }

    #[test]
    fn test_column_without_size() {
        let col = Column::new("created", MySqlType::DateTime);
        assert_eq!(col.fragment().to_sql(), "`created` datetime NOT NULL");
    }

    #[test]
    fn test_unsigned_prefix() {
        let col = Column::new("age", MySqlType::TinyInt).modifier(Modifier::Unsigned);
        assert_eq!(col.type_sql(), "unsigned tinyint(2)");

        let col = Column::float("ratio", MySqlType::Float, 5, None).modifier(Modifier::Unsigned);
        assert_eq!(col.type_sql(), "float(5)");
    }

    #[test]
    fn test_float_precision() {
        let col = Column::float("price", MySqlType::Double, 10, Some(2));
        assert_eq!(col.fragment().to_sql(), "`price` double(10,2) NOT NULL");

        let col = Column::float("price", MySqlType::Double, 10, Some(2)).modifier(Modifier::Size(12));
        assert_eq!(col.type_sql(), "double(12,2)");
    }

    #[test]
    fn test_set_values() {
        let col = Column::values("status", MySqlType::Enum, ["draft", "it's live"])
            .modifier(Modifier::Default(Cow::Borrowed("'draft'")));
        assert_eq!(
            col.fragment().to_sql(),
            "`status` enum('draft','it''s live') DEFAULT 'draft' NOT NULL"
        );
    }

    #[test]
    fn test_fragment_keeps_name_apart() {
        let fragment = Column::new("title", MySqlType::Text).fragment();
        assert_eq!(fragment.name, "title");
        assert_eq!(fragment.definition, "text(255) NOT NULL");
        assert_eq!(
            fragment.renamed_sql("headline"),
            "`title` `headline` text(255) NOT NULL"
        );
    }

    #[test]
    fn test_definition_with_every_clause() {
        let mut def = TableDef::new();
        def.auto_increment = Some(Cow::Borrowed("ID"));
        def.primary_key = Some(PrimaryKey::implicit("ID"));
        def.columns.push(Column::new("email", MySqlType::Varchar));
        def.columns.push(Column::new("team_id", MySqlType::Int));
        def.foreign_keys.push(ForeignKey::new("team_id", "teams", "id"));
        def.uniques.push(UniqueConstraint::on_column("email"));

        assert_eq!(
            def.definition_sql(),
            "(`ID` INT NOT NULL AUTO_INCREMENT, \
             `email` varchar(100) NOT NULL, \
             `team_id` int(11) NOT NULL, \
             PRIMARY KEY (`ID`), \
             FOREIGN KEY (`team_id`) REFERENCES `teams` (`id`), \
             UNIQUE `email` (`email`))"
        );
    }

    #[test]
    fn test_create_table_options() {
        let mut def = TableDef::new();
        def.columns.push(Column::new("id", MySqlType::Int));

        assert_eq!(
            def.create_table_sql("t", "InnoDB", "UTF8"),
            "CREATE TABLE t (`id` int(11) NOT NULL) ENGINE = InnoDB default charset=UTF8;"
        );

        def.engine = Some(Cow::Borrowed("MyISAM"));
        def.charset = Some(Cow::Borrowed("latin1"));
        assert!(
            def.create_table_sql("t", "InnoDB", "UTF8")
                .ends_with("ENGINE = MyISAM default charset=latin1;")
        );
    }

    #[test]
    fn test_add_index_sql() {
        let index = IndexDef::new(IndexKind::Unique, "email_idx", ["email", "tenant"]);
        assert_eq!(
            index.add_index_sql(),
            "ADD INDEX UNIQUE `email_idx` (`email`, `tenant`)"
        );
    }

    #[test]
    fn test_alter_clauses() {
        let column = Column::new("age", MySqlType::Int).fragment();

        assert_eq!(
            AlterAction::Modify {
                column: column.clone()
            }
            .to_sql(),
            "MODIFY `age` int(11) NOT NULL"
        );
        assert_eq!(
            AlterAction::Change {
                column,
                new_name: Cow::Borrowed("years")
            }
            .to_sql(),
            "CHANGE `age` `years` int(11) NOT NULL"
        );
        assert_eq!(
            AlterAction::DropColumn {
                name: Cow::Borrowed("age")
            }
            .alter_table_sql("users"),
            "ALTER TABLE users DROP COLUMN `age`;"
        );
        assert_eq!(AlterAction::DropPrimaryKey.to_sql(), "DROP PRIMARY KEY");
    }

    #[test]
    fn test_quote_literal_escapes_backslashes() {
        assert_eq!(quote_literal(r"C:\"), r"'C:\\'");
        assert_eq!(quote_literal(r"it\'s"), r"'it\\''s'");

        let col = Column::new("path", MySqlType::Varchar)
            .modifier(Modifier::Comment(Cow::Borrowed(r"C:\")));
        assert_eq!(
            col.fragment().to_sql(),
            r"`path` varchar(100) COMMENT 'C:\\' NOT NULL"
        );
    }

    #[test]
    fn test_quote_ident_escapes_backticks() {
        assert_eq!(quote_ident("we`ird"), "`we``ird`");
    }
}
