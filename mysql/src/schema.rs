//! Statement entry points
//!
//! [`Schema`] is stateless: each call builds a fresh [`Table`] or [`Alter`],
//! runs the caller's declaration against it and returns the finished SQL.

use tablewright_core::{Result, SchemaError, trace_statement};
use tablewright_types::mysql::ddl::sql::{
    drop_table_if_exists_sql, drop_table_sql, truncate_table_sql,
};

use crate::{Alter, Names, SchemaConfig, Table};

/// Static DDL entry points
#[derive(Clone, Copy, Debug, Default)]
pub struct Schema;

/// One statement for a single name; ` stmt ` per name, concatenated, for a list
fn per_name(names: Names, render: fn(&str) -> String) -> Result<String> {
    match names {
        Names::One(name) => Ok(render(&name)),
        Names::Many(names) if names.is_empty() => Err(SchemaError::EmptyTableList),
        Names::Many(names) => Ok(names
            .iter()
            .map(|name| format!(" {} ", render(name)))
            .collect()),
    }
}

impl Schema {
    /// `CREATE TABLE <name> (...) ENGINE = InnoDB default charset=UTF8;`
    ///
    /// ```
    /// use tablewright_mysql::Schema;
    ///
    /// # fn main() -> tablewright_core::Result<()> {
    /// let sql = Schema::create("tags", |t| {
    ///     t.string("label").unique();
    ///     Ok(())
    /// })?;
    ///
    /// assert_eq!(
    ///     sql,
    ///     "CREATE TABLE tags (`label` varchar(100) NOT NULL, UNIQUE `label` (`label`)) \
    ///      ENGINE = InnoDB default charset=UTF8;"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn create<F>(name: &str, declaration: F) -> Result<String>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        Self::create_with(&SchemaConfig::default(), name, declaration)
    }

    /// [`Schema::create`] with engine and charset defaults taken from `config`
    pub fn create_with<F>(config: &SchemaConfig, name: &str, declaration: F) -> Result<String>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        let mut table = Table::with_config(config.clone());
        declaration(&mut table)?;

        let sql = table
            .definition()
            .create_table_sql(name, &config.engine, &config.charset);
        trace_statement!("create", &sql);
        Ok(sql)
    }

    /// One `ALTER TABLE <name> <clause>;` per queued action, joined by a space
    pub fn alter<F>(name: &str, declaration: F) -> Result<String>
    where
        F: FnOnce(&mut Alter) -> Result<()>,
    {
        Ok(Self::alter_statements(name, declaration)?.join(" "))
    }

    /// The statements of [`Schema::alter`], kept apart
    pub fn alter_statements<F>(name: &str, declaration: F) -> Result<Vec<String>>
    where
        F: FnOnce(&mut Alter) -> Result<()>,
    {
        let mut alter = Alter::new();
        declaration(&mut alter)?;

        let statements = alter.statements(name)?;
        for sql in &statements {
            trace_statement!("alter", sql);
        }
        Ok(statements)
    }

    /// `DROP TABLE <name>;` for one name or every listed name.
    ///
    /// An empty list fails with [`SchemaError::EmptyTableList`], as does
    /// every table-list entry point below.
    pub fn drop(names: impl Into<Names>) -> Result<String> {
        let sql = per_name(names.into(), drop_table_sql)?;
        trace_statement!("drop", &sql);
        Ok(sql)
    }

    /// `DROP TABLE IF EXISTS <name>;` for one name or every listed name
    pub fn drop_if_exists(names: impl Into<Names>) -> Result<String> {
        let sql = per_name(names.into(), drop_table_if_exists_sql)?;
        trace_statement!("drop_if_exists", &sql);
        Ok(sql)
    }

    /// `TRUNCATE TABLE <name>;` for one name or every listed name
    pub fn truncate(names: impl Into<Names>) -> Result<String> {
        let sql = per_name(names.into(), truncate_table_sql)?;
        trace_statement!("truncate", &sql);
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_users() {
        let sql = Schema::create("users", |t| {
            t.int("id");
            t.auto_increment();
            t.string("name");
            t.primary_key()?;
            Ok(())
        })
        .unwrap();

        assert_eq!(
            sql,
            "CREATE TABLE users (`ID` INT NOT NULL AUTO_INCREMENT, \
             `id` int(11) NOT NULL, `name` varchar(100) NOT NULL, \
             PRIMARY KEY (`name`)) ENGINE = InnoDB default charset=UTF8;"
        );
    }

    #[test]
    fn test_create_with_config() {
        let config = SchemaConfig::new().engine("MyISAM").charset("latin1");
        let sql = Schema::create_with(&config, "logs", |t| {
            t.text("line");
            Ok(())
        })
        .unwrap();
        assert!(sql.ends_with("ENGINE = MyISAM default charset=latin1;"));

        let sql = Schema::create_with(&config, "logs", |t| {
            t.text("line");
            t.engine("ARCHIVE");
            Ok(())
        })
        .unwrap();
        assert!(sql.ends_with("ENGINE = ARCHIVE default charset=latin1;"));
    }

    #[test]
    fn test_create_propagates_declaration_error() {
        let err = Schema::create("broken", |t| {
            t.int("a");
            t.foreign_key("a", "nowhere")?;
            Ok(())
        })
        .unwrap_err();
        assert_eq!(err, SchemaError::InvalidReference("nowhere".to_string()));
    }

    #[test]
    fn test_alter_joins_statements() {
        let sql = Schema::alter("users", |a| {
            a.drop_column(["a", "b"]).rename("people");
            Ok(())
        })
        .unwrap();

        assert_eq!(
            sql,
            "ALTER TABLE users DROP COLUMN `a`; \
             ALTER TABLE users DROP COLUMN `b`; \
             ALTER TABLE users RENAME TO people;"
        );
    }

    #[test]
    fn test_alter_without_actions() {
        assert_eq!(
            Schema::alter("users", |_| Ok(())).unwrap_err(),
            SchemaError::EmptyAlterActions
        );
    }

    #[test]
    fn test_drop_single_and_list() {
        assert_eq!(Schema::drop("a").unwrap(), "DROP TABLE a;");
        assert_eq!(
            Schema::drop(["a", "b"]).unwrap(),
            " DROP TABLE a;  DROP TABLE b; "
        );
    }

    #[test]
    fn test_drop_if_exists_and_truncate() {
        assert_eq!(
            Schema::drop_if_exists("a").unwrap(),
            "DROP TABLE IF EXISTS a;"
        );
        assert_eq!(
            Schema::truncate(vec!["a".to_string(), "b".to_string()]).unwrap(),
            " TRUNCATE TABLE a;  TRUNCATE TABLE b; "
        );
    }

    #[test]
    fn test_empty_table_list() {
        let none: Vec<String> = Vec::new();
        assert_eq!(
            Schema::drop(none.clone()).unwrap_err(),
            SchemaError::EmptyTableList
        );
        assert_eq!(
            Schema::drop_if_exists(none.clone()).unwrap_err(),
            SchemaError::EmptyTableList
        );
        assert_eq!(
            Schema::truncate(none).unwrap_err(),
            SchemaError::EmptyTableList
        );
    }
}
