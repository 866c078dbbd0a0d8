//! ALTER TABLE builder
//!
//! [`Alter`] queues one [`AlterAction`] per clause. Column-level actions run
//! a nested declaration against a fresh [`Table`] and queue one entry per
//! declared column, so declaring several columns in one call yields several
//! `ALTER TABLE` statements.

use std::borrow::Cow;

use tablewright_core::{Result, SchemaError, trace_action};
use tablewright_types::mysql::ddl::{AlterAction, Fragment, IndexDef, IndexKind, TableDef};

use crate::{Names, Table};

/// Builder for the actions of one ALTER TABLE call
#[derive(Clone, Debug, Default)]
pub struct Alter {
    actions: Vec<AlterAction>,
}

fn declare<F>(declaration: F) -> Result<TableDef>
where
    F: FnOnce(&mut Table) -> Result<()>,
{
    let mut table = Table::new();
    declaration(&mut table)?;
    Ok(table.into_definition())
}

/// Column fragments of a nested declaration that may only redefine columns
fn columns_only<F>(action: &'static str, declaration: F) -> Result<Vec<Fragment>>
where
    F: FnOnce(&mut Table) -> Result<()>,
{
    let def = declare(declaration)?;
    if def.primary_key.is_some() || !def.foreign_keys.is_empty() || !def.uniques.is_empty() {
        return Err(SchemaError::KeysNotAllowed(action));
    }
    Ok(def.column_fragments())
}

impl Alter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, action: AlterAction) {
        trace_action!(action.kind(), action.to_sql());
        self.actions.push(action);
    }

    /// `ADD COLUMN` for every declared column.
    ///
    /// Keys declared in the nested table follow as `ADD PRIMARY KEY`,
    /// `ADD FOREIGN KEY` and `ADD UNIQUE` entries.
    pub fn add<F>(&mut self, declaration: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        let def = declare(declaration)?;

        for column in def.column_fragments() {
            self.push(AlterAction::AddColumn { column });
        }
        if let Some(key) = def.primary_key {
            self.push(AlterAction::AddPrimaryKey { key });
        }
        for fk in def.foreign_keys {
            self.push(AlterAction::AddForeignKey { fk });
        }
        for unique in def.uniques {
            self.push(AlterAction::AddUnique { unique });
        }
        Ok(self)
    }

    /// `MODIFY` for every declared column, one entry each.
    ///
    /// Keys cannot be declared here; queue them with [`Alter::add`] or
    /// [`Alter::add_index`].
    pub fn modify<F>(&mut self, declaration: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        for column in columns_only("modify", declaration)? {
            self.push(AlterAction::Modify { column });
        }
        Ok(self)
    }

    /// `MODIFY COLUMN` for every declared column, one entry each
    pub fn modify_column<F>(&mut self, declaration: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        for column in columns_only("modify_column", declaration)? {
            self.push(AlterAction::ModifyColumn { column });
        }
        Ok(self)
    }

    /// `CHANGE `old` `new` <definition>` for every declared column.
    ///
    /// New names pair with declared columns by position. Changing several
    /// columns needs a list of exactly as many names; a single column takes
    /// a name or the first entry of a list.
    pub fn change<F>(&mut self, declaration: F, new_names: impl Into<Names>) -> Result<&mut Self>
    where
        F: FnOnce(&mut Table) -> Result<()>,
    {
        let fragments = columns_only("change", declaration)?;
        let new_names = new_names.into();

        let pairs: Vec<(Fragment, Cow<'static, str>)> = match fragments.len() {
            0 => Vec::new(),
            1 => {
                let new_name = new_names.into_vec().into_iter().next().ok_or(
                    SchemaError::NameCountMismatch {
                        fields: 1,
                        names: 0,
                    },
                )?;
                fragments.into_iter().map(|f| (f, new_name.clone())).collect()
            }
            fields => {
                if !new_names.is_list() {
                    return Err(SchemaError::NamesNotList(fields));
                }
                if new_names.len() != fields {
                    return Err(SchemaError::NameCountMismatch {
                        fields,
                        names: new_names.len(),
                    });
                }
                fragments.into_iter().zip(new_names.into_vec()).collect()
            }
        };

        for (column, new_name) in pairs {
            self.push(AlterAction::Change { column, new_name });
        }
        Ok(self)
    }

    /// `DROP COLUMN` for every name, in order
    pub fn drop_column(&mut self, columns: impl Into<Names>) -> &mut Self {
        for name in columns.into().into_vec() {
            self.push(AlterAction::DropColumn { name });
        }
        self
    }

    /// `RENAME TO <new_name>`
    pub fn rename(&mut self, new_name: impl Into<Cow<'static, str>>) -> &mut Self {
        self.push(AlterAction::RenameTo {
            name: new_name.into(),
        });
        self
    }

    /// ``DROP INDEX `name` ``
    pub fn drop_index(&mut self, name: impl Into<Cow<'static, str>>) -> &mut Self {
        self.push(AlterAction::DropIndex { name: name.into() });
        self
    }

    /// `DROP PRIMARY KEY`
    pub fn drop_primary(&mut self) -> &mut Self {
        self.push(AlterAction::DropPrimaryKey);
        self
    }

    /// ``ADD INDEX <KIND> `name` (`col`, ...)``.
    ///
    /// `kind` is one of index, unique, fulltext, primary, spatial, in any
    /// case. Every index needs a column; spatial indexes take exactly one.
    pub fn add_index(
        &mut self,
        kind: &str,
        name: impl Into<Cow<'static, str>>,
        columns: impl Into<Names>,
    ) -> Result<&mut Self> {
        let kind = IndexKind::parse(kind)
            .ok_or_else(|| SchemaError::InvalidIndexType(kind.to_lowercase()))?;
        let name = name.into();
        let columns = columns.into();

        if columns.is_empty() {
            return Err(SchemaError::EmptyIndexColumns(name.into_owned()));
        }
        if kind == IndexKind::Spatial && columns.len() != 1 {
            return Err(SchemaError::SpatialIndexColumns(columns.len()));
        }

        self.push(AlterAction::AddIndex {
            index: IndexDef::new(kind, name, columns.into_vec()),
        });
        Ok(self)
    }

    /// Queued actions; fails when nothing was queued
    pub fn results(&self) -> Result<&[AlterAction]> {
        if self.actions.is_empty() {
            return Err(SchemaError::EmptyAlterActions);
        }
        Ok(&self.actions)
    }

    /// One full `ALTER TABLE` statement per queued action
    pub fn statements(&self, table: &str) -> Result<Vec<String>> {
        Ok(self
            .results()?
            .iter()
            .map(|action| action.alter_table_sql(table))
            .collect())
    }
}
