//! MySQL ALTER TABLE actions
//!
//! Each [`AlterAction`] renders to exactly one clause; the facade wraps every
//! clause in its own `ALTER TABLE <name> ...;` statement.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

use super::{ForeignKey, Fragment, IndexDef, PrimaryKey, UniqueConstraint};

/// All alter actions
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum AlterAction {
    AddColumn {
        column: Fragment,
    },
    AddPrimaryKey {
        key: PrimaryKey,
    },
    AddForeignKey {
        fk: ForeignKey,
    },
    AddUnique {
        unique: UniqueConstraint,
    },
    Modify {
        column: Fragment,
    },
    ModifyColumn {
        column: Fragment,
    },
    Change {
        column: Fragment,
        #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
        new_name: Cow<'static, str>,
    },
    DropColumn {
        #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
        name: Cow<'static, str>,
    },
    RenameTo {
        #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
        name: Cow<'static, str>,
    },
    DropIndex {
        #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
        name: Cow<'static, str>,
    },
    DropPrimaryKey,
    AddIndex {
        index: IndexDef,
    },
}

impl AlterAction {
    /// Get the type name of this action
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add_column",
            Self::AddPrimaryKey { .. } => "add_primary_key",
            Self::AddForeignKey { .. } => "add_foreign_key",
            Self::AddUnique { .. } => "add_unique",
            Self::Modify { .. } => "modify",
            Self::ModifyColumn { .. } => "modify_column",
            Self::Change { .. } => "change",
            Self::DropColumn { .. } => "drop_column",
            Self::RenameTo { .. } => "rename_to",
            Self::DropIndex { .. } => "drop_index",
            Self::DropPrimaryKey => "drop_primary_key",
            Self::AddIndex { .. } => "add_index",
        }
    }
}
