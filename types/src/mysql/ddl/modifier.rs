//! Column modifiers
//!
//! A [`ModifierSet`] holds the modifiers attached to one column in the order
//! the caller attached them. Each kind occupies one slot: setting a kind that
//! is already present replaces the old value where it stands.

use std::borrow::Cow;

use super::sql::quote_literal;

/// One column modifier
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Modifier {
    /// Column accepts NULL
    Nullable,
    /// Column rejects NULL
    NotNull,
    /// `DEFAULT <expr>`, rendered verbatim
    Default(Cow<'static, str>),
    /// Integer columns render as `unsigned <type>`
    Unsigned,
    /// `COMMENT '<text>'`
    Comment(Cow<'static, str>),
    /// Overrides the declared display size
    Size(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Nullability,
    Default,
    Unsigned,
    Comment,
    Size,
}

impl Modifier {
    const fn slot(&self) -> Slot {
        match self {
            Self::Nullable | Self::NotNull => Slot::Nullability,
            Self::Default(_) => Slot::Default,
            Self::Unsigned => Slot::Unsigned,
            Self::Comment(_) => Slot::Comment,
            Self::Size(_) => Slot::Size,
        }
    }

    /// Append this modifier's clause. `Unsigned` and `Size` change the type
    /// text instead and append nothing.
    fn write_sql(&self, out: &mut String) {
        match self {
            Self::Nullable => out.push_str(" NULL"),
            Self::NotNull => out.push_str(" NOT NULL"),
            Self::Default(value) => {
                out.push_str(" DEFAULT ");
                out.push_str(value);
            }
            Self::Comment(text) => {
                out.push_str(" COMMENT ");
                out.push_str(&quote_literal(text));
            }
            Self::Unsigned | Self::Size(_) => {}
        }
    }
}

/// Ordered modifiers of one column
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ModifierSet {
    entries: Vec<Modifier>,
}

impl ModifierSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a modifier, replacing one of the same kind in place
    pub fn set(&mut self, modifier: Modifier) {
        match self
            .entries
            .iter_mut()
            .find(|m| m.slot() == modifier.slot())
        {
            Some(existing) => *existing = modifier,
            None => self.entries.push(modifier),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modifier> {
        self.entries.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `Some(true)` for NULL, `Some(false)` for NOT NULL, `None` when the caller never said
    #[must_use]
    pub fn nullability(&self) -> Option<bool> {
        self.entries.iter().find_map(|m| match m {
            Modifier::Nullable => Some(true),
            Modifier::NotNull => Some(false),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_unsigned(&self) -> bool {
        self.entries.contains(&Modifier::Unsigned)
    }

    #[must_use]
    pub fn size(&self) -> Option<u32> {
        self.entries.iter().find_map(|m| match m {
            Modifier::Size(size) => Some(*size),
            _ => None,
        })
    }

    /// Append every modifier clause in insertion order.
    ///
    /// Columns are NOT NULL unless told otherwise: when no nullability
    /// modifier was attached, ` NOT NULL` is appended after the others.
    pub fn write_sql(&self, out: &mut String) {
        for modifier in &self.entries {
            modifier.write_sql(out);
        }
        if self.nullability().is_none() {
            Modifier::NotNull.write_sql(out);
        }
    }

    /// Render the modifier clauses into a new string
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = String::new();
        self.write_sql(&mut sql);
        sql
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = Self::new();
        for modifier in iter {
            set.set(modifier);
        }
        set
    }
}
