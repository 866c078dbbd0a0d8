//! One name or a list of names.
//!
//! Several operations take either a single identifier or a list of them and
//! behave differently for each: dropping tables, dropping columns, choosing
//! new names in `change`, and listing index columns.

use std::borrow::Cow;

/// A single name or an ordered list of names
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Names {
    One(Cow<'static, str>),
    Many(Vec<Cow<'static, str>>),
}

impl Names {
    /// Whether the caller supplied a list
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(names) => names.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cow<'static, str>> {
        let names: &[Cow<'static, str>] = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        };
        names.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Cow<'static, str>> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self::One(Cow::Owned(name.to_string()))
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self::One(Cow::Owned(name))
    }
}

impl From<Cow<'static, str>> for Names {
    fn from(name: Cow<'static, str>) -> Self {
        Self::One(name)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Self::from(names.as_slice())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names.into_iter().map(Cow::Owned).collect())
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|name| Cow::Owned(name.to_string())).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Self::from(names.as_slice())
    }
}

impl<const N: usize> From<[String; N]> for Names {
    fn from(names: [String; N]) -> Self {
        Self::Many(names.into_iter().map(Cow::Owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_list() {
        let one = Names::from("users");
        assert!(!one.is_list());
        assert_eq!(one.len(), 1);

        let many = Names::from(["a", "b"]);
        assert!(many.is_list());
        assert_eq!(many.iter().count(), 2);
        assert_eq!(many.into_vec(), ["a", "b"]);
    }

    #[test]
    fn test_borrowed_runtime_names() {
        let table = format!("{}_{}", "audit", 2024);
        let names = Names::from(table.as_str());
        drop(table);
        assert_eq!(names.into_vec(), ["audit_2024"]);

        let owned = vec!["x".to_string(), "y".to_string()];
        let borrowed: Vec<&str> = owned.iter().map(String::as_str).collect();
        assert_eq!(Names::from(borrowed).into_vec(), ["x", "y"]);
    }

    #[test]
    fn test_one_element_list_is_still_a_list() {
        let names = Names::from(vec!["only".to_string()]);
        assert!(names.is_list());
        assert_eq!(names.into_vec(), ["only"]);
    }
}
