use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Literal used for the "no category filter" tab.
///
/// Reserved: a catalog category spelled exactly like this cannot be selected
/// by text, only through `CategorySelection::Named`.
pub const ALL_CATEGORIES: &str = "All";

/// Stable identifier for a concept record, assigned when the catalog is authored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(pub u32);

/// Free-text grouping label attached to every concept record.
///
/// Not a closed set; any record may introduce a new category.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label collides with the `All` sentinel.
    pub fn is_reserved(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tab chosen by the user.
///
/// `All` disables category filtering; `Named` requires an exact,
/// case-sensitive match on the record's category.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Named(Category),
}

impl CategorySelection {
    pub fn named(value: impl Into<String>) -> Self {
        CategorySelection::Named(Category::new(value))
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Named(category) => category.as_str(),
        }
    }

    /// Parse a selection typed by the user. Only the exact sentinel maps to `All`.
    pub fn from_text(value: &str) -> Self {
        match value {
            ALL_CATEGORIES => CategorySelection::All,
            other => CategorySelection::Named(Category::new(other)),
        }
    }

    pub fn admits(&self, category: &Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Named(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Named(category)
    }
}

impl Serialize for CategorySelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategorySelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_text(&value))
    }
}
