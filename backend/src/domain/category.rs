//! Question categories.
//!
//! Categories are seeded outside the API and are read-only here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned category identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labelled category that questions point at.
///
/// Serialises as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: CategoryId,
    /// Display label.
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
}

impl Category {
    /// Build a category record.
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories keyed by identifier, serialised as a JSON object of
/// `"<id>": "<type>"` pairs in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
pub struct CategoryMap(BTreeMap<CategoryId, String>);

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|category| (category.id, category.kind))
                .collect(),
        )
    }
}

/// Categories loaded into stores that start without a database.
pub fn default_categories() -> Vec<Category> {
    [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ]
    .into_iter()
    .map(|(id, kind)| Category::new(CategoryId::new(id), kind))
    .collect()
}
