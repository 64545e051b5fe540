// src/models/category.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Honey & Mumford learning style.
///
/// The declaration order is the tie-break order used when scoring:
/// activist, reflector, theorist, pragmatist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Activist,
    Reflector,
    Theorist,
    Pragmatist,
}

impl Category {
    /// All categories in tie-break order.
    pub const ALL: [Category; 4] = [
        Category::Activist,
        Category::Reflector,
        Category::Theorist,
        Category::Pragmatist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Activist => "activist",
            Category::Reflector => "reflector",
            Category::Theorist => "theorist",
            Category::Pragmatist => "pragmatist",
        }
    }

    /// Position of the category in `Category::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown learning style category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
