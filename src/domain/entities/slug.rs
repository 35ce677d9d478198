//! URL-safe identifiers derived from names.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Runs of characters that are not lowercase ASCII letters or digits.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator regex is valid"));

/// Slug used when a name contains no usable characters.
const FALLBACK_SLUG: &str = "travel";

/// A lowercase, hyphen-separated identifier such as `"iceland-hiking-2"`.
///
/// Generated once from a travel's name on creation and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derives a slug from a human-readable name.
    ///
    /// ```ignore
    /// assert_eq!(Slug::from_name("Jordan 360°").as_str(), "jordan-360");
    /// ```
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let slug = SEPARATOR_REGEX.replace_all(&lowered, "-");
        let slug = slug.trim_matches('-');

        if slug.is_empty() {
            Self(FALLBACK_SLUG.to_string())
        } else {
            Self(slug.to_string())
        }
    }

    /// Returns the slug disambiguated with a numeric suffix.
    ///
    /// Suffix `1` keeps the slug unchanged; `2` and above append `-N`.
    pub fn with_suffix(&self, n: u32) -> Self {
        if n <= 1 {
            self.clone()
        } else {
            Self(format!("{}-{n}", self.0))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Slug {
    /// Wraps an already-stored slug without re-deriving it.
    fn from(value: String) -> Self {
        Self(value)
    }
}
