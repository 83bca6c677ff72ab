//! Slug validation and identifier normalization.

use crate::error::{PanelError, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug regex is valid"));

/// Returns true if `slug` only contains ASCII letters, digits, `-` and `_`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

/// Normalizes a display string into an identifier token.
///
/// - empty or ASCII-digit-leading input gets a `_` prefix
/// - the first character is uppercased
/// - every `-` becomes `_`
///
/// Nothing else is escaped, so exotic input can still produce a token that
/// is not a valid C++ identifier.
///
/// # Examples
///
/// ```
/// use panelgen::models::slug_to_identifier;
///
/// assert_eq!(slug_to_identifier("cv-in"), "Cv_in");
/// assert_eq!(slug_to_identifier("8step"), "_8step");
/// assert_eq!(slug_to_identifier(""), "_");
/// ```
#[must_use]
pub fn slug_to_identifier(slug: &str) -> String {
    let prefixed;
    let slug: &str = match slug.chars().next() {
        None => "_",
        Some(first) if first.is_ascii_digit() => {
            prefixed = format!("_{slug}");
            prefixed.as_str()
        }
        Some(_) => slug,
    };

    let mut chars = slug.chars();
    let mut identifier = String::with_capacity(slug.len());
    if let Some(first) = chars.next() {
        identifier.extend(first.to_uppercase());
    }
    identifier.push_str(chars.as_str());
    identifier.replace('-', "_")
}

/// Namespace qualifier shared by every generated statement (`Identifier::member`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleIdentifier(String);

impl ModuleIdentifier {
    /// Validates a module slug and normalizes it.
    pub fn from_slug(slug: &str) -> Result<Self> {
        if !is_valid_slug(slug) {
            return Err(PanelError::InvalidSlug {
                slug: slug.to_string(),
            });
        }
        Ok(Self(slug_to_identifier(slug)))
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
