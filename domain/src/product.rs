//! Normalized shopping listings.

use crate::util::truncate_chars;
use serde::Serialize;

/// Maximum description length in characters, before the ellipsis marker.
pub const DESCRIPTION_LIMIT: usize = 160;

/// Marker appended to every normalized description.
pub const ELLIPSIS: &str = "…";

/// A normalized shopping listing (Value Object).
///
/// Ephemeral: produced by the product lookup and consumed immediately by
/// the orchestrator to format the recommendation suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    /// Listing title; may be empty when the provider omits it.
    pub name: String,
    /// Direct or provider link to the listing.
    pub link: String,
    /// Description truncated to [`DESCRIPTION_LIMIT`] characters, always
    /// ending with [`ELLIPSIS`].
    pub description: String,
}

impl ProductRecord {
    /// Build a record with a normalized description.
    ///
    /// The raw description is truncated to [`DESCRIPTION_LIMIT`] characters
    /// and the ellipsis marker is appended whether or not truncation was
    /// needed.
    pub fn normalized(
        name: impl Into<String>,
        link: impl Into<String>,
        raw_description: &str,
    ) -> Self {
        let mut description = truncate_chars(raw_description, DESCRIPTION_LIMIT).to_string();
        description.push_str(ELLIPSIS);
        Self {
            name: name.into(),
            link: link.into(),
            description,
        }
    }
}
