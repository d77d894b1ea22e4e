//! Response types for `GET /search-eircode` and the scraped provider list.
//!
//! The search service answers with an autocomplete-style envelope:
//!
//! ```json
//! { "query": "A91C85C",
//!   "suggestions": [ { "value": "1 Main St",
//!                      "data": { "premiseId": "123", "county": "Dublin",
//!                                "town": "Swords", "eircode": "A91C85C" } } ] }
//! ```
//!
//! Missing or `null` `suggestions` is treated the same as an empty list, and
//! missing or `null` `data` fields decode as empty strings. Suggestion order is significant:
//! the first entry is the one submitted to the lookup page.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

/// Top-level response from `GET /search-eircode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<Suggestion>,
}

/// One candidate address matched by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Display address, e.g. `"1 Main St, Swords, Co. Dublin"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: SuggestionData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestionData {
    #[serde(deserialize_with = "null_as_default")]
    pub premise_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub county: String,
    #[serde(deserialize_with = "null_as_default")]
    pub town: String,
    #[serde(deserialize_with = "null_as_default")]
    pub eircode: String,
}

/// Decodes an explicit `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Retail providers offering service at an address.
///
/// Always non-empty, sorted ascending and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSet(Vec<String>);

impl ProviderSet {
    /// Deduplicates and sorts `names`. Returns `None` when there are none.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if unique.is_empty() {
            return None;
        }
        Some(Self(unique.into_iter().collect()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
