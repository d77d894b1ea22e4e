//! Provider scan over the HTML fragment returned by `/address-lookup-result`.
//!
//! Each offering on the page is a `div` directly inside a
//! `.retailers_block` container that itself sits inside a `div`:
//!
//! ```html
//! <div class="results">
//!   <div class="retailers_block">
//!     <div data-provider-name="Sky">...</div>
//!     <div data-provider-name="Vodafone">...</div>
//!   </div>
//! </div>
//! ```
//!
//! The selector and attribute name bind to a page we do not control, so they
//! are kept here and nowhere else.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::LookupError;
use crate::types::ProviderSet;

pub const RETAILER_SELECTOR: &str = "div .retailers_block > div";
pub const PROVIDER_NAME_ATTR: &str = "data-provider-name";

static RETAILER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(RETAILER_SELECTOR).expect("valid retailer selector"));

/// Scans `html` for retailer blocks and returns their provider names.
///
/// Returns `Ok(None)` when no block matches, i.e. the address has no service.
///
/// # Errors
///
/// Returns [`LookupError::MissingProviderAttribute`] if any matched block has
/// no `data-provider-name` attribute.
pub fn parse_providers(html: &str) -> Result<Option<ProviderSet>, LookupError> {
    let document = Html::parse_document(html);

    let names = document
        .select(&RETAILER)
        .enumerate()
        .map(|(index, block)| {
            block
                .value()
                .attr(PROVIDER_NAME_ATTR)
                .map(str::to_owned)
                .ok_or(LookupError::MissingProviderAttribute {
                    index,
                    attribute: PROVIDER_NAME_ATTR,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(matched = names.len(), "scanned lookup page for retailer blocks");
    Ok(ProviderSet::from_names(names))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
