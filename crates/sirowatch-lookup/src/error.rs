use thiserror::Error;

/// Every way an availability check can end other than with a provider list.
///
/// `NoSuggestionsFound` and `NotAvailable` are ordinary outcomes of a run
/// (see [`LookupError::is_benign`]); everything else is a failure.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search service returned an empty suggestion list.
    #[error("no suggestions found for eircode {eircode}")]
    NoSuggestionsFound { eircode: String },

    /// The lookup page listed no retailer blocks for the address.
    #[error("SIRO is not yet available at {eircode}")]
    NotAvailable { eircode: String },

    /// Network, TLS or non-2xx status from either endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A retailer block matched the selector but lacked the provider name.
    /// The lookup page no longer has the shape this crate scrapes.
    #[error("retailer block #{index} has no `{attribute}` attribute; lookup page markup changed")]
    MissingProviderAttribute {
        index: usize,
        attribute: &'static str,
    },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl LookupError {
    /// Returns `true` for "no data" outcomes that should not alert anyone.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::NoSuggestionsFound { .. } | Self::NotAvailable { .. }
        )
    }
}
