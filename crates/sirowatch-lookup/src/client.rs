//! HTTP client for SIRO's eircode search and address lookup endpoints.
//!
//! Both calls are made once, in order, with no retries. Non-2xx responses
//! surface as [`LookupError::Http`].

use std::time::Duration;

use reqwest::{header, Client, Url};

use crate::error::LookupError;
use crate::form::{encode_lookup_form, CONTENT_TYPE_FORM};
use crate::parse::parse_providers;
use crate::types::{ProviderSet, SearchResponse, Suggestion};

pub const DEFAULT_SEARCH_URL: &str = "https://service.siro.ie/search-eircode";
pub const DEFAULT_LOOKUP_URL: &str = "https://siro.ie/address-lookup-result";

const QUERY_PARAM: &str = "query";

/// Client for the SIRO availability lookup.
///
/// Use [`SiroClient::new`] for production or [`SiroClient::with_endpoints`]
/// to point at a mock server in tests.
pub struct SiroClient {
    client: Client,
    search_url: Url,
    lookup_url: Url,
}

impl SiroClient {
    /// Creates a client pointed at the production SIRO endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LookupError> {
        Self::with_endpoints(
            timeout_secs,
            user_agent,
            DEFAULT_SEARCH_URL,
            DEFAULT_LOOKUP_URL,
        )
    }

    /// Creates a client with custom endpoint URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidEndpoint`] if either
    /// URL does not parse.
    pub fn with_endpoints(
        timeout_secs: u64,
        user_agent: &str,
        search_url: &str,
        lookup_url: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            search_url: parse_endpoint(search_url)?,
            lookup_url: parse_endpoint(lookup_url)?,
        })
    }

    /// Resolves an eircode to the first address suggestion of the search
    /// service. The eircode is sent as-is.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NoSuggestionsFound`] if the suggestion list is empty.
    /// - [`LookupError::Http`] on network failure or non-2xx HTTP status.
    /// - [`LookupError::Deserialize`] if the body is not the expected JSON.
    pub async fn resolve(&self, eircode: &str) -> Result<Suggestion, LookupError> {
        let url = self.search_url_for(eircode);
        tracing::debug!(eircode, %url, "searching eircode");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
                context: format!("search-eircode(query={eircode})"),
                source: e,
            })?;
        tracing::debug!(
            eircode,
            suggestions = search.suggestions.len(),
            "search-eircode responded"
        );

        first_suggestion(search, eircode)
    }

    /// Posts `suggestion` to the address lookup page and returns the providers
    /// it lists.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotAvailable`] if the page lists no retailer blocks.
    /// - [`LookupError::MissingProviderAttribute`] if a retailer block has no
    ///   provider name.
    /// - [`LookupError::Http`] on network failure or non-2xx HTTP status.
    pub async fn extract(&self, suggestion: &Suggestion) -> Result<ProviderSet, LookupError> {
        let eircode = suggestion.data.eircode.as_str();
        tracing::debug!(
            eircode,
            premise_id = %suggestion.data.premise_id,
            "looking up address availability"
        );

        let response = self
            .client
            .post(self.lookup_url.clone())
            .header(header::CONTENT_TYPE, CONTENT_TYPE_FORM)
            .header(header::ACCEPT, "text/html")
            .body(encode_lookup_form(suggestion))
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;

        parse_providers(&html)?.ok_or_else(|| LookupError::NotAvailable {
            eircode: eircode.to_owned(),
        })
    }

    /// Runs [`resolve`](Self::resolve) then [`extract`](Self::extract).
    ///
    /// # Errors
    ///
    /// Propagates every error of the two steps unchanged.
    pub async fn check_availability(&self, eircode: &str) -> Result<ProviderSet, LookupError> {
        let suggestion = self.resolve(eircode).await?;
        tracing::info!(eircode, address = %suggestion.value, "resolved eircode");

        let providers = self.extract(&suggestion).await?;
        tracing::info!(eircode, providers = providers.len(), "service available");
        Ok(providers)
    }

    fn search_url_for(&self, eircode: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair(QUERY_PARAM, eircode);
        url
    }
}

/// Picks the authoritative suggestion: the first one, unmodified.
fn first_suggestion(search: SearchResponse, eircode: &str) -> Result<Suggestion, LookupError> {
    search
        .suggestions
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::NoSuggestionsFound {
            eircode: eircode.to_owned(),
        })
}

fn parse_endpoint(raw: &str) -> Result<Url, LookupError> {
    Url::parse(raw).map_err(|e| LookupError::InvalidEndpoint {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
