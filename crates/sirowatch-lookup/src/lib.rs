//! Fibre availability lookup against SIRO's public endpoints.
//!
//! The pipeline is two sequential requests: [`SiroClient::resolve`] turns an
//! eircode into the first address suggestion from the search service, and
//! [`SiroClient::extract`] posts that suggestion to the address lookup page
//! and scrapes the retail providers offered there.

pub mod client;
pub mod error;
pub mod form;
pub mod parse;
pub mod types;

pub use client::{SiroClient, DEFAULT_LOOKUP_URL, DEFAULT_SEARCH_URL};
pub use error::LookupError;
pub use parse::parse_providers;
pub use types::{ProviderSet, SearchResponse, Suggestion, SuggestionData};
