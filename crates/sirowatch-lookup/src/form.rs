//! `application/x-www-form-urlencoded` body for `POST /address-lookup-result`.

use url::form_urlencoded;

use crate::types::Suggestion;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub const FIELD_VALUE: &str = "data[value]";
pub const FIELD_PREMISE_ID: &str = "data[premiseId]";
pub const FIELD_COUNTY: &str = "data[county]";
pub const FIELD_TOWN: &str = "data[town]";
pub const FIELD_EIRCODE: &str = "data[eircode]";

/// Encodes the five suggestion fields the lookup page expects.
pub fn encode_lookup_form(suggestion: &Suggestion) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(FIELD_VALUE, &suggestion.value)
        .append_pair(FIELD_PREMISE_ID, &suggestion.data.premise_id)
        .append_pair(FIELD_COUNTY, &suggestion.data.county)
        .append_pair(FIELD_TOWN, &suggestion.data.town)
        .append_pair(FIELD_EIRCODE, &suggestion.data.eircode)
        .finish()
}
