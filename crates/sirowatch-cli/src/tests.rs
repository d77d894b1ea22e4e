use serde_json::json;
use sirowatch_lookup::{LookupError, ProviderSet, SiroClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::report::{ALERT_EXIT, QUIET_EXIT};

fn providers(names: &[&str]) -> ProviderSet {
    ProviderSet::from_names(names.iter().copied()).expect("non-empty provider list")
}

fn mock_client(server: &MockServer) -> SiroClient {
    SiroClient::with_endpoints(
        5,
        "sirowatch-test/0.1",
        &format!("{}/search-eircode", server.uri()),
        &format!("{}/address-lookup-result", server.uri()),
    )
    .expect("client construction should not fail")
}

#[test]
fn parses_without_arguments() {
    let cli = Cli::try_parse_from(["sirowatch"]).expect("expected valid cli args");
    assert!(cli.eircode.is_none());
}

#[test]
fn parses_eircode_override() {
    let cli = Cli::try_parse_from(["sirowatch", "--eircode", "A91C85C"])
        .expect("expected valid cli args");
    assert_eq!(cli.eircode.as_deref(), Some("A91C85C"));
}

#[test]
fn rejects_positional_arguments() {
    assert!(Cli::try_parse_from(["sirowatch", "A91C85C", "D02X285"]).is_err());
}

#[test]
fn available_outcome_takes_the_alert_exit() {
    let outcome = Outcome::classify(Ok(providers(&["Vodafone", "Sky"]))).expect("not fatal");

    assert_eq!(outcome.exit_status(), ALERT_EXIT);
    assert_eq!(
        outcome.message(),
        "SIRO is available via the following internet service providers: Sky, Vodafone"
    );
}

#[test]
fn no_suggestions_outcome_is_quiet_and_names_the_eircode() {
    let outcome = Outcome::classify(Err(LookupError::NoSuggestionsFound {
        eircode: "X00X000".to_string(),
    }))
    .expect("not fatal");

    assert_eq!(outcome.exit_status(), QUIET_EXIT);
    assert!(outcome.message().contains("X00X000"));
}

#[test]
fn not_available_outcome_is_quiet_and_names_the_eircode() {
    let outcome = Outcome::classify(Err(LookupError::NotAvailable {
        eircode: "A91C85C".to_string(),
    }))
    .expect("not fatal");

    assert_eq!(outcome.exit_status(), QUIET_EXIT);
    assert_eq!(outcome.message(), "SIRO is not yet available at A91C85C");
}

#[test]
fn contract_violation_is_fatal() {
    let result = Outcome::classify(Err(LookupError::MissingProviderAttribute {
        index: 0,
        attribute: "data-provider-name",
    }));
    assert!(matches!(
        result,
        Err(LookupError::MissingProviderAttribute { .. })
    ));
}

#[test]
fn missing_eircode_exits_fatally() {
    let err = sirowatch_core::ConfigError::MissingEnvVar("EIRCODE".to_string());
    assert_eq!(exit_status(Err(err.into())), FATAL_EXIT);
}

#[test]
fn lookup_failure_exits_fatally() {
    let err = LookupError::MissingProviderAttribute {
        index: 2,
        attribute: "data-provider-name",
    };
    assert_eq!(exit_status(Err(err.into())), FATAL_EXIT);
}

#[test]
fn reported_outcomes_keep_their_status() {
    assert_eq!(exit_status(Ok(ALERT_EXIT)), ALERT_EXIT);
    assert_eq!(exit_status(Ok(QUIET_EXIT)), QUIET_EXIT);
}

#[test]
fn exit_statuses_are_distinct() {
    assert_ne!(QUIET_EXIT, ALERT_EXIT);
    assert_ne!(ALERT_EXIT, FATAL_EXIT);
    assert_ne!(QUIET_EXIT, FATAL_EXIT);
}

#[tokio::test]
async fn available_address_ends_on_the_alert_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-eircode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": [{
                "value": "1 Main St",
                "data": {"premiseId": "123", "county": "Dublin", "town": "Swords", "eircode": "A91C85C"}
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/address-lookup-result"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div><div class="retailers_block">
                 <div data-provider-name="Vodafone"></div>
                 <div data-provider-name="Sky"></div>
               </div></div>"#,
        ))
        .mount(&server)
        .await;

    let result = mock_client(&server).check_availability("A91C85C").await;
    let outcome = Outcome::classify(result).expect("not fatal");

    assert_eq!(outcome, Outcome::Available(providers(&["Sky", "Vodafone"])));
    assert_eq!(outcome.exit_status(), ALERT_EXIT);
}

#[tokio::test]
async fn unknown_eircode_ends_quietly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-eircode"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"query": "X00X000", "suggestions": []})),
        )
        .mount(&server)
        .await;

    let result = mock_client(&server).check_availability("X00X000").await;
    let outcome = Outcome::classify(result).expect("not fatal");

    assert_eq!(outcome.exit_status(), QUIET_EXIT);
    assert!(outcome.message().contains("X00X000"));
}

#[tokio::test]
async fn address_without_retailers_ends_quietly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-eircode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestions": [{
                "value": "1 Main St",
                "data": {"premiseId": "123", "county": "Dublin", "town": "Swords", "eircode": "A91C85C"}
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/address-lookup-result"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<div><p>Register interest</p></div>"),
        )
        .mount(&server)
        .await;

    let result = mock_client(&server).check_availability("A91C85C").await;
    let outcome = Outcome::classify(result).expect("not fatal");

    assert_eq!(outcome.exit_status(), QUIET_EXIT);
    assert!(outcome.message().contains("A91C85C"));
}
