//! Maps the lookup result onto the process boundary: the message printed on
//! stdout and the exit status an external monitor alerts on.

use sirowatch_lookup::{LookupError, ProviderSet};

/// Nothing to alert on.
pub(crate) const QUIET_EXIT: u8 = 0;
/// SIRO is available. Non-zero so the monitor fires.
pub(crate) const ALERT_EXIT: u8 = 1;
pub(crate) const FATAL_EXIT: u8 = 2;

/// Terminal state of a run that did not fail.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    NoSuggestions { eircode: String },
    NotAvailable { eircode: String },
    Available(ProviderSet),
}

impl Outcome {
    /// Splits a lookup result into a reportable outcome or a fatal error.
    pub(crate) fn classify(
        result: Result<ProviderSet, LookupError>,
    ) -> Result<Self, LookupError> {
        match result {
            Ok(providers) => Ok(Self::Available(providers)),
            Err(LookupError::NoSuggestionsFound { eircode }) => {
                Ok(Self::NoSuggestions { eircode })
            }
            Err(LookupError::NotAvailable { eircode }) => Ok(Self::NotAvailable { eircode }),
            Err(
                e @ (LookupError::Http(_)
                | LookupError::Deserialize { .. }
                | LookupError::MissingProviderAttribute { .. }
                | LookupError::InvalidEndpoint { .. }),
            ) => Err(e),
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::NoSuggestions { eircode } => {
                format!("no suggestions found for eircode {eircode}")
            }
            Self::NotAvailable { eircode } => format!("SIRO is not yet available at {eircode}"),
            Self::Available(providers) => format!(
                "SIRO is available via the following internet service providers: {providers}"
            ),
        }
    }

    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::NoSuggestions { .. } | Self::NotAvailable { .. } => QUIET_EXIT,
            Self::Available(_) => ALERT_EXIT,
        }
    }
}
