/// Runtime settings for a single availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Eircode to look up. Trimmed, never empty.
    pub eircode: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
