// src/services/connectivity.rs
use serde::Serialize;

const MAX_ERROR_CHARS: usize = 50;
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Outcome of asking the data store whether it is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// No data store is wired into this deployment.
    Unconfigured,
    /// A store handle exists but was never initialized.
    Uninitialized,
    Connected { name: Option<String>, collections: Vec<String> },
    /// Handle is live but listing collections failed.
    ConnectedWithError(String),
    Failed(String),
}

/// Capability handed to the diagnostics endpoint. Implementations block, so
/// callers run them off the async executor.
pub trait ConnectivityProbe: Send + Sync {
    fn probe(&self) -> ProbeStatus;
}

/// Default probe for deployments without a data store.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredProbe;

impl ConnectivityProbe for UnconfiguredProbe {
    fn probe(&self) -> ProbeStatus {
        ProbeStatus::Unconfigured
    }
}

/// Which database variables were present at startup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    pub fn new(status: ProbeStatus, env: DatabaseEnv) -> Self {
        let mut connection_status = "Not Connected";
        let mut collections = Vec::new();

        let database = match status {
            ProbeStatus::Unconfigured => {
                "❌ Database module not found (run enable-database first)".to_string()
            }
            ProbeStatus::Uninitialized => "⚠️  Available but not initialized".to_string(),
            ProbeStatus::Connected { collections: names, .. } => {
                connection_status = "Connected";
                collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                "✅ Connected & Working".to_string()
            }
            ProbeStatus::ConnectedWithError(err) => {
                connection_status = "Connected";
                format!("⚠️  Connected but Error: {}", truncate_chars(&err, MAX_ERROR_CHARS))
            }
            ProbeStatus::Failed(err) => {
                format!("❌ Error: {}", truncate_chars(&err, MAX_ERROR_CHARS))
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: set_marker(env.url_set),
            database_name: set_marker(env.name_set),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}

fn set_marker(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
