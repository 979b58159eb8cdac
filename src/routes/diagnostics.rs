use axum::{Json, extract::State};

use crate::{
    services::connectivity::{DiagnosticReport, ProbeStatus},
    state::SharedState,
};

/// Reports backend liveness and data store reachability. Probe failures end
/// up in the report body, never as an error status.
pub async fn test_handler(State(state): State<SharedState>) -> Json<DiagnosticReport> {
    let probe = state.probe.clone();

    let status = tokio::task::spawn_blocking(move || probe.probe())
        .await
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "connectivity probe aborted");
            ProbeStatus::Failed(err.to_string())
        });

    match &status {
        ProbeStatus::Connected { name, collections } => tracing::info!(
            database = name.as_deref().unwrap_or("unnamed"),
            collections = collections.len(),
            "database reachable"
        ),
        other => tracing::info!(status = ?other, "database not reachable"),
    }

    Json(DiagnosticReport::new(status, state.database_env))
}
