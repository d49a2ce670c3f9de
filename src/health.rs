use futures_util::{stream, StreamExt};

use crate::{client::Transport, panel::Panel, status::HealthState};

/// Endpoints exercised by one health run, in report order.
pub const PROBE_ENDPOINTS: &[&str] = &[
    "/api/countries",
    "/api/random",
    "/api/address?code=us",
    "/api/address?name=bangladesh",
];

// Probes in flight at once.
const MAX_CONCURRENT_PROBES: usize = 4;

pub const CHECKING_TEXT: &str = "Checking all API endpoints...";
pub const ALL_HEALTHY_TEXT: &str = "All API endpoints are healthy!";
pub const SOME_UNHEALTHY_TEXT: &str = "Some API endpoints are unhealthy.";

#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub endpoint: String,
    pub ok: bool,
    pub detail: String,
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ok {
            write!(f, "Endpoint {} healthy.", self.endpoint)
        } else {
            write!(f, "Endpoint {} failed: {}", self.endpoint, self.detail)
        }
    }
}

/// One aggregation run. Not persisted anywhere; built fresh each time.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub healthy: bool,
    pub probes: Vec<ProbeOutcome>,
}

/// Probes every endpoint and reduces the outcomes to one verdict. Requests
/// may overlap but the outcomes keep `endpoints` order.
pub async fn probe_all(transport: &dyn Transport, endpoints: &[&str]) -> HealthReport {
    let futures = endpoints.iter().map(|endpoint| async move {
        match transport.get(endpoint).await {
            Ok(response) if response.is_ok() => ProbeOutcome {
                endpoint: endpoint.to_string(),
                ok: true,
                detail: String::new(),
            },
            Ok(response) => ProbeOutcome {
                endpoint: endpoint.to_string(),
                ok: false,
                detail: response.status.to_string(),
            },
            Err(err) => ProbeOutcome {
                endpoint: endpoint.to_string(),
                ok: false,
                detail: err.to_string(),
            },
        }
    });

    let probes: Vec<ProbeOutcome> = stream::iter(futures)
        .buffered(MAX_CONCURRENT_PROBES)
        .collect()
        .await;
    let healthy = probes.iter().all(|probe| probe.ok);
    HealthReport { healthy, probes }
}

/// Runs the fixed probe set, writing one status line per probe plus a
/// summary to the output pane, and reports the verdict to the shared health
/// state (last writer wins against the catalog path).
pub async fn run_all(
    transport: &dyn Transport,
    panel: &mut dyn Panel,
    state: &mut HealthState,
) -> HealthReport {
    panel.set_output(CHECKING_TEXT.to_string());

    let report = probe_all(transport, PROBE_ENDPOINTS).await;
    for probe in &report.probes {
        if !probe.ok {
            log::warn!("{}", probe);
        }
        panel.append_output(probe.to_string());
    }

    if report.healthy {
        panel.append_output(ALL_HEALTHY_TEXT.to_string());
    } else {
        panel.append_output(SOME_UNHEALTHY_TEXT.to_string());
    }

    let healthy = state.report_probes(report.healthy);
    panel.set_health(healthy);
    report
}
