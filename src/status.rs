/// Which flow last sensed the service's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthSource {
    Catalog,
    Probes,
}

/// Single owner of the shared health verdict. The catalog refresh and the
/// probe run both report here; the most recent write wins.
#[derive(Debug, Default)]
pub struct HealthState {
    verdict: Option<(HealthSource, bool)>,
}

impl HealthState {
    pub fn report_catalog(&mut self, healthy: bool) -> bool {
        self.verdict = Some((HealthSource::Catalog, healthy));
        healthy
    }

    pub fn report_probes(&mut self, healthy: bool) -> bool {
        self.verdict = Some((HealthSource::Probes, healthy));
        healthy
    }

    /// `None` until either flow has reported.
    pub fn healthy(&self) -> Option<bool> {
        self.verdict.map(|(_, healthy)| healthy)
    }

    pub fn source(&self) -> Option<HealthSource> {
        self.verdict.map(|(source, _)| source)
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Some((source, healthy)) => {
                write!(f, "<HealthState {:?} healthy={}>", source, healthy)
            }
            None => write!(f, "<HealthState unreported>"),
        }
    }
}
