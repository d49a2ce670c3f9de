use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

use crate::{client::Transport, error_context, panel::Panel, status::HealthState};

pub const COUNTRIES_ENDPOINT: &str = "/api/countries";

// The selector's fixed first option; submitting it requests a random address.
pub const RANDOM_OPTION: &str = "Random Address";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    pub count: u64,
}

/// One fetched `/api/countries` payload: country code -> info.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CountryInfo>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, CountryInfo>) -> Self {
        Catalog { entries }
    }

    pub fn total_dataset_count(&self) -> u64 {
        self.entries.values().map(|info| info.count).sum()
    }

    pub fn total_country_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries ordered by display name ascending, case-insensitively. Codes
    /// and counts play no part in the ordering.
    pub fn sorted_entries(&self) -> Vec<(&str, &CountryInfo)> {
        let mut entries: Vec<(&str, &CountryInfo)> = self
            .entries
            .iter()
            .map(|(code, info)| (code.as_str(), info))
            .collect();
        entries.sort_by(|a, b| a.1.name.to_lowercase().cmp(&b.1.name.to_lowercase()));
        entries
    }

    /// Option lines for the country selector, random option first.
    pub fn selector_options(&self) -> Vec<String> {
        let mut options = vec![RANDOM_OPTION.to_string()];
        for (code, info) in self.sorted_entries() {
            options.push(format!("{} ({}) - {} datasets", info.name, code, info.count));
        }
        options
    }

    /// Lines for the country list, in the same order as the selector.
    pub fn list_entries(&self) -> Vec<String> {
        self.sorted_entries()
            .iter()
            .map(|(code, info)| format!("{} ({})", info.name, code))
            .collect()
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Catalog {} countries {} datasets>",
            self.total_country_count(),
            self.total_dataset_count()
        )
    }
}

/// Owns the process-wide catalog cache. `refresh` is the only way in;
/// consumers pull the latest value through `current`.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: Option<Catalog>,
}

impl CatalogStore {
    pub fn current(&self) -> Option<&Catalog> {
        self.current.as_ref()
    }

    /// Fetches the catalog and, on success, replaces the cache wholesale and
    /// re-derives every consumer slot from it. On failure the cached value
    /// stays for internal use while the visible counters degrade and the
    /// status flips to unhealthy. Returns whether the refresh succeeded.
    pub async fn refresh(
        &mut self,
        transport: &dyn Transport,
        panel: &mut dyn Panel,
        state: &mut HealthState,
    ) -> bool {
        match self.fetch(transport).await {
            Ok(catalog) => {
                log::info!("catalog refreshed: {}", catalog);
                panel.set_counters(Some((
                    catalog.total_dataset_count(),
                    catalog.total_country_count(),
                )));
                panel.set_selector_options(catalog.selector_options());
                panel.set_country_list(catalog.list_entries());
                let healthy = state.report_catalog(true);
                panel.set_health(healthy);
                self.current = Some(catalog);
                true
            }
            Err(err) => {
                log::error!("catalog refresh failed: {:?}", err);
                panel.set_counters(None);
                let healthy = state.report_catalog(false);
                panel.set_health(healthy);
                false
            }
        }
    }

    async fn fetch(&self, transport: &dyn Transport) -> anyhow::Result<Catalog> {
        let response = transport
            .get(COUNTRIES_ENDPOINT)
            .await
            .context(error_context!())?;
        if !response.is_ok() {
            anyhow::bail!("countries endpoint returned status {}", response.status);
        }
        let entries: HashMap<String, CountryInfo> =
            serde_json::from_slice(&response.body).context(error_context!())?;
        Ok(Catalog::new(entries))
    }
}
