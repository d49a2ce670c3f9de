use owo_colors::OwoColorize;

/// Shown in place of both counters whenever the last catalog refresh failed.
pub const UNAVAILABLE: &str = "N/A";

pub const HEALTHY_TEXT: &str = "API Status: Healthy";
pub const UNHEALTHY_TEXT: &str = "API Status: Unhealthy";

/// The named slots of the page. The controller only ever writes slots; how
/// and when they become visible is up to the implementation.
pub trait Panel {
    /// Health indicator plus its text label.
    fn set_health(&mut self, healthy: bool);

    /// Dataset and country counters. `None` degrades both to [`UNAVAILABLE`].
    fn set_counters(&mut self, totals: Option<(u64, usize)>);

    /// Country selector options, already ordered for display.
    fn set_selector_options(&mut self, options: Vec<String>);

    /// The country list, already ordered for display.
    fn set_country_list(&mut self, entries: Vec<String>);

    /// Replaces the output pane wholesale.
    fn set_output(&mut self, content: String);

    /// Appends one line to the output pane, keeping what is already there.
    fn append_output(&mut self, line: String);
}

/// Holds the slot contents and renders them to stdout on demand, one section
/// per command.
#[derive(Debug, Default)]
pub struct TerminalPanel {
    healthy: Option<bool>,
    dataset_count: String,
    country_count: String,
    selector_options: Vec<String>,
    country_list: Vec<String>,
    output: Vec<String>,
}

impl TerminalPanel {
    pub fn render_status(&self) {
        match self.healthy {
            Some(true) => println!("{} {}", "●".green(), HEALTHY_TEXT),
            Some(false) => println!("{} {}", "●".red(), UNHEALTHY_TEXT),
            None => {}
        }
        if !self.dataset_count.is_empty() {
            println!("Datasets: {}", self.dataset_count);
            println!("Countries: {}", self.country_count);
        }
    }

    pub fn render_catalog(&self) {
        if !self.selector_options.is_empty() {
            println!();
            for option in &self.selector_options {
                println!("  {}", option);
            }
        }
        if !self.country_list.is_empty() {
            println!();
            println!("Available countries:");
            for entry in &self.country_list {
                println!("  {}", entry);
            }
        }
    }

    pub fn render_output(&self) {
        if !self.output.is_empty() {
            println!();
            for line in &self.output {
                println!("{}", line);
            }
        }
    }
}

impl Panel for TerminalPanel {
    fn set_health(&mut self, healthy: bool) {
        self.healthy = Some(healthy);
    }

    fn set_counters(&mut self, totals: Option<(u64, usize)>) {
        match totals {
            Some((datasets, countries)) => {
                self.dataset_count = datasets.to_string();
                self.country_count = countries.to_string();
            }
            None => {
                self.dataset_count = UNAVAILABLE.to_string();
                self.country_count = UNAVAILABLE.to_string();
            }
        }
    }

    fn set_selector_options(&mut self, options: Vec<String>) {
        self.selector_options = options;
    }

    fn set_country_list(&mut self, entries: Vec<String>) {
        self.country_list = entries;
    }

    fn set_output(&mut self, content: String) {
        self.output = vec![content];
    }

    fn append_output(&mut self, line: String) {
        self.output.push(line);
    }
}
