use clap::builder::PossibleValue;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
pub struct Cli {
    /// Root URL of the address-generation service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Time in seconds before giving up
    #[arg(short, long, default_value = "8")]
    pub timeout: usize,

    /// Logging level
    #[arg(long = "log", default_value = "warn",
        value_parser([
            PossibleValue::new("debug"),
            PossibleValue::new("info"),
            PossibleValue::new("warn"),
            PossibleValue::new("error")
        ])
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub sub: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the countries the service can generate addresses for
    Countries,

    /// Generate an address, random or scoped to one country
    Generate(GenerateArgs),

    /// Check the health of every service endpoint
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// ISO code of the country the address should be located in.
    /// Empty means a random address
    #[arg(short, long, default_value = "")]
    pub country: String,

    /// Country name to match instead of a code
    #[arg(short, long, conflicts_with = "country")]
    pub name: Option<String>,
}
