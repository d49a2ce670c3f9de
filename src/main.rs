#![allow(dead_code)]

use clap::Parser;
use std::process;
use tokio::runtime;

use crate::{
    argument::{Cli, Commands},
    catalog::CatalogStore,
    client::HttpTransport,
    dispatcher::Selection,
    panel::TerminalPanel,
    status::HealthState,
    utils::logger::setup_logger,
};

mod argument;
mod catalog;
mod client;
mod dispatcher;
mod formatter;
mod health;
mod panel;
mod status;
mod utils;


fn main() {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    if let Err(err) = setup_logger(Some(log_level)) {
        eprintln!("unable to initialize logger: {}", err);
        process::exit(1);
    }

    let transport = match HttpTransport::new(&cli.base_url, cli.timeout as u64) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("{:?}", err);
            process::exit(1);
        }
    };

    runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
        .block_on(async move {
            let mut panel = TerminalPanel::default();
            let mut state = HealthState::default();
            let mut store = CatalogStore::default();

            match cli.sub {
                Commands::Countries => {
                    store.refresh(&transport, &mut panel, &mut state).await;
                    panel.render_status();
                    panel.render_catalog();
                }
                Commands::Generate(args) => {
                    store.refresh(&transport, &mut panel, &mut state).await;
                    let selection = if let Some(name) = args.name {
                        Selection::Name(name)
                    } else {
                        Selection::from_code(&args.country)
                    };
                    dispatcher::submit(&transport, &mut panel, &selection).await;
                    panel.render_status();
                    panel.render_output();
                }
                Commands::Health => {
                    health::run_all(&transport, &mut panel, &mut state).await;
                    panel.render_status();
                    panel.render_output();
                }
            }
        });
}
