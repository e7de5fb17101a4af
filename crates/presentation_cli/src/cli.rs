//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use domain::{DEFAULT_CLASS, DEFAULT_DESTINATION, DEFAULT_ORIGIN, SearchRequest, TravelDate};
use infrastructure::DEFAULT_CATALOG_PATH;

/// Check train ticket availability and report it on Telegram
#[derive(Debug, Parser)]
#[command(name = "ticket-watch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Outbound date (DD/MM/YYYY)
    #[arg(long = "data_ida", value_name = "DATE", value_parser = parse_travel_date)]
    pub data_ida: TravelDate,

    /// Return date (DD/MM/YYYY)
    #[arg(long = "data_volta", value_name = "DATE", value_parser = parse_travel_date)]
    pub data_volta: Option<TravelDate>,

    /// Boarding station
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origem: String,

    /// Destination station
    #[arg(long, default_value = DEFAULT_DESTINATION)]
    pub destino: String,

    /// Travel class
    #[arg(long, default_value = DEFAULT_CLASS)]
    pub classe: String,

    /// Number of passengers
    #[arg(
        long = "total_passageiros",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub total_passageiros: u32,

    /// Lookup table with railway, station and class codes
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG_PATH)]
    pub codigos: PathBuf,

    /// Env file with TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID
    #[arg(long, value_name = "FILE", env = "TICKET_WATCH_ENV_FILE", default_value = ".env")]
    pub env_file: PathBuf,

    /// Configuration file (default: ticket-watch.toml if present)
    #[arg(short, long, value_name = "FILE", env = "TICKET_WATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip TLS certificate verification for the availability API
    #[arg(long)]
    pub insecure: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Search request described by the arguments
    pub fn search_request(&self) -> SearchRequest {
        let request = SearchRequest::new(self.data_ida.clone())
            .with_route(self.origem.clone(), self.destino.clone())
            .with_class(self.classe.clone())
            .with_passengers(self.total_passageiros);

        match &self.data_volta {
            Some(date) => request.with_return_date(date.clone()),
            None => request,
        }
    }
}

fn parse_travel_date(value: &str) -> Result<TravelDate, String> {
    TravelDate::parse(value)
        .map_err(|e| format!("{e} (expected DD/MM/YYYY, e.g. 19/05/2024)"))
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
