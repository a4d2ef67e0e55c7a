use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, CustomType, Text};
use rainreport_core::{
    Config, Coordinates, DeniedPosition, FixedPosition, Geolocation, ReportCycle, ReportFetcher,
};

use crate::view::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "rainreport", version, about = "Is it raining where you are?")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the service URL and a default location.
    Configure,

    /// Fetch and show a rain report for your location.
    Show {
        /// Latitude in decimal degrees; overrides the configured location.
        #[arg(long, allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,

        /// Longitude in decimal degrees; overrides the configured location.
        #[arg(long, allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,

        /// Act as if location sharing was declined.
        #[arg(long, conflicts_with_all = ["latitude", "longitude"])]
        deny_location: bool,

        /// Base URL of the rain report service.
        #[arg(long)]
        service_url: Option<String>,

        /// Request timeout in milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show {
                latitude,
                longitude,
                deny_location,
                service_url,
                timeout_ms,
                json,
            } => {
                let mut cfg = Config::load()?;
                if let Some(url) = service_url {
                    cfg.service_url = url;
                }
                if let Some(ms) = timeout_ms {
                    cfg.timeout_ms = ms;
                }

                let coords = latitude.zip(longitude).map(|(lat, lon)| Coordinates::new(lat, lon));
                let geolocation = resolve_geolocation(coords, deny_location, &cfg);

                show(&cfg, geolocation.as_deref(), json).await
            }
        }
    }
}

/// Pick the location capability: an explicit denial, then command-line
/// coordinates, then the configured location. `None` means there is none.
fn resolve_geolocation(
    coords: Option<Coordinates>,
    deny_location: bool,
    cfg: &Config,
) -> Option<Box<dyn Geolocation>> {
    if deny_location {
        return Some(Box::new(DeniedPosition));
    }

    let position = coords.map(FixedPosition).or_else(|| cfg.stored_position())?;
    Some(Box::new(position))
}

async fn show(cfg: &Config, geolocation: Option<&dyn Geolocation>, json: bool) -> Result<ExitCode> {
    let fetcher = ReportFetcher::new(&cfg.service_url, cfg.timeout())?;
    let mut view = TerminalView::new();

    let outcome = ReportCycle::new(geolocation, &fetcher).run(&mut view).await;
    view.print(json)?;

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "report cycle failed");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn configure() -> Result<()> {
    let mut cfg = Config::load()?;

    let service_url = Text::new("Rain report service URL:")
        .with_default(&cfg.service_url)
        .prompt()
        .context("Failed to read service URL")?;
    cfg.service_url = service_url;

    let store_location = Confirm::new("Store a default location?")
        .with_default(cfg.location.is_some())
        .prompt()
        .context("Failed to read answer")?;

    if store_location {
        let latitude = CustomType::<f64>::new("Latitude:")
            .with_error_message("Please type a decimal number")
            .prompt()
            .context("Failed to read latitude")?;
        let longitude = CustomType::<f64>::new("Longitude:")
            .with_error_message("Please type a decimal number")
            .prompt()
            .context("Failed to read longitude")?;
        cfg.set_location(Coordinates::new(latitude, longitude));
    } else {
        cfg.location = None;
    }

    let path = cfg.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
