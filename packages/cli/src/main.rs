#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line entry point for the Oslo housing-market map.
//!
//! With a subcommand it prints district data, runs a valuation or starts
//! the API server. Without one it shows an interactive menu.

mod interactive;
mod render;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use oslo_market_display::{DistrictListEntry, FormattedValuation, StatsPanel};
use oslo_market_district::catalog;
use oslo_market_map::boundaries;
use oslo_market_server::{ServerConfig, run_server};
use oslo_market_valuation::{ConditionStandard, DwellingType, ValuationForm};

#[derive(Parser)]
#[command(name = "oslo_market_cli", about = "Oslo housing-market map toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every district with its price change
    Districts,
    /// Show the stats panel for a district (the whole city when unknown)
    Show {
        /// District id, e.g. `frogner`
        id: String,
    },
    /// Estimate the value of a dwelling
    Estimate {
        /// District id (the whole city when unknown)
        #[arg(long, default_value = "oslo")]
        district: String,
        /// Floor area in square meters; a decimal comma is accepted
        #[arg(long)]
        area: String,
        /// Dwelling type: lei, rek, tom or ene
        #[arg(long, default_value_t = DwellingType::default())]
        dwelling_type: DwellingType,
        /// Condition: behov, standard or oppgradert
        #[arg(long, default_value_t = ConditionStandard::default())]
        standard: ConditionStandard,
    },
    /// Find the district containing a coordinate
    Lookup {
        /// Longitude
        lng: f64,
        /// Latitude
        lat: f64,
    },
    /// Start the API server using `BIND_ADDR`, `PORT` and `STATIC_DIR`
    Serve,
}

/// Top-level menu entries.
enum Tool {
    Browse,
    Estimate,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[Self::Browse, Self::Estimate, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Browse => "Browse districts",
            Self::Estimate => "Estimate a dwelling",
            Self::Server => "Start server",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Districts) => {
            print!(
                "{}",
                render::district_list(&DistrictListEntry::list(catalog(), ""))
            );
        }
        Some(Commands::Show { id }) => {
            let record = catalog().find_or_aggregate(&id);
            print!("{}", render::stats_panel(&StatsPanel::new(record, true)));
        }
        Some(Commands::Estimate {
            district,
            area,
            dwelling_type,
            standard,
        }) => {
            let catalog = catalog();
            let mut form = ValuationForm::open(catalog.find_or_aggregate(&district));
            form.set_area(&area);
            form.set_dwelling_type(dwelling_type);
            form.set_standard(standard);

            let input = form.input()?;
            let result = form.calculate(catalog)?;
            let record = form.current_district(catalog);
            print!(
                "{}",
                render::valuation(
                    &record.name,
                    input.area,
                    dwelling_type,
                    standard,
                    &FormattedValuation::new(record, &result),
                )
            );
        }
        Some(Commands::Lookup { lng, lat }) => match boundaries().district_at(lng, lat) {
            Some(id) => {
                let record = catalog().find_or_aggregate(id);
                println!("{} ({id})", record.name);
            }
            None => println!("No district at {lng}, {lat}"),
        },
        Some(Commands::Serve) => serve(false).await?,
        None => menu().await?,
    }

    Ok(())
}

async fn menu() -> Result<(), Box<dyn std::error::Error>> {
    println!("Oslo Market Map");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Browse => interactive::browse(catalog())?,
        Tool::Estimate => interactive::estimate(catalog(), catalog().aggregate())?,
        Tool::Server => serve(true).await?,
    }

    Ok(())
}

/// Runs the server on actix-web's own runtime.
async fn serve(prompt: bool) -> Result<(), Box<dyn std::error::Error>> {
    // The server uses actix-web's runtime, so we need to run it
    // in a blocking task to avoid nesting tokio runtimes.
    tokio::task::spawn_blocking(move || {
        actix_web::rt::System::new().block_on(async move {
            if prompt {
                oslo_market_server::interactive::run().await
            } else {
                run_server(ServerConfig::from_env()).await
            }
        })
    })
    .await??;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("oslo_market_cli").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn estimate_accepts_form_codes() {
        let cli = parse(&[
            "estimate",
            "--district",
            "sagene",
            "--area",
            "50",
            "--dwelling-type",
            "lei",
            "--standard",
            "oppgradert",
        ])
        .unwrap();
        let Some(Commands::Estimate {
            district,
            area,
            dwelling_type,
            standard,
        }) = cli.command
        else {
            panic!("expected the estimate command");
        };
        assert_eq!(district, "sagene");
        assert_eq!(area, "50");
        assert_eq!(dwelling_type, DwellingType::Apartment);
        assert_eq!(standard, ConditionStandard::Upgraded);
    }

    #[test]
    fn estimate_defaults_and_english_names() {
        let cli = parse(&["estimate", "--area", "72,5", "--dwelling-type", "single-family"]).unwrap();
        let Some(Commands::Estimate {
            district,
            dwelling_type,
            standard,
            ..
        }) = cli.command
        else {
            panic!("expected the estimate command");
        };
        assert_eq!(district, "oslo");
        assert_eq!(dwelling_type, DwellingType::SingleFamily);
        assert_eq!(standard, ConditionStandard::Standard);

        let cli = parse(&["estimate", "--area", "50"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Estimate {
                dwelling_type: DwellingType::DetachedPlot,
                ..
            })
        ));
    }

    #[test]
    fn estimate_rejects_unknown_codes() {
        assert!(parse(&["estimate", "--area", "50", "--dwelling-type", "slott"]).is_err());
        assert!(parse(&["estimate", "--area", "50", "--standard", "ny"]).is_err());
        assert!(parse(&["estimate"]).is_err());
    }

    #[test]
    fn no_subcommand_opens_menu() {
        assert!(parse(&[]).unwrap().command.is_none());
    }
}
