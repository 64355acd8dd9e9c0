//! Pay CLI commands
//!
//! Implements CLI commands for the pay configuration: the breakdown view,
//! field edits, the locality listing, and allotment management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_allotments, format_localities, format_pay_breakdown};
use crate::engine::PayEngine;
use crate::error::{SeapayError, SeapayResult};
use crate::models::{DependencyStatus, PayConfiguration, PayGrade, CUSTOM_LOCALITY};
use crate::services::PayService;
use crate::storage::Storage;

/// Pay subcommands
#[derive(Subcommand)]
pub enum PayCommands {
    /// Show the current monthly pay breakdown
    Show,

    /// Edit pay configuration fields
    Set {
        /// Pay grade (E1-E9, W1-W5, O1-O6)
        #[arg(long)]
        grade: Option<String>,

        /// Years of service
        #[arg(long)]
        yos: Option<u32>,

        /// Include BAH (true/false)
        #[arg(long)]
        bah: Option<bool>,

        /// Dependency status (with/without)
        #[arg(long)]
        dependents: Option<String>,

        /// BAH locality key, "custom", or "none" to clear the selection
        #[arg(long)]
        locality: Option<String>,

        /// Custom monthly BAH amount (used with --locality custom)
        #[arg(long)]
        custom_bah: Option<f64>,

        /// Include BAS (true/false)
        #[arg(long)]
        bas: Option<bool>,

        /// TSP percent of base pay
        #[arg(long)]
        tsp: Option<f64>,

        /// Manual federal withholding, monthly
        #[arg(long)]
        federal: Option<f64>,

        /// Manual state withholding, monthly
        #[arg(long)]
        state: Option<f64>,

        /// Elect SGLI (true/false)
        #[arg(long)]
        sgli: Option<bool>,

        /// SGLI coverage amount
        #[arg(long)]
        coverage: Option<f64>,

        /// Elect AFRH (true/false)
        #[arg(long)]
        afrh: Option<bool>,

        /// Include special pay (true/false)
        #[arg(long)]
        special: Option<bool>,

        /// Flat monthly special pay amount
        #[arg(long)]
        special_amount: Option<f64>,
    },

    /// List BAH localities and rates for the configured grade
    Localities,

    /// Allotment management commands
    #[command(subcommand)]
    Allotment(AllotmentCommands),
}

/// Allotment subcommands
#[derive(Subcommand)]
pub enum AllotmentCommands {
    /// Add a new allotment
    Add {
        /// Allotment name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: f64,
    },

    /// Remove an allotment by name or ID
    Remove {
        /// Allotment name or ID
        allotment: String,
    },

    /// List allotments
    List,
}

/// Handle a pay command
pub fn handle_pay_command(
    storage: &Storage,
    settings: &Settings,
    engine: &PayEngine,
    cmd: PayCommands,
) -> SeapayResult<()> {
    let service = PayService::new(&storage.pay_config, engine);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        PayCommands::Show => {
            let out = service.breakdown()?;
            println!("{}", format_pay_breakdown(&out, symbol));
        }

        PayCommands::Set {
            grade,
            yos,
            bah,
            dependents,
            locality,
            custom_bah,
            bas,
            tsp,
            federal,
            state,
            sgli,
            coverage,
            afrh,
            special,
            special_amount,
        } => {
            let grade = grade.map(|g| parse_grade(&g)).transpose()?;
            let dependents = dependents.map(|d| parse_dependents(&d)).transpose()?;

            let out = service.update(|config| {
                if let Some(grade) = grade {
                    config.grade = grade;
                }
                if let Some(yos) = yos {
                    config.years_of_service = yos;
                }
                if let Some(bah) = bah {
                    config.bah_enabled = bah;
                }
                if let Some(dependents) = dependents {
                    config.dependency_status = dependents;
                }
                if let Some(locality) = locality {
                    config.locality_key = if locality.eq_ignore_ascii_case("none") {
                        String::new()
                    } else {
                        locality
                    };
                }
                if let Some(custom_bah) = custom_bah {
                    config.bah_custom_amount = custom_bah;
                }
                if let Some(bas) = bas {
                    config.bas_enabled = bas;
                }
                if let Some(tsp) = tsp {
                    config.tsp_percent = tsp;
                }
                if let Some(federal) = federal {
                    config.federal_monthly = federal;
                }
                if let Some(state) = state {
                    config.state_monthly = state;
                }
                if let Some(sgli) = sgli {
                    config.sgli_enabled = sgli;
                }
                if let Some(coverage) = coverage {
                    config.sgli_coverage = coverage;
                }
                if let Some(afrh) = afrh {
                    config.afrh_enabled = afrh;
                }
                if let Some(special) = special {
                    config.special_enabled = special;
                }
                if let Some(special_amount) = special_amount {
                    config.special_monthly = special_amount;
                }
            })?;

            println!("Configuration saved.");
            println!();
            println!("{}", format_pay_breakdown(&out, symbol));
        }

        PayCommands::Localities => {
            let config = service.config()?;
            println!("BAH localities for {}:", config.grade);
            println!();
            println!("{}", format_localities(&service.localities()?, symbol));
            println!(
                "Select one with: seapay pay set --locality \"<name>\" \
                 (or --locality {} with --custom-bah)",
                CUSTOM_LOCALITY
            );
        }

        PayCommands::Allotment(cmd) => handle_allotment_command(&service, symbol, cmd)?,
    }

    Ok(())
}

fn handle_allotment_command(
    service: &PayService<'_>,
    symbol: &str,
    cmd: AllotmentCommands,
) -> SeapayResult<()> {
    match cmd {
        AllotmentCommands::Add { name, amount } => {
            let added = service.add_allotment(&name, amount)?;
            println!("Added allotment {} ({}).", added.id, name);
        }

        AllotmentCommands::Remove { allotment } => {
            let config = service.config()?;
            let id = resolve_allotment(&config, &allotment)?;
            service.remove_allotment(id)?;
            println!("Removed allotment {}.", allotment);
        }

        AllotmentCommands::List => {
            let config = service.config()?;
            println!("{}", format_allotments(&config.allotments, symbol));
        }
    }
    Ok(())
}

/// Resolve an allotment argument by name (case-insensitive), display ID, or
/// full UUID
fn resolve_allotment(
    config: &PayConfiguration,
    arg: &str,
) -> SeapayResult<crate::models::AllotmentId> {
    let by_name = config
        .allotments
        .iter()
        .find(|a| a.name.eq_ignore_ascii_case(arg));
    if let Some(allotment) = by_name {
        return Ok(allotment.id);
    }

    let by_id = config
        .allotments
        .iter()
        .find(|a| a.id.to_string() == arg || a.id.as_uuid().to_string() == arg);
    match by_id {
        Some(allotment) => Ok(allotment.id),
        None => Err(SeapayError::allotment_not_found(arg)),
    }
}

fn parse_grade(arg: &str) -> SeapayResult<PayGrade> {
    arg.parse().map_err(SeapayError::Validation)
}

fn parse_dependents(arg: &str) -> SeapayResult<DependencyStatus> {
    match arg.trim().to_lowercase().as_str() {
        "with" => Ok(DependencyStatus::With),
        "without" => Ok(DependencyStatus::Without),
        other => Err(SeapayError::Validation(format!(
            "dependency status must be 'with' or 'without', got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("E6").unwrap(), PayGrade::E6);
        assert!(parse_grade("E99").is_err());
    }

    #[test]
    fn test_parse_dependents() {
        assert_eq!(parse_dependents("with").unwrap(), DependencyStatus::With);
        assert_eq!(
            parse_dependents("WITHOUT").unwrap(),
            DependencyStatus::Without
        );
        assert!(parse_dependents("maybe").is_err());
    }

    #[test]
    fn test_resolve_allotment_by_name_and_id() {
        let mut config = PayConfiguration::default();
        config
            .allotments
            .push(crate::models::Allotment::new("Rent", 500.0));
        let id = config.allotments[0].id;

        assert_eq!(resolve_allotment(&config, "rent").unwrap(), id);
        assert_eq!(resolve_allotment(&config, &id.to_string()).unwrap(), id);
        assert!(resolve_allotment(&config, "missing").is_err());
    }
}
