//! medaid — Demo CLI
//!
//! Exercises the medication assistance engine from the command line. Every
//! subcommand prints pretty JSON on stdout.
//!
//! Usage:
//!   cargo run -p demo -- search tacrolimis
//!   cargo run -p demo -- eligibility --insurance medicare
//!   cargo run -p demo -- priority --insurance commercial --financial crisis
//!   cargo run -p demo -- guidance --insurance uninsured --financial crisis \
//!       --organ Kidney --medication tacrolimus

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medaid_contracts::{
    profile::{FinancialStatus, InsuranceType, OrganType, Role, TransplantStatus},
    session::SessionId,
};
use medaid_core::{Answer, MedaidConfig, MedicationCatalog, ProfileRepository, Wizard, WizardStep};
use medaid_guidance::build_guidance_summary;
use medaid_policy::{resolve_eligibility, resolve_priority};
use medaid_search::MedicationMatcher;
use medaid_store::InMemoryProfileRepository;

// ── CLI definition ────────────────────────────────────────────────────────────

/// medaid — medication assistance guidance for transplant patients.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "medaid transplant medication assistance demo",
    long_about = "Looks up transplant medications and prints eligibility, program priority,\n\
                  and per-medication assistance guidance as JSON."
)]
struct Cli {
    /// TOML configuration file ([search] tuning, alternate catalog path).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Medication catalog TOML file. Overrides the configured catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fuzzy-search the catalog by brand or generic name.
    Search {
        query: String,
    },
    /// Show which program categories an insurance type can use.
    Eligibility {
        #[arg(long)]
        insurance: InsuranceType,
    },
    /// Show the recommended order to pursue program categories.
    Priority {
        #[arg(long)]
        insurance: InsuranceType,
        #[arg(long)]
        financial: FinancialStatus,
    },
    /// Run the questionnaire non-interactively and print the full guidance.
    Guidance {
        #[arg(long, default_value = "patient")]
        role: Role,
        #[arg(long, default_value = "postTransplant")]
        status: TransplantStatus,
        /// Repeat for multiple organs.
        #[arg(long = "organ", required = true)]
        organs: Vec<OrganType>,
        #[arg(long)]
        insurance: InsuranceType,
        /// Catalog medication ID. Repeat for multiple medications.
        #[arg(long = "medication")]
        medications: Vec<String>,
        #[arg(long)]
        financial: FinancialStatus,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => MedaidConfig::from_file(path)?,
        None => MedaidConfig::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => MedicationCatalog::from_file(path)?,
        None => config.load_catalog()?,
    };

    match cli.command {
        Command::Search { query } => {
            let matcher = MedicationMatcher::new(config.search.clone());
            print_json(&matcher.search(&query, catalog.medications()))
        }
        Command::Eligibility { insurance } => print_json(&resolve_eligibility(insurance)),
        Command::Priority { insurance, financial } => {
            print_json(&resolve_priority(insurance, financial))
        }
        Command::Guidance {
            role,
            status,
            organs,
            insurance,
            medications,
            financial,
        } => {
            let answers = vec![
                Answer::Role(role),
                Answer::TransplantStatus(status),
                Answer::Organs(organs.into_iter().collect()),
                Answer::Insurance(insurance),
                Answer::Medications(medications),
                Answer::FinancialStatus(financial),
            ];
            run_guidance(answers, &catalog)
        }
    }
}

// ── Guidance ──────────────────────────────────────────────────────────────────

/// Feed each answer through the questionnaire, persist the resulting profile,
/// then print the guidance summary for it.
fn run_guidance(answers: Vec<Answer>, catalog: &MedicationCatalog) -> Result<(), Box<dyn Error>> {
    let mut wizard = Wizard::new();
    for answer in answers {
        wizard.answer(answer)?;
        wizard.advance()?;
    }
    // Review → Results
    wizard.advance()?;
    debug_assert_eq!(wizard.current(), WizardStep::Results);

    let profile = wizard.profile()?;

    let repository = InMemoryProfileRepository::new();
    let session = SessionId::new();
    repository.save(&session, &profile)?;
    info!(session = %session, "questionnaire complete");

    print_json(&build_guidance_summary(&profile, catalog.medications()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
