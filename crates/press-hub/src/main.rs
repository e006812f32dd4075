//! pressctl - command-line front end for the press hub
//!
//! Loads configuration and seed data, then runs one request: a capability
//! check, a section attach, or a catalog listing.

use clap::{Parser, Subcommand};
use press_curation::AttachOutcome;
use press_hub::{logging, CatalogQuery, HubConfig, HubError, HubResult, PressHub, TargetRef};
use press_types::{Action, Monograph, ResourceId, Visibility};

/// Press hub CLI
#[derive(Parser)]
#[command(name = "pressctl")]
#[command(about = "Press hub authorization and curation tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "PRESS_CONFIG")]
    config: Option<String>,

    /// Seed file path (overrides the configured one)
    #[arg(short, long, env = "PRESS_SEED_FILE")]
    seed: Option<String>,

    /// Log level (overrides the configured one)
    #[arg(long, env = "PRESS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "PRESS_LOG_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask whether a principal may perform an action
    Can {
        /// Principal id, or "anonymous"
        #[arg(short, long, default_value = "anonymous")]
        principal: String,

        /// Action (index, read, create, update, destroy, publish, manage)
        #[arg(short, long)]
        action: String,

        /// Target: presses, job_dashboard, press:<subdomain> or <kind>:<id>
        #[arg(short, long)]
        target: String,

        /// Print the decision card as JSON
        #[arg(long)]
        explain: bool,
    },

    /// Attach a section to a monograph
    Attach {
        #[arg(short, long)]
        principal: String,

        #[arg(short, long)]
        section: String,

        #[arg(short, long)]
        monograph: String,

        /// Explicit visibility; inherited from the monograph when omitted
        #[arg(long)]
        visibility: Option<String>,
    },

    /// List readable monographs
    Catalog {
        #[arg(short, long, default_value = "anonymous")]
        principal: String,

        /// Restrict to one press subdomain
        #[arg(long)]
        press: Option<String>,

        /// Case-insensitive title search
        #[arg(short, long)]
        query: Option<String>,
    },
}

fn main() -> HubResult<()> {
    let cli = Cli::parse();

    let mut config =
        HubConfig::load(cli.config.as_deref()).map_err(|e| HubError::Config(e.to_string()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;
    if cli.seed.is_some() {
        config.seed.path = cli.seed;
    }

    logging::init(&config.logging);

    let hub = PressHub::from_config(&config)?;

    match cli.command {
        Commands::Can {
            principal,
            action,
            target,
            explain,
        } => {
            let principal = hub.principal(principal_id(&principal))?;
            let action: Action = action.parse()?;
            let target: TargetRef = target.parse()?;
            let card = hub.check(&principal, action, &target)?;

            let verdict = if card.was_allowed() { "allowed" } else { "denied" };
            println!("{} {} {}: {}", card.principal, card.action, card.target, verdict);
            if explain {
                match serde_json::to_string_pretty(&card) {
                    Ok(json) => println!("{}", json),
                    Err(_) => {
                        for record in &card.rules_evaluated {
                            println!("  {} {} {}us", record.rule_id, record.permitted, record.duration_us);
                        }
                    }
                }
            }
        }
        Commands::Attach {
            principal,
            section,
            monograph,
            visibility,
        } => {
            let principal = hub.principal(principal_id(&principal))?;
            let visibility = visibility
                .map(|v| v.parse::<Visibility>())
                .transpose()?;
            let (section, outcome) = hub.attach_section(
                &principal,
                &ResourceId::new(section),
                &ResourceId::new(monograph),
                visibility,
            )?;
            println!("section {} ({})", section.id, section.visibility);
            print_outcome(&outcome);
        }
        Commands::Catalog {
            principal,
            press,
            query,
        } => {
            let principal = hub.principal(principal_id(&principal))?;
            let query = CatalogQuery { press, text: query };
            let monographs = hub.catalog(&principal, &query)?;
            print_catalog(&monographs);
        }
    }

    Ok(())
}

fn principal_id(raw: &str) -> Option<&str> {
    match raw {
        "" | "anonymous" => None,
        id => Some(id),
    }
}

fn print_outcome(outcome: &AttachOutcome) {
    if outcome.is_noop() {
        println!("  already attached");
        return;
    }
    for effect in &outcome.side_effects {
        match serde_json::to_string(effect) {
            Ok(line) => println!("  {}", line),
            Err(_) => println!("  {:?}", effect),
        }
    }
}

fn print_catalog(monographs: &[Monograph]) {
    if monographs.is_empty() {
        println!("No monographs found");
        return;
    }
    println!("{:<12} {:<10} {:<8} TITLE", "ID", "PRESS", "VISIBLE");
    for monograph in monographs {
        println!(
            "{:<12} {:<10} {:<8} {}",
            monograph.id.short(),
            monograph.press,
            monograph.visibility.as_str(),
            monograph.title
        );
    }
}
