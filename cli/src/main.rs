//! Nova Gate CLI
//!
//! Inspect shuttle pod layouts and manage pod reservations from the shell.
//!
//! ```sh
//! # Pod map for a 100-seat shuttle
//! nova-gate layout --capacity 100
//!
//! # Same map with a voyage's reservations marked
//! nova-gate layout --capacity 100 --voyage V-2031 --deck 1
//!
//! # Reserve the first free economy pod, or a specific one
//! nova-gate reserve --voyage V-2031 --capacity 100 --passenger P-7 --package economy
//! nova-gate reserve --voyage V-2031 --capacity 100 --passenger P-8 --package firstClass --pod E400003
//!
//! # Validate config without touching the database
//! nova-gate --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use nova_gate::bootstrap::{init_tracing, AppContext, AppOptions};
use nova_gate::config::AppConfig;
use nova_gate::domain::{
    LayoutFactory, PackageType, Passenger, Pod, PodRequest, SpaceShuttleModel, Voyage,
};

#[derive(Parser, Debug)]
#[command(
    name = "nova-gate",
    version,
    about = "Pod layout and reservation engine for shuttle voyages",
    long_about = "Nova Gate generates deterministic pod layouts for space shuttles \
                  and reserves pods for voyage passengers.\n\n\
                  Default config: ~/.config/nova-gate/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "NOVA_GATE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long, global = true)]
    no_migrate: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pod map of a shuttle
    Layout {
        #[arg(long)]
        capacity: u32,
        /// Only this deck
        #[arg(long)]
        deck: Option<u32>,
        /// Mark pods reserved on this voyage
        #[arg(long)]
        voyage: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Reserve a pod for a passenger
    Reserve {
        #[arg(long)]
        voyage: String,
        #[arg(long)]
        capacity: u32,
        #[arg(long)]
        passenger: String,
        /// economy, business or firstClass
        #[arg(long, value_parser = parse_package)]
        package: PackageType,
        /// Requested pod code; the first eligible free pod when omitted
        #[arg(long)]
        pod: Option<String>,
    },
    /// List the reservations of a voyage
    Reservations {
        #[arg(long)]
        voyage: String,
        #[arg(long)]
        json: bool,
    },
    /// Release a passenger's reservation
    Release {
        #[arg(long)]
        passenger: String,
    },
}

fn parse_package(key: &str) -> Result<PackageType, String> {
    PackageType::find_by_key(key).ok_or_else(|| {
        let keys: Vec<_> = PackageType::ALL.iter().map(|p| p.key()).collect();
        format!("unknown package '{}', expected one of {}", key, keys.join(", "))
    })
}

fn voyage_for(voyage_id: &str, capacity: u32) -> Voyage {
    let model = SpaceShuttleModel::new(format!("{voyage_id}-shuttle"), "shuttle", capacity, 0);
    Voyage::new(voyage_id, model)
}

fn bare_layout(capacity: u32, deck: Option<u32>) -> Vec<Pod> {
    let layout = LayoutFactory::generate_layout(capacity);
    match deck {
        Some(d) => layout.pods_on_deck(d).to_vec(),
        None => layout.all_pods(),
    }
}

fn print_pods(pods: &[Pod], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(pods)?);
        return Ok(());
    }

    let mut current_deck = None;
    for pod in pods {
        if current_deck != Some(pod.deck) {
            println!("Deck {} ({})", pod.deck, pod.pod_type.key());
            current_deck = Some(pod.deck);
        }
        println!(
            "  {:<10} row {:>2} col {} {}",
            pod.code, pod.row, pod.column, pod.status
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ──────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(nova_gate::default_config_path);

    let loaded = if config_path.exists() {
        AppConfig::load(&config_path)
    } else {
        Ok(AppConfig::default())
    };

    let mut config = match loaded {
        Ok(cfg) => cfg,
        Err(e) if cli.check => return Err(e.into()),
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            eprintln!("Using default configuration.");
            AppConfig::default()
        }
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }
    init_tracing(&config);
    info!("Configuration resolved from {}", config_path.display());

    // ── Config validation mode ──────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Max attempts: {}", config.reservation.max_attempts);
        return Ok(());
    }

    let Some(command) = cli.command else {
        return Err("no command given, see --help".into());
    };

    let options = AppOptions {
        config,
        auto_migrate: !cli.no_migrate,
    };

    match command {
        // Layouts are derived from capacity alone; only annotation needs storage.
        Command::Layout {
            capacity,
            deck,
            voyage: None,
            json,
        } => {
            print_pods(&bare_layout(capacity, deck), json)?;
        }
        Command::Layout {
            capacity,
            deck,
            voyage: Some(voyage_id),
            json,
        } => {
            let app = AppContext::start(options).await?;
            let voyage = voyage_for(&voyage_id, capacity);
            let pods = match deck {
                Some(d) => app.reservations.deck_map(&voyage, d).await?,
                None => app.reservations.pod_map(&voyage).await?,
            };
            print_pods(&pods, json)?;
        }
        Command::Reserve {
            voyage,
            capacity,
            passenger,
            package,
            pod,
        } => {
            let app = AppContext::start(options).await?;
            let voyage = voyage_for(&voyage, capacity);
            let passenger = Passenger::new(passenger, package);
            let reservation = app
                .reservations
                .reserve_pod_for_passenger(&voyage, &passenger, PodRequest::from_optional(pod))
                .await?;
            println!(
                "Reserved {} for {} on {} ({})",
                reservation.pod_code, reservation.passenger_id, reservation.voyage_id, reservation.id
            );
        }
        Command::Reservations { voyage, json } => {
            let app = AppContext::start(options).await?;
            let reservations = app.reservations.reservations_for_voyage(&voyage).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reservations)?);
            } else if reservations.is_empty() {
                println!("No reservations for {}", voyage);
            } else {
                for r in &reservations {
                    println!(
                        "{:<10} {:<20} {}",
                        r.pod_code,
                        r.passenger_id,
                        r.creation_date.to_rfc3339()
                    );
                }
            }
        }
        Command::Release { passenger } => {
            let app = AppContext::start(options).await?;
            if app.reservations.release_passenger(&passenger).await? {
                println!("Released reservation of {}", passenger);
            } else {
                println!("{} holds no reservation", passenger);
            }
        }
    }

    Ok(())
}
