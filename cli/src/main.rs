//! Taxi Fare CLI
//!
//! ```sh
//! # Quote a 12.5 km trip with 4 minutes stuck in traffic
//! taxi-fare quote --distance 12.5 --wait 4
//!
//! # Same, as JSON with per-tier detail
//! taxi-fare quote -d 12.5 -w 4 --format json
//!
//! # Print the rate schedule
//! taxi-fare tiers
//!
//! # Validate config without quoting
//! taxi-fare --config ./config.toml --check
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use taxi_fare::application::{render_schedule, FareQuote, INVALID_NUMBERS_MESSAGE};
use taxi_fare::config::AppConfig;
use taxi_fare::telemetry::init_tracing;
use taxi_fare::FareQuoteService;

/// Thai taxi fare calculator.
#[derive(Parser, Debug)]
#[command(
    name = "taxi-fare",
    version,
    about = "Compute a Thai taxi fare from distance and traffic wait time",
    long_about = "Base fare 35 THB covers the first km, distance beyond it is priced \
                  across six marginal tiers, traffic wait costs 3 THB per minute.\n\n\
                  Default config: ~/.config/taxi-fare/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TAXI_FARE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a trip.
    Quote {
        /// Distance in km. Unparsable text counts as 0.
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        distance: String,

        /// Traffic wait in minutes. Unparsable text counts as 0.
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        wait: String,

        /// Output format; defaults to `output.format` from the config.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show per-tier rows on the text receipt.
        #[arg(long)]
        tiers: bool,
    },
    /// Print the distance rate schedule.
    Tiers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit status when the trip form holds invalid numbers.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(taxi_fare::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // Init tracing first so subsequent logs are formatted properly.
    // Logs always go to stderr: stdout is reserved for the receipt or JSON
    // quote so `--format json` output can be piped.
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
        }
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        println!("   Output      : {}", config.output.format);
        return Ok(ExitCode::SUCCESS);
    }

    let code = run(
        cli.command,
        &config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    Ok(ExitCode::from(code))
}

/// Execute a subcommand, writing results to `out` and user errors to `err`.
///
/// Returns the process exit status.
fn run(
    command: Option<Command>,
    config: &AppConfig,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8, Box<dyn std::error::Error>> {
    match command {
        Some(Command::Quote {
            distance,
            wait,
            format,
            tiers,
        }) => {
            let json = match format {
                Some(f) => f == OutputFormat::Json,
                None => config.json_output(),
            };
            let show_tiers = tiers || config.output.show_tiers;

            let service = FareQuoteService::default();
            match service.quote_text(&distance, &wait) {
                Ok(quote) => write_quote(out, &quote, json, show_tiers)?,
                Err(e) => {
                    error!(error = %e, "Quote failed");
                    writeln!(err, "{} ({})", INVALID_NUMBERS_MESSAGE, e)?;
                    return Ok(EXIT_INVALID_INPUT);
                }
            }
        }
        Some(Command::Tiers) => write!(out, "{}", render_schedule())?,
        None => {
            writeln!(
                out,
                "Nothing to do. Try `taxi-fare quote --distance 12 --wait 3` or `taxi-fare --help`."
            )?;
        }
    }

    Ok(0)
}

fn write_quote(
    out: &mut dyn Write,
    quote: &FareQuote,
    json: bool,
    show_tiers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(quote)?)?;
    } else if show_tiers {
        write!(out, "{}", quote.detailed_receipt())?;
    } else {
        write!(out, "{}", quote.receipt())?;
    }
    Ok(())
}
