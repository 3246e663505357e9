//! cloud-deps: which cloud provider do well-known companies depend on?
//!
//! Interactive terminal dashboard plus scripting commands over the same data.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cloud_deps::{
    cli::{self, ListOptions, OutputFormat, RegionsOptions},
    config::{
        discover_config_file, generate_example_config, generate_json_schema, load_or_default,
        AppConfig, ConfigOverrides, Validatable, CONFIG_FILE_NAMES,
        DEFAULT_LOGO_PROBE_TIMEOUT_SECS,
    },
    data::{builtin_companies, builtin_regions},
    detect::{DetectClient, LogoProbe},
    model::{Geography, ProviderId},
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cloud-deps")]
#[command(version)]
#[command(about = "Which cloud provider do well-known companies depend on?", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Company rejected (duplicate) or provider detection failed
    3  Error occurred

EXAMPLES:
    # Interactive dashboard
    cloud-deps

    # Companies on Azure, as JSON
    cloud-deps list --provider azure -o json

    # Classify a new company against a local endpoint
    cloud-deps detect https://www.stripe.com --endpoint http://localhost:3000/api/detect-cloud

    # European AWS regions
    cloud-deps regions --geography europe")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cloud provider detection endpoint
    #[arg(long, global = true, env = "CLOUD_DEPS_ENDPOINT")]
    endpoint: Option<String>,

    /// Detection request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `tui` subcommand
#[derive(Parser, Default)]
struct TuiArgs {
    /// Color theme (dark, light, high-contrast)
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Search debounce before a URL-like query fills the add field (ms)
    #[arg(long)]
    debounce_ms: Option<u64>,
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    /// Case-insensitive company name filter
    #[arg(short, long)]
    search: Option<String>,

    /// Only companies on this provider (aws, azure, gcp, oracle, alibaba, other)
    #[arg(short, long)]
    provider: Option<ProviderId>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `stats` subcommand
#[derive(Parser)]
struct StatsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `detect` subcommand
#[derive(Parser)]
struct DetectArgs {
    /// Company URL or domain, e.g. https://www.stripe.com
    url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,
}

/// Arguments for the `logo` subcommand
#[derive(Parser)]
struct LogoArgs {
    /// Company domain, e.g. stripe.com
    domain: String,

    /// List the fallback chain without probing the URLs
    #[arg(long)]
    offline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,
}

/// Arguments for the `regions` subcommand
#[derive(Parser)]
struct RegionsArgs {
    /// Match region code, name or location
    #[arg(short, long)]
    search: Option<String>,

    /// Only regions in this geography (north-america, south-america, europe, ...)
    #[arg(short, long)]
    geography: Option<Geography>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui(TuiArgs),

    /// List companies and their cloud provider
    List(ListArgs),

    /// Provider market share across all companies
    Stats(StatsArgs),

    /// Detect the cloud provider of a company by URL
    Detect(DetectArgs),

    /// Resolve the logo fallback chain for a domain
    Logo(LogoArgs),

    /// Browse AWS regions
    Regions(RegionsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .cloud-deps.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ============================================================================
// Logging
// ============================================================================

/// Install the tracing subscriber.
///
/// The dashboard owns the terminal, so in TUI mode log lines go to a file
/// under the user cache directory instead of stderr.
fn init_logging(verbose: bool, quiet: bool, tui: bool) {
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let log_file = if tui { open_log_file() } else { None };
    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init(),
        None if tui => {}
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

fn open_log_file() -> Option<std::fs::File> {
    let dir = ::dirs::cache_dir()?.join("cloud-deps");
    std::fs::create_dir_all(&dir).ok()?;
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("cloud-deps.log"))
        .ok()
}

// ============================================================================
// Configuration
// ============================================================================

/// Effective config: file (or defaults) with CLI flags layered on top.
///
/// Invalid values are reported and the defaults are used instead.
fn effective_config(cli: &Cli, tui: &TuiArgs) -> AppConfig {
    let overrides = ConfigOverrides {
        endpoint: cli.endpoint.clone(),
        timeout_secs: cli.timeout,
        theme: tui.theme.clone(),
        mouse_enabled: tui.no_mouse.then_some(false),
        debounce_ms: tui.debounce_ms,
    };

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if errors.is_empty() {
        return config;
    }
    for error in &errors {
        tracing::warn!("invalid configuration: {error}");
        eprintln!("Warning: invalid configuration: {error}");
    }
    eprintln!("Warning: falling back to default configuration");
    AppConfig::default()
}

fn detect_client(config: &AppConfig) -> Result<DetectClient> {
    DetectClient::new(config.detection.client_config())
        .context("Failed to build the detection client")
}

// ============================================================================
// Entry point
// ============================================================================

fn main() {
    let cli = Cli::parse();
    let is_tui = matches!(cli.command, None | Some(Commands::Tui(_)));
    init_logging(cli.verbose, cli.quiet, is_tui);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            cli::EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let default_tui = TuiArgs::default();
    let tui_args = match &cli.command {
        Some(Commands::Tui(args)) => args,
        _ => &default_tui,
    };

    match &cli.command {
        None | Some(Commands::Tui(_)) => {
            let config = effective_config(&cli, tui_args);
            cli::run_dashboard(&config)
        }

        Some(Commands::List(args)) => cli::run_list(
            builtin_companies(),
            ListOptions {
                search: args.search.clone(),
                provider: args.provider,
                format: args.output,
                output: args.output_file.clone(),
                quiet: cli.quiet,
            },
        ),

        Some(Commands::Stats(args)) => cli::run_stats(
            builtin_companies(),
            args.output,
            args.output_file.clone(),
            cli.quiet,
        ),

        Some(Commands::Detect(args)) => {
            let config = effective_config(&cli, tui_args);
            let client = detect_client(&config)?;
            cli::run_detect(&args.url, builtin_companies(), &client, args.output)
        }

        Some(Commands::Logo(args)) => {
            let probe = if args.offline {
                None
            } else {
                let timeout =
                    Duration::from_secs(cli.timeout.unwrap_or(DEFAULT_LOGO_PROBE_TIMEOUT_SECS));
                Some(LogoProbe::new(timeout).context("Failed to build the logo probe")?)
            };
            cli::run_logo(&args.domain, &builtin_companies(), probe.as_ref(), args.output)
        }

        Some(Commands::Regions(args)) => cli::run_regions(
            builtin_regions(),
            RegionsOptions {
                search: args.search.clone(),
                geography: args.geography,
                format: args.output,
                output: args.output_file.clone(),
                quiet: cli.quiet,
            },
        ),

        Some(Commands::Completions { shell }) => {
            generate(*shell, &mut Cli::command(), "cloud-deps", &mut io::stdout());
            Ok(cli::EXIT_OK)
        }

        Some(Commands::Config { action }) => run_config(&cli, action),
    }
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                ::dirs::config_dir().map(|p| p.join("cloud-deps").display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".cloud-deps.yaml");
            if target.exists() {
                bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
        ConfigAction::Schema { output } => {
            let schema = generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
        }
    }
    Ok(cli::EXIT_OK)
}
