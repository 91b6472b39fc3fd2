//! # PrintQuote CLI Library
//!
//! Session layer for PrintQuote: state, commands and the command-line front
//! end that drives them.
//!
//! ## Module Organization
//! ```text
//! printquote_cli/
//! ├── lib.rs          ◄─── You are here (arguments, startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Session price table (Arc<RwLock>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── calculate_quote
//! │   └── catalog.rs  ◄─── get_catalog, update_* admin edits
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Lifetime
//! One process invocation is one session. The price table is loaded once
//! (shipped defaults or a JSON seed), admin overrides from the command line
//! are applied, and the requested command runs. Nothing is written back.

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use printquote_core::{PriceCatalog, SelectionInput};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::catalog::{
    get_catalog, update_discount_factor, update_extras, update_paper_multiplier,
    update_product_base_price,
};
use commands::quote::calculate_quote;
use state::{CatalogState, ConfigState};

// =============================================================================
// Arguments
// =============================================================================

/// Print-shop quote calculator.
#[derive(Debug, Parser)]
#[command(name = "printquote", version, about)]
pub struct Cli {
    /// JSON catalog seed to start the session from (overrides PRINTQUOTE_CATALOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: AdminOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate a quote
    Quote(QuoteArgs),

    /// Show the price table
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Quote form fields. Omitted fields arrive empty, as from an unfilled form.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Product id, e.g. `flyer`
    #[arg(long, default_value = "")]
    pub product: String,

    /// Paper id, e.g. `offset90`
    #[arg(long, default_value = "")]
    pub paper: String,

    /// Number of printed units
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub quantity: i64,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// In-session price table edits, applied before the command runs.
#[derive(Debug, Default, Args)]
pub struct AdminOverrides {
    /// Set a product base price per 100 units
    #[arg(
        long = "base-price",
        value_name = "ID=PRICE",
        value_parser = parse_id_value,
        global = true
    )]
    pub base_prices: Vec<(String, Decimal)>,

    /// Set a paper multiplier
    #[arg(
        long = "multiplier",
        value_name = "ID=MULTIPLIER",
        value_parser = parse_id_value,
        global = true
    )]
    pub multipliers: Vec<(String, Decimal)>,

    /// Set (or add) a quantity discount factor
    #[arg(long = "discount", value_name = "QTY=FACTOR", value_parser = parse_tier, global = true)]
    pub discounts: Vec<(i64, Decimal)>,

    /// Set the margin percentage
    #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true, global = true)]
    pub margin: Option<Decimal>,

    /// Set the tax percentage
    #[arg(long, value_parser = parse_decimal, allow_hyphen_values = true, global = true)]
    pub tax: Option<Decimal>,
}

impl AdminOverrides {
    /// Applies every override to the session catalog, in flag order per kind.
    pub fn apply(&self, catalog: &CatalogState) {
        for (id, value) in &self.base_prices {
            update_product_base_price(catalog, id, *value);
        }
        for (id, value) in &self.multipliers {
            update_paper_multiplier(catalog, id, *value);
        }
        for (threshold, value) in &self.discounts {
            update_discount_factor(catalog, *threshold, *value);
        }
        if self.margin.is_some() || self.tax.is_some() {
            update_extras(catalog, self.margin, self.tax);
        }
    }
}

fn parse_decimal(s: &str) -> Result<Decimal, String> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn parse_id_value(s: &str) -> Result<(String, Decimal), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing id in '{}'", s));
    }
    Ok((id.to_string(), parse_decimal(value)?))
}

fn parse_tier(s: &str) -> Result<(i64, Decimal), String> {
    let (qty, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected QTY=FACTOR, got '{}'", s))?;
    let qty = qty
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity '{}': {}", qty, e))?;
    Ok((qty, parse_decimal(value)?))
}

// =============================================================================
// Startup
// =============================================================================

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,printquote=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=printquote=trace` - Show trace for printquote crates only
/// - Default: INFO, plus DEBUG for printquote crates
///
/// Logs go to stderr so stdout carries only quote/catalog output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the session price table.
///
/// Uses the JSON seed from `config.catalog_path` when set, otherwise the
/// shipped defaults.
pub fn load_catalog(config: &ConfigState) -> anyhow::Result<PriceCatalog> {
    let Some(path) = &config.catalog_path else {
        info!("Using default price table");
        return Ok(PriceCatalog::default());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog seed {}", path.display()))?;
    let catalog: PriceCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog seed {}", path.display()))?;

    info!(
        path = %path.display(),
        products = catalog.list_products().len(),
        papers = catalog.list_papers().len(),
        tiers = catalog.discount_tiers().len(),
        "Price table loaded from seed"
    );
    Ok(catalog)
}

/// Runs one session.
///
/// ## Startup Sequence
/// 1. Load configuration (env, then `--catalog`)
/// 2. Load the price table into `CatalogState`
/// 3. Apply admin overrides
/// 4. Run the command and print its output
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigState::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = CatalogState::new(load_catalog(&config)?);
    cli.overrides.apply(&catalog);

    match cli.command {
        Command::Quote(args) => {
            let selection = SelectionInput::new(args.product, args.paper, args.quantity);
            match calculate_quote(&catalog, &config, selection) {
                Ok(view) if args.json => println!("{}", serde_json::to_string_pretty(&view)?),
                Ok(view) => print!("{}", view.to_text()),
                Err(err) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&err)?);
                    }
                    if let Some(detail) = &err.detail {
                        warn!(%detail, "Quote rejected");
                    }
                    return Err(err.into());
                }
            }
        }
        Command::Catalog { json } => {
            let view = get_catalog(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.to_text());
            }
        }
    }

    Ok(())
}
