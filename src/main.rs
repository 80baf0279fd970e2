//! Command-line interface for rowsmith
//!
//! # Usage Examples
//!
//! ```bash
//! # 10 users as SQL INSERT statements on stdout
//! rowsmith users
//!
//! # 50 orders for 2023, amounts between 20 and 80, written to ./out
//! rowsmith orders --count 50 --year 2023 --min-amount 20 --max-amount 80 \
//!   --format csv --output-dir out
//!
//! # Payment transactions without failures, reproducible seed
//! rowsmith payments --count 100 --no-failed --seed 42 --format json
//!
//! # Custom schema from a YAML file
//! rowsmith custom --schema schema.yaml --count 25 --table events
//! ```
//!
//! The generator itself enforces no record cap; this front-end refuses
//! counts above `--max-rows` (env `ROWSMITH_MAX_ROWS`). Output goes to
//! stdout, or to `<table>_inserts.sql` / `<table>_data.csv` /
//! `<table>_data.json` under `--output-dir`.

mod output;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use output::{output_filename, render_records, OutputFormat};
use rowsmith_core::CustomSchema;
use rowsmith_generator::{OrderOptions, PaymentOptions, RecordGenerator, UserField};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "rowsmith")]
#[command(about = "Generate synthetic tabular records as SQL, CSV, or JSON")]
struct Cli {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Sql, global = true)]
    format: OutputFormat,

    /// Table name for SQL statements and output filenames (defaults to
    /// the entity name)
    #[arg(long, global = true)]
    table: Option<String>,

    /// Directory to write the output file into; prints to stdout if
    /// absent
    #[arg(long, short = 'o', global = true)]
    output_dir: Option<PathBuf>,

    /// RNG seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Refuse to generate more than this many records
    #[arg(long, default_value_t = 10_000, env = "ROWSMITH_MAX_ROWS", global = true)]
    max_rows: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate user records
    Users {
        /// Number of records to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Comma-separated subset of user fields to include
        /// (id,name,email,phone,address,created_at)
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,
    },

    /// Generate order records
    Orders {
        /// Number of records to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Minimum order amount
        #[arg(long, default_value_t = 10.0)]
        min_amount: f64,

        /// Maximum order amount
        #[arg(long, default_value_t = 500.0)]
        max_amount: f64,

        /// Calendar year for order dates (default: current year to date)
        #[arg(long)]
        year: Option<i32>,

        /// Comma-separated pool of user ids to assign orders to
        #[arg(long, value_delimiter = ',')]
        user_ids: Option<Vec<i64>>,
    },

    /// Generate payment transaction records
    Payments {
        /// Number of records to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Comma-separated payment methods to draw from
        #[arg(long, value_delimiter = ',')]
        methods: Option<Vec<String>>,

        /// Never generate failed transactions
        #[arg(long)]
        no_failed: bool,

        /// Keep only failed transactions (best-effort, may return fewer
        /// than requested)
        #[arg(long, conflicts_with = "no_failed")]
        failed_only: bool,
    },

    /// Generate product records
    Products {
        /// Number of records to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,
    },

    /// Generate records from a custom schema file (YAML or JSON)
    Custom {
        /// Path to the schema file
        #[arg(long)]
        schema: PathBuf,

        /// Number of records to generate
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,
    },
}

impl Commands {
    fn count(&self) -> usize {
        match self {
            Self::Users { count, .. }
            | Self::Orders { count, .. }
            | Self::Payments { count, .. }
            | Self::Products { count }
            | Self::Custom { count, .. } => *count,
        }
    }

    fn default_table(&self) -> &'static str {
        match self {
            Self::Users { .. } => "users",
            Self::Orders { .. } => "orders",
            Self::Payments { .. } => "payment_transactions",
            Self::Products { .. } => "products",
            Self::Custom { .. } => "custom_data",
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let count = cli.command.count();
    if count > cli.max_rows {
        bail!(
            "refusing to generate {count} records: exceeds --max-rows {}",
            cli.max_rows
        );
    }

    let mut generator = match cli.seed {
        Some(seed) => RecordGenerator::with_seed(seed),
        None => RecordGenerator::new(),
    };

    let table = cli
        .table
        .clone()
        .unwrap_or_else(|| cli.command.default_table().to_string());

    let records = match &cli.command {
        Commands::Users { count, fields } => {
            let include = match fields {
                Some(names) => Some(
                    names
                        .iter()
                        .map(|name| name.parse::<UserField>())
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                None => None,
            };
            generator.users(*count, include.as_deref())
        }
        Commands::Orders {
            count,
            min_amount,
            max_amount,
            year,
            user_ids,
        } => {
            let opts = OrderOptions {
                user_ids: user_ids.clone(),
                amount_range: (*min_amount, *max_amount),
                year: *year,
            };
            generator.orders(*count, &opts)?
        }
        Commands::Payments {
            count,
            methods,
            no_failed,
            failed_only,
        } => {
            if *failed_only {
                generator.failed_payment_transactions(*count)
            } else {
                let opts = PaymentOptions {
                    methods: methods.clone().unwrap_or_default(),
                    include_failed: !no_failed,
                };
                generator.payment_transactions(*count, &opts)
            }
        }
        Commands::Products { count } => generator.products(*count),
        Commands::Custom { schema, count } => {
            let schema = CustomSchema::from_file(schema)
                .with_context(|| format!("loading schema from {}", schema.display()))?;
            generator.custom(&schema, *count)?
        }
    };

    info!(records = records.len(), table = %table, "generated records");

    let text = render_records(&records, &table, cli.format)?;

    match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let path = dir.join(output_filename(&table, cli.format));
            std::fs::write(&path, &text)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output file");
        }
        None => {
            if text.ends_with('\n') || text.is_empty() {
                print!("{text}");
            } else {
                println!("{text}");
            }
        }
    }

    Ok(())
}
