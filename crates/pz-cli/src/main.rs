//! Operator CLI for the Pleyazul reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "pz",
    about = "Pleyazul — deterministic tarot, I Ching and medicine-wheel readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding tarot.json, iching.json, rueda.json and spreads.json
    #[arg(short = 'C', long, global = true, env = "PZ_CONTENT_DIR", default_value = "content")]
    content_dir: PathBuf,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "PZ_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a content directory with starter collections
    Init {
        /// Directory to create
        dir: PathBuf,
    },

    /// List the configured spreads
    Spreads,

    /// List the items of a collection
    List {
        /// Collection: tarot, iching, rueda or spreads
        kind: String,
    },

    /// Validate the content directory
    Check,

    /// Generate a reading for an order
    Read {
        /// Spread id (see `pz spreads`)
        #[arg(short, long)]
        spread: String,

        /// Customer email, part of the order seed
        #[arg(short, long)]
        email: String,

        /// Order id (default: a new random UUID)
        #[arg(short, long)]
        order: Option<String>,

        /// Output format: json, markdown, html, telegram
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Site base URL for the link in telegram output
        #[arg(long, env = "PZ_BASE_URL")]
        base_url: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replace a collection with the contents of a JSON file
    Import {
        /// Collection: tarot, iching, rueda or spreads
        kind: String,

        /// JSON file to import
        file: PathBuf,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let dir = cli.content_dir;
    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(&dir),
        Commands::Spreads => commands::spreads::run(&dir),
        Commands::List { kind } => commands::list::run(&dir, &kind),
        Commands::Check => commands::check::run(&dir),
        Commands::Read {
            spread,
            email,
            order,
            format,
            base_url,
            output,
        } => commands::read::run(
            &dir,
            &commands::read::ReadArgs {
                spread: &spread,
                email: &email,
                order: order.as_deref(),
                format: &format,
                base_url: base_url.as_deref(),
                output: output.as_deref(),
            },
        ),
        Commands::Import { kind, file } => commands::import::run(&dir, &kind, &file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
