/// dtix command-line tool: inspect, validate and synthesize event-account
/// bytes for the ticketing program.
///
/// # Command overview
///
/// ```text
/// dtix <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Decode an event account and print its fields
///   validate   Check that an event account decodes cleanly
///   encode     Build event-account bytes from a JSON manifest
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log decoder progress to stderr (RUST_LOG overrides)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Account bytes are read from a file that already holds them; fetching
/// from an RPC node and deriving the account address happen elsewhere.
///
/// # Exit codes
///
/// | Code | Meaning                                         |
/// |------|-------------------------------------------------|
/// | 0    | Success (diagnostics may still be printed)      |
/// | 1    | Error (I/O failure, bad input, failed decode)   |
///
/// Logs and error details go to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use dtix_types::DecodeLimits;
use dtix_types::limits::{DEFAULT_MAX_STRING_LEN, DEFAULT_MAX_VECTOR_LEN};
use tracing_subscriber::EnvFilter;

mod cmd_encode;
mod cmd_inspect;
mod cmd_validate;
mod input;
mod report;

use input::Encoding;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decoder and fixture tool for on-chain event accounts.
#[derive(Parser)]
#[command(name = "dtix", version, about = "Event account inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log decoder progress at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode an event account and print its fields.
    Inspect(InspectArgs),
    /// Check that an event account decodes without errors.
    Validate(ValidateArgs),
    /// Build event-account bytes from a JSON manifest.
    Encode(EncodeArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `dtix inspect`.
///
/// ```text
/// ┌──────────────────────┬────────────────────────────────────────────────┐
/// │ Flag                 │ Effect                                         │
/// ├──────────────────────┼────────────────────────────────────────────────┤
/// │ --encoding           │ raw (default) | hex | base64                   │
/// │ --json               │ Print one JSON object instead of text          │
/// │ --offsets            │ Include the start offset of every field        │
/// │ --max-string-len N   │ String length bound (default 1024)             │
/// │ --max-vector-len N   │ Mapping count bound (default 100)              │
/// └──────────────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// File holding the account data.
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = Encoding::Raw)]
    pub encoding: Encoding,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show where each field starts, skipped fields included.
    #[arg(long)]
    pub offsets: bool,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Arguments for `dtix validate`.
///
/// Runs a full decode and prints `✓` / `⚠` / `✗` lines. Exits 1 on a
/// failed decode, or on any warning when `--strict` is set.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// File holding the account data.
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = Encoding::Raw)]
    pub encoding: Encoding,

    /// Treat warnings (diagnostics, foreign discriminator) as failures.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Arguments for `dtix encode`.
///
/// Reads a JSON manifest (see `cmd_encode`) and writes the account bytes
/// in the requested encoding.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Path to the JSON manifest.
    pub input: PathBuf,

    /// Output file path.
    #[arg(short, long)]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Encoding::Raw)]
    pub encoding: Encoding,

    /// Write values the decoder would reject (oversized strings, too many
    /// mappings).
    #[arg(long)]
    pub unchecked: bool,
}

/// Decode bounds shared by `inspect` and `validate`.
#[derive(clap::Args)]
pub struct LimitArgs {
    /// Longest string accepted, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_STRING_LEN)]
    pub max_string_len: u32,

    /// Most ticket-area mappings accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_VECTOR_LEN)]
    pub max_vector_len: u32,
}

impl LimitArgs {
    fn to_limits(&self) -> DecodeLimits {
        DecodeLimits::new(self.max_string_len, self.max_vector_len)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Encode(args) => cmd_encode::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
