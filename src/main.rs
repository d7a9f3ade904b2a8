use clap::{Parser as ClapParser, Subcommand};
use gql_scalars::cli::{self, CliError, CoerceMode, CoerceOptions, CoerceOutcome};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Exit code when a literal does not fit the scalar
const NOT_APPLICABLE_EXIT: i32 = 2;

#[derive(ClapParser)]
#[command(name = "gql-scalars")]
#[command(about = "Coerce values through the built-in GraphQL scalars (Int, Float, String, Boolean, ID)")]
#[command(version)]
struct Cli {
    /// Log coercion decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize an internal value for output
    Serialize {
        /// Scalar name, e.g. Int
        scalar: String,

        /// JSON value (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Coerce a variable value supplied by a client
    ParseValue {
        /// Scalar name, e.g. Int
        scalar: String,

        /// JSON value (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Coerce a literal written in query text, e.g. 42 or "abc"
    ParseLiteral {
        /// Scalar name, e.g. Int
        scalar: String,

        /// Literal source text (reads from stdin if not provided)
        #[arg(short, long)]
        literal: Option<String>,
    },

    /// List the specified scalars
    Scalars,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serialize {
            scalar,
            input,
            pretty,
        } => run_coerce(scalar, CoerceMode::Serialize, input, pretty),
        Commands::ParseValue {
            scalar,
            input,
            pretty,
        } => run_coerce(scalar, CoerceMode::ParseValue, input, pretty),
        Commands::ParseLiteral { scalar, literal } => {
            run_coerce(scalar, CoerceMode::ParseLiteral, literal, false)
        }
        Commands::Scalars => {
            print!("{}", cli::scalars_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_coerce(
    scalar: String,
    mode: CoerceMode,
    input: Option<String>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CoerceOptions {
        scalar,
        mode,
        input,
    };

    match cli::execute_coerce(&options)? {
        CoerceOutcome::Coerced(value) => println!("{}", cli::render_json(value, pretty)?),
        CoerceOutcome::NotApplicable => {
            println!("not applicable");
            std::process::exit(NOT_APPLICABLE_EXIT);
        }
    }
    Ok(())
}
