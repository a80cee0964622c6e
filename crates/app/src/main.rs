use std::fmt;
use std::sync::Arc;

use services::{Catalog, ContentConfig, ContentLoader, HttpSource, QuizFlow};
use tracing_subscriber::EnvFilter;
use ui::QuizApp;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    content_url: Option<String>,
    timeout_secs: Option<String>,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content-url <url>] [--timeout-secs <n>] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --content-url {}", services::DEFAULT_BASE_URL);
    eprintln!("  --timeout-secs 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CONTENT_URL, QUIZ_FETCH_TIMEOUT_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            content_url: None,
            timeout_secs: None,
            verbose: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content-url" => {
                    parsed.content_url = Some(require_value(args, "--content-url")?);
                }
                "--timeout-secs" => {
                    parsed.timeout_secs = Some(require_value(args, "--timeout-secs")?);
                }
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over --verbose, which wins over the "info" default.
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr; stdout belongs to the quiz screens.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(args.verbose);

    // Env first, flags override.
    let mut config = ContentConfig::from_env()?;
    if let Some(url) = args.content_url.as_deref() {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = args.timeout_secs.as_deref() {
        config = config.with_timeout_secs(secs)?;
    }
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "content config");

    let source = HttpSource::new(&config)?;
    let loader = ContentLoader::new(Arc::new(source));
    let flow = QuizFlow::new(Catalog::builtin(), loader);

    QuizApp::new(flow).run().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
