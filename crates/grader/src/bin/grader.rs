// ABOUTME: CLI binary for the HTML selector grader.
// ABOUTME: Checks a local HTML file or a URL against a JSON checklist and prints the result as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use html_grader::document::{HTMLFILE_DEFAULT, URL_DEFAULT};
use html_grader::input::assert_file_exists;
use html_grader::{emit, load_checks, GradeError, Grader, Source};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "grader", version)]
#[command(about = "Check an HTML document for the presence of CSS selectors")]
struct Args {
    /// Path to the JSON checklist of selectors
    #[arg(short = 'c', long = "checks", default_value = html_grader::checks::CHECKSFILE_DEFAULT)]
    checks: PathBuf,

    /// Path to the HTML file to check
    #[arg(short = 'f', long = "file", default_value = HTMLFILE_DEFAULT)]
    file: PathBuf,

    /// Fetch the document from a URL instead of --file (demo page when no address is given)
    #[arg(short = 'u', long = "url", num_args = 0..=1, default_missing_value = URL_DEFAULT)]
    url: Option<String>,

    /// Treat non-2xx HTTP responses as fetch errors
    #[arg(long = "strict-status")]
    strict_status: bool,

    /// User-Agent header sent with --url
    #[arg(long = "user-agent")]
    user_agent: Option<String>,

    /// Log debug output to stderr
    #[arg(long = "debug")]
    debug: bool,
}

/// `--debug` enables debug output for this crate and ignores `RUST_LOG`.
/// Otherwise `RUST_LOG` sets the filter, falling back to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("html_grader=debug,grader=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report_missing(err: &GradeError) -> ExitCode {
    eprintln!("{} does not exist. Exiting.", err.target);
    ExitCode::from(1)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    tracing::debug!("grader starting with args: {:?}", args);

    if let Err(err) = assert_file_exists(&args.checks) {
        return report_missing(&err);
    }

    let source = Source::select(args.file, args.url);
    if let Source::File(ref path) = source {
        if let Err(err) = assert_file_exists(path) {
            return report_missing(&err);
        }
    }

    let checks = match load_checks(&args.checks) {
        Ok(checks) => checks,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    };

    let mut builder = Grader::builder().strict_status(args.strict_status);
    if let Some(ua) = args.user_agent {
        builder = builder.user_agent(ua);
    }
    let grader = match builder.try_build() {
        Ok(grader) => grader,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    };

    let map = match grader.check(&source, &checks).await {
        Ok(map) => map,
        Err(err) if err.is_network() => {
            eprintln!("Error: {}", err.message());
            eprintln!("Exiting now");
            return ExitCode::from(1);
        }
        Err(err) if err.is_missing_file() => return report_missing(&err),
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = emit::emit(&map) {
        eprintln!("error writing output: {}", e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
