use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitversion::cli::{run_version_workflow, VersionWorkflowArgs};
use gitversion::config::BuildNumberStrategy;
use gitversion::ui::{self, OutputFormat};

#[derive(clap::Parser)]
#[command(
    name = "gitversion",
    version,
    about = "Generate a semantic version from git tags and branches"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Directory inside the repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = OutputFormat::Text, help = "Output format: text or json")]
    output: OutputFormat,

    #[arg(
        short,
        long,
        help = "Build number strategy: commit-count, timestamp or none"
    )]
    strategy: Option<BuildNumberStrategy>,

    #[arg(short, long, help = "Log version decisions to stderr")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the version; diagnostics go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let workflow_args = VersionWorkflowArgs {
        repo_path: args.repo,
        config_path: args.config,
        strategy: args.strategy,
    };

    let outcome = run_version_workflow(&workflow_args)
        .and_then(|result| ui::print_result(&result, args.output).map_err(Into::into));

    if let Err(e) = outcome {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
