mod environment;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use scenario_operations::operations::{CollectOperation, CollectOutput, CollectorConfig};
use scenario_operations::providers::{
    FileSystemWorkflowWriter, Git2DiffSource, GitCommandDiffSource,
};
use scenario_operations::traits::DiffSource;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum DiffBackend {
    /// Diff through libgit2
    #[default]
    Git2,
    /// Run `git diff --name-only HEAD^`
    GitCommand,
}

#[derive(Parser)]
#[command(name = "scenario-collector")]
#[command(about = "Write a test workflow listing the scenarios changed in the last commit", long_about = None)]
#[command(version)]
struct Cli {
    /// Path inside the repository to inspect (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Workspace root receiving the workflow (default: $GITHUB_WORKSPACE)
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// How to compute the changed files
    #[arg(long, value_enum, default_value_t = DiffBackend::Git2)]
    diff_backend: DiffBackend,

    /// Log every changed file and selected scenario
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Do not print the summary line
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = environment::resolve_config(cli.path, cli.workspace)?;
    debug!(
        repo = %config.repo_root.display(),
        workspace = %config.workspace_root.display(),
        backend = ?cli.diff_backend,
        "resolved configuration"
    );

    let output = match cli.diff_backend {
        DiffBackend::Git2 => collect(Git2DiffSource::new(), &config)?,
        DiffBackend::GitCommand => collect(GitCommandDiffSource::new(), &config)?,
    };

    debug!(
        changed = output.changed_file_count,
        "finished scanning changed files"
    );

    if !cli.quiet {
        println!(
            "Wrote {} scenario(s) to '{}'",
            output.configuration.len(),
            output.output_path.display()
        );
    }

    Ok(())
}

fn collect<D: DiffSource>(diff_source: D, config: &CollectorConfig) -> Result<CollectOutput> {
    let operation = CollectOperation::new(diff_source, FileSystemWorkflowWriter::new());
    Ok(operation.execute(config)?)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scenario_collector=debug,scenario_operations=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "scenario_collector=warn,scenario_operations=warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
