use anyhow::Result;
use clap::Parser;
use git_history::areas::repository::Repository;
use git_history::areas::workspace::DEFAULT_GIT_PROGRAM;
use git_history::artifacts::history::resolver::RenameTracking;
use git_history::commands::porcelain::history::HistoryOptions;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GIT_HISTORY_LOG";

#[derive(Parser)]
#[command(
    name = "git-history",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "List the previous branches that have been visited within this workspace",
    long_about = "List the previous branches that have been visited within this workspace. \
    Branches are read from the reflog and printed one per line, the most recently \
    visited branch last. Branches that no longer exist are left out, and renamed \
    branches are reported under their current name.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "work-tree",
        value_name = "PATH",
        help = "Read the history of the workspace at PATH instead of the current directory"
    )]
    work_tree: Option<PathBuf>,

    #[arg(long, help = "Do not follow branch renames recorded in the reflog")]
    no_renames: bool,

    #[arg(
        short = 'n',
        long,
        value_name = "N",
        help = "Only list the N most recently visited branches"
    )]
    max_count: Option<usize>,

    #[arg(
        long,
        env = "GIT_HISTORY_GIT",
        default_value = DEFAULT_GIT_PROGRAM,
        value_name = "PATH",
        help = "The git executable to run"
    )]
    git_program: PathBuf,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log more details to stderr (repeat for more)"
    )]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted, reporting the history read so far");
            cancel.cancel();
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(&path, &cli.git_program, Box::new(std::io::stdout()))?;

    let opts = HistoryOptions {
        renames: if cli.no_renames {
            RenameTracking::Ignore
        } else {
            RenameTracking::Follow
        },
        max_count: cli.max_count,
    };

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    repository.history(&opts, cancel).await?;

    Ok(())
}
