use clap::{Parser, Subcommand};
use hubref::core::{HubrefError, HubrefResult};
use hubref::resolver::RepoCoordinates;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "hubref")]
#[command(about = "Resolve GitHub links into branches, tags, commits and files")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a `ref/path` string into a ref and a path
    Resolve {
        /// Repository as owner/repo
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
        /// Ref followed by an optional path, e.g. release/2.x/docs/index.md
        ref_and_path: String,
        /// Line fragment such as L12 or L12-L14
        #[arg(short, long, conflicts_with = "browse")]
        fragment: Option<String>,
        /// Open the repository browser instead of a file view
        #[arg(short, long)]
        browse: bool,
        /// Page to open the browser on
        #[arg(long, requires = "browse")]
        initial_page: Option<u32>,
    },
    /// Resolve a `#diff-<sha256>` link
    #[command(subcommand)]
    Diff(DiffCommands),
    /// List a repository's branches
    Branches {
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
    },
    /// List a repository's tags
    Tags {
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
    },
    /// Check whether you starred a repository
    Starred {
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
    },
    /// Store a GitHub token in the OS keychain
    Login {
        /// Token to store (prompted for when omitted)
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored GitHub token
    Logout,
}

#[derive(Subcommand)]
enum DiffCommands {
    /// Diff link into a commit
    Commit {
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
        sha: String,
        /// Fragment such as diff-<sha256>R10-R12
        fragment: String,
    },
    /// Diff link into a pull request
    Pull {
        #[arg(value_parser = cli::parse_repo)]
        repo: RepoCoordinates,
        number: u64,
        /// Fragment such as diff-<sha256>L3
        fragment: String,
    },
}

async fn run(args: Cli) -> HubrefResult<()> {
    let json = args.json;
    match args.command {
        Commands::Login { token } => cli::auth::login(token, &cli::terminal::DialoguerInput),
        Commands::Logout => cli::auth::logout(),
        Commands::Resolve {
            repo,
            ref_and_path,
            fragment,
            browse,
            initial_page,
        } => {
            let container = cli::container()?;
            cli::resolve::run(
                &container,
                cli::resolve::ResolveOptions {
                    repo,
                    ref_and_path,
                    fragment,
                    browse,
                    initial_page,
                    json,
                },
            )
            .await
        }
        Commands::Diff(cmd) => {
            let container = cli::container()?;
            match cmd {
                DiffCommands::Commit { repo, sha, fragment } => {
                    cli::diff::commit(&container, repo, &sha, &fragment, json).await
                }
                DiffCommands::Pull {
                    repo,
                    number,
                    fragment,
                } => cli::diff::pull(&container, repo, number, &fragment, json).await,
            }
        }
        Commands::Branches { repo } => cli::refs::branches(&cli::container()?, repo).await,
        Commands::Tags { repo } => cli::refs::tags(&cli::container()?, repo).await,
        Commands::Starred { repo } => cli::refs::starred(&cli::container()?, repo).await,
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("\n{}", hubref::format_error_with_help(&HubrefError::Io(e)));
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(run(args));

    // A prompt abandoned after its notification timed out still occupies a
    // blocking thread; do not wait for it.
    runtime.shutdown_timeout(Duration::from_millis(100));

    // Handle result and exit codes
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", hubref::format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
