use anyhow::Result;
use clap::{Parser, Subcommand};
use kit::areas::repository::Repository;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kit",
    version = "0.1.0",
    about = "A minimal content-addressed version control tool",
    long_about = "kit stores file contents by their SHA-1 digest, records snapshots of the \
    whole object store as time-ordered commits, and lists them newest first.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long = "git-dir",
        env = "KIT_DIR",
        global = true,
        help = "Path to the repository root (defaults to ./.kit)"
    )]
    git_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the repository root with its objects and commits \
        directories and a HEAD reference. It fails if the root already exists."
    )]
    Init {
        #[arg(index = 1, help = "The working directory to create the repository in")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Store file contents in the object store",
        long_about = "This command reads each file fully and stores its content under its SHA-1 digest. \
        Content that is already stored is not written again."
    )]
    Add {
        #[arg(index = 1, help = "The files to add")]
        files: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Record a snapshot of every stored object",
        long_about = "This command joins the given words into a commit message and records a commit \
        covering the entire object store."
    )]
    Commit {
        #[arg(
            index = 1,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "The commit message words"
        )]
        message: Vec<String>,
    },
    #[command(name = "log", about = "Show commit history, newest first")]
    Log,
    #[command(name = "push", about = "Alias of log")]
    Push,
    #[command(name = "pull", about = "Alias of log")]
    Pull,
    #[command(name = "remote", about = "Alias of log")]
    Remote,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("KIT_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let writer = Box::new(std::io::stdout());

    let open = |work_dir: Option<&PathBuf>| -> Result<Repository> {
        if let Some(git_dir) = &cli.git_dir {
            return Ok(Repository::new(git_dir.clone(), writer));
        }
        let work_dir = match work_dir {
            Some(work_dir) => work_dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Repository::in_work_dir(&work_dir, writer))
    };

    match &cli.command {
        Commands::Init { path } => open(path.as_ref())?.init()?,
        Commands::Add { files } => open(None)?.add(files)?,
        Commands::Commit { message } => open(None)?.commit(message)?,
        Commands::Log | Commands::Push | Commands::Pull | Commands::Remote => open(None)?.log()?,
    }

    Ok(())
}
