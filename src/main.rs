use clap::{Parser, Subcommand};
use latr::commands::*;
use latr::core::{
    error::{LatrError, Result},
    print_error,
    record::Mode,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "latr")]
#[command(about = "Recently touched files across your workspace, by mtime or git history")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct RootArgs {
    /// Workspace root folders (defaults to the current directory)
    roots: Vec<PathBuf>,
    /// Additional directory name to skip (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,
    /// Data source: "os" for modification times, "git" for history
    #[arg(short, long)]
    mode: Option<Mode>,
    /// Oldest first
    #[arg(short, long)]
    ascending: bool,
}

impl From<RootArgs> for WorkspaceOptions {
    fn from(args: RootArgs) -> Self {
        WorkspaceOptions {
            roots: args.roots,
            exclude: args.exclude,
            mode: args.mode,
            ascending: args.ascending,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show recent files grouped by directory
    Recent {
        #[command(flatten)]
        roots: RootArgs,
        /// Print the grouped view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a file's content from the commit that added it
    History {
        /// File to look up
        path: PathBuf,
        /// Workspace root folders (defaults to the current directory)
        #[arg(short, long = "root")]
        roots: Vec<PathBuf>,
        /// Write the content to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Keep the view live: follow file changes and take commands from stdin
    Watch {
        #[command(flatten)]
        roots: RootArgs,
    },
    /// Show the effective configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn report(e: &LatrError) {
    if !e.is_user_visible() {
        log::debug!("{e:?}");
    }
    print_error(&e.to_string());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Recent { roots, json } => execute_recent(roots.into(), json).await,
        Commands::History {
            path,
            roots,
            output,
        } => {
            let options = WorkspaceOptions {
                roots,
                ..Default::default()
            };
            execute_history(&path, options, output).await
        }
        Commands::Watch { roots } => execute_watch(roots.into()).await,
        Commands::Config { init } => execute_config(init),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }

    Ok(())
}
