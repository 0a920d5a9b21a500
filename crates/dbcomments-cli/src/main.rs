use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use dbcomments_config::FileFormat;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;
use commands::{cmd_init, cmd_new, cmd_show, cmd_sql, cmd_sync};

/// dbcomments command-line interface.
#[derive(Parser, Debug)]
#[command(name = "dbcomments", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize dbcomments.json with defaults.
    Init,
    /// Create a model template inside an application directory.
    New {
        /// Application label, e.g. `people`.
        app: String,
        /// CamelCase model name, e.g. `Person`.
        name: String,
        /// Model file format; defaults to the configured one.
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
    },
    /// Show the table and column comments derived from the models.
    Show {
        #[arg(long)]
        app: Option<String>,
        /// Print the comment maps as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the COMMENT statements a sync would run, without touching the database.
    Sql {
        #[arg(long)]
        app: Option<String>,
        /// Database alias; defaults to the configured default database.
        #[arg(long)]
        database: Option<String>,
    },
    /// Write model comments to the database, as after a migration run.
    Sync {
        #[arg(long)]
        app: Option<String>,
        /// Database alias; defaults to the configured default database.
        #[arg(long)]
        database: Option<String>,
        /// 0 is silent, 2 and above prints every written column comment.
        #[arg(short = 'v', long, default_value_t = 2)]
        verbosity: u8,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Init => cmd_init(),
        Commands::New { app, name, format } => cmd_new(app, name, format),
        Commands::Show { app, json } => cmd_show(app, json),
        Commands::Sql { app, database } => cmd_sql(app, database),
        Commands::Sync {
            app,
            database,
            verbosity,
        } => cmd_sync(app, database, verbosity).await,
    }
}
