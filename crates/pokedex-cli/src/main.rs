//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers, which only see the
//! `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pokedex_cli::handlers::{self, remove::RemoveTarget};
use pokedex_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

fn init_tracing(verbose: bool) {
    // --verbose beats RUST_LOG; otherwise RUST_LOG, falling back to warn
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::with_defaults(cli.database)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Search { name } => handlers::search::execute(&ctx, &name).await,
        Commands::Show { name, refresh } => handlers::show::execute(&ctx, &name, refresh).await,
        Commands::List { sort } => handlers::list::execute(&ctx, sort).await,
        Commands::Find { query } => handlers::find::execute(&ctx, &query).await,
        Commands::Seed => handlers::seed::execute(&ctx).await,
        Commands::Remove { name, id, force } => {
            let target = RemoveTarget::from_args(name, id)?;
            handlers::remove::execute(&ctx, target, force).await
        }
        Commands::Clear { force } => handlers::clear::execute(&ctx, force).await,
        Commands::Count => handlers::count::execute(&ctx).await,
        Commands::Watch => handlers::watch::execute(&ctx).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{e:#}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
