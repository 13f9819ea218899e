pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use db::Store;
pub use models::{Author, AuthorError, AuthorId};

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn open_store(config: &Config) -> anyhow::Result<Store> {
    let store = Store::from_config(&config.general).await?;
    debug!("Using database {}", config.general.database_path);
    Ok(store)
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    config.validate()?;
    init_tracing(&config);

    match cli.command {
        Commands::Init => cli::cmd_init(),
        Commands::Add(args) => cli::cmd_add_author(&config, &open_store(&config).await?, args).await,
        Commands::Show { id } => cli::cmd_show_author(&open_store(&config).await?, &id).await,
        Commands::Search { email } => {
            cli::cmd_search_authors(&open_store(&config).await?, &email).await
        }
        Commands::Update(args) => {
            cli::cmd_update_author(&config, &open_store(&config).await?, args).await
        }
        Commands::Activate { token } => {
            cli::cmd_activate_author(&open_store(&config).await?, &token).await
        }
        Commands::Remove { id, yes } => {
            cli::cmd_remove_author(&open_store(&config).await?, &id, yes).await
        }
    }
}
