/// Userbase Server - HTTP CRUD service over user records
use clap::{Parser, Subcommand};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userbase_core::UserStore;
use userbase_server::{config::ServerConfig, create_router, state::AppState};
use userbase_storage::SqliteUserStore;

#[derive(Parser)]
#[command(name = "userbase-server")]
#[command(about = "Userbase HTTP CRUD server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// List all users
    ListUsers,
    /// Bulk-insert users named "Name 1" to "Name <count>" in one transaction
    Seed {
        /// Number of users to insert
        #[arg(short = 'n', long, default_value_t = 100_000)]
        count: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userbase_server=info,userbase_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser { name } => {
            add_user(&config, &name).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
        Commands::Seed { count } => {
            seed(&config, count).await?;
        }
    }

    Ok(())
}

/// Connect to the configured database and bring its schema up to date
async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteUserStore> {
    if let Some(parent) = database_dir(&config.storage.database_url) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = userbase_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    userbase_storage::run_migrations(&pool).await?;

    Ok(SqliteUserStore::new(pool))
}

/// Directory holding a file-backed `sqlite://` database, if any
fn database_dir(database_url: &str) -> Option<&Path> {
    let path = database_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next()?;
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Userbase server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(config).await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::new(store));
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, name: &str) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let user = store.insert(name).await?;
    tracing::info!(id = user.id, name, "User created");
    println!("Created user {} - {}", user.id, name);

    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let users = store.get_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name.as_deref().unwrap_or("<null>"));
    }

    Ok(())
}

async fn seed(config: &ServerConfig, count: u64) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let existing = store.count().await?;
    if existing > 0 {
        tracing::warn!(existing, "Table is not empty; seeded ids will not match their names");
    }

    let started = std::time::Instant::now();
    let names: Vec<String> = (1..=count).map(|i| format!("Name {}", i)).collect();
    let inserted = store.insert_many(&names).await?;

    tracing::info!(
        inserted,
        elapsed_secs = started.elapsed().as_secs_f64(),
        "Seed complete"
    );

    Ok(())
}
