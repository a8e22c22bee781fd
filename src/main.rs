use clap::{Parser, Subcommand};

use loldex::server::{
    config::Config, ddragon, error::Error, model::app::AppState, router,
    service::ingest::IngestService, startup,
};

#[derive(Parser)]
#[command(name = "loldex", version, about = "Champion encyclopedia server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Create the schema and mirror the DDragon champion catalog
    Seed,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("loldex=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Serve => serve(&config).await,
        Command::Seed => seed(&config).await,
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn serve(config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let session = startup::session_layer();

    let routes = router::routes()
        .with_state(AppState { db })
        .layer(session);

    tracing::info!("Starting server on {}", config.address);

    let listener = tokio::net::TcpListener::bind(config.address).await?;
    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn seed(config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    startup::run_migrations(&db).await?;

    let client = ddragon::Client::new(&config.ddragon_url, &config.ddragon_version);
    let ingest_service = IngestService::new(&db, &client);

    ingest_service.sync_champions().await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate()).expect("failed to install signal handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
