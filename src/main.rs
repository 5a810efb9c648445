use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradebook::api::handlers::CreateTradeRequest;
use tradebook::api::ApiServer;
use tradebook::cli::commands::{Cli, Commands};
use tradebook::config::Config;
use tradebook::domain::error::DomainError;
use tradebook::domain::values::owner_id::OwnerId;
use tradebook::domain::values::trade_patch::TradePatch;
use tradebook::domain::values::trade_status::TradeStatus;
use tradebook::infrastructure::auth::jwt::JwtIdentity;
use tradebook::TradeBook;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradebook=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let book = match TradeBook::new(&config) {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("Error initializing trade book at {}: {e}", config.db_path);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(book, &config, cli.command).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run_command(book: TradeBook, config: &Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { bind } => {
            let identity = Arc::new(JwtIdentity::new(config.require_jwt_secret()?)?);
            let addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            ApiServer::new(Arc::new(book), identity).serve(&addr).await?;
        }
        Commands::Token { owner, hours } => {
            let identity = JwtIdentity::new(config.require_jwt_secret()?)?;
            let ttl = chrono::Duration::try_hours(hours)
                .ok_or_else(|| DomainError::Config(format!("--hours out of range: {hours}")))?;
            let token = identity.issue(&OwnerId::new(owner)?, ttl)?;
            println!("{token}");
        }
        Commands::Trades { owner, status } => {
            let status: Option<TradeStatus> = status.map(|s| s.parse()).transpose()?;
            let trades = book.list_trades(&OwnerId::new(owner)?, status)?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::TradeAdd { owner, json } => {
            let req: CreateTradeRequest = serde_json::from_str(&json)?;
            let trade = book.create_trade(&OwnerId::new(owner)?, req.item_name, req.buy_price)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::TradeUpdate { owner, id, json } => {
            let patch = TradePatch::from_json(json.as_bytes())?;
            let trade = book.update_trade(&OwnerId::new(owner)?, &id, patch)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::TradeDelete { owner, id } => {
            book.delete_trade(&OwnerId::new(owner)?, &id)?;
            println!("Trade {id} deleted");
        }
        Commands::Summary { owner } => {
            let summary = book.summary(&OwnerId::new(owner)?)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
