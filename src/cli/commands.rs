use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradebook", about = "Personal trade ledger with profit and cash statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listen address (overrides TRADEBOOK_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Mint a bearer token for an owner
    Token {
        #[arg(long)]
        owner: String,
        /// Lifetime in hours
        #[arg(long, default_value = "24")]
        hours: i64,
    },
    /// List an owner's trades
    Trades {
        #[arg(long)]
        owner: String,
        /// Only trades with this status (sold, unsold)
        #[arg(long)]
        status: Option<String>,
    },
    /// Record a purchase
    TradeAdd {
        #[arg(long)]
        owner: String,
        /// JSON with itemName, buyPrice
        json: String,
    },
    /// Edit a trade; a sellPrice marks it sold
    TradeUpdate {
        #[arg(long)]
        owner: String,
        /// Trade ID
        id: String,
        /// JSON with any of itemName, buyPrice, sellPrice, siteCommission
        json: String,
    },
    /// Delete a trade
    TradeDelete {
        #[arg(long)]
        owner: String,
        /// Trade ID
        id: String,
    },
    /// Show summary statistics
    Summary {
        #[arg(long)]
        owner: String,
    },
}
