use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ckb_search::infrastructure::explorer::{ExplorerApi, HttpExplorerClient};
use ckb_search::{config, resolve_identifier, NetworkType};

#[derive(Debug, Parser)]
#[command(
    name = "ckb-search",
    version,
    about = "Resolve CKB explorer search queries from the command line"
)]
struct Args {
    /// Block number/hash, transaction hash, address, lock hash, or a
    /// token name with --name
    query: String,

    /// Fuzzy-search token names and symbols instead of resolving an
    /// identifier
    #[arg(long)]
    name: bool,

    /// Lookup API endpoint (defaults to the configured network's)
    #[arg(long)]
    api: Option<String>,

    /// Network the explorer serves: mainnet or testnet
    #[arg(long)]
    network: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = config::load();

    let network = match args.network.as_deref() {
        Some("mainnet") => NetworkType::Mainnet,
        Some("testnet") => NetworkType::Testnet,
        Some(other) => anyhow::bail!("unknown network {other:?} (expected mainnet or testnet)"),
        None => config.network,
    };
    let api_url = args
        .api
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| network.default_api_url().to_string());

    let client = HttpExplorerClient::new(api_url)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if args.name {
        let results = rt.block_on(client.fetch_by_name(&args.query))?;
        if results.is_empty() {
            println!("no matches");
            return Ok(());
        }
        for item in results {
            println!(
                "{}  {}  {}",
                item.type_hash,
                item.symbol.as_deref().unwrap_or("-"),
                item.full_name.as_deref().unwrap_or("-"),
            );
        }
        return Ok(());
    }

    let destination = rt.block_on(resolve_identifier(&client, network, &args.query));
    println!("{}", destination.path);
    Ok(())
}
