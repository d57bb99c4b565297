use clap::{Parser, Subcommand};
use serde_json::Value;

use stock_predictor_api::routing::router::{HEALTH_PATH, STOCKS_PATH, STOCK_DETAIL_PREFIX};
use stock_predictor_api::Router;

#[derive(Parser)]
#[command(name = "stock-cli")]
#[command(about = "Client CLI for the Stock Predictor API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,
    /// List all known stocks
    List,
    /// Show detail for one symbol
    Show { symbol: String },
    /// GET an arbitrary path from the server
    Get { path: String },
    /// Route a path in-process, without a server
    Route { path: String },
    /// Route the sample requests in-process and print the results
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => fetch(&client, &cli.url, HEALTH_PATH).await?,
        Commands::List => fetch(&client, &cli.url, STOCKS_PATH).await?,
        Commands::Show { symbol } => {
            let path = format!("{}{}", STOCK_DETAIL_PREFIX, symbol);
            fetch(&client, &cli.url, &path).await?
        }
        Commands::Get { path } => fetch(&client, &cli.url, &path).await?,
        Commands::Route { path } => {
            let response = Router::default().route(&path);
            println!("{}", response.status);
            println!("{}", serde_json::to_string_pretty(&response.body)?);
        }
        Commands::Demo => {
            let router = Router::default();
            for route in router.routes() {
                println!("{:<14} {}", route.endpoint.label(), route.pattern());
            }
            for path in [HEALTH_PATH, STOCKS_PATH, "/api/v1/stocks/LMT"] {
                println!("\nGET {}:", path);
                println!("{}", router.route_json(path));
            }
        }
    }

    Ok(())
}

async fn fetch(
    client: &reqwest::Client,
    base: &str,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = format!("{}{}", base.trim_end_matches('/'), path);
    let res = client.get(&url).send().await?;

    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
