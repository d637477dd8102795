use anyhow::{Context, Result};
use clap::Parser;
use rusty_recommender_api::{ApiConfig, ApiServer};
use rusty_recommender_core::{build_store, dataset::SAMPLE_PREFERENCES, RecommenderConfig, RecommenderService};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
use cli::{clamp_top_k, parse_vector, print_recommendations, Cli, Commands, RecommendArgs, ServeArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Results go to stdout, so logs stay on stderr and quiet unless serving
    let default_filter = match cli.command {
        Some(Commands::Serve(_)) => "rusty_recommender=info,rusty_recommender_core=info,rusty_recommender_api=info,tower_http=info",
        _ => "warn",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RecommenderConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        None => run_recommend(config, RecommendArgs::default()),
        Some(Commands::Recommend(args)) => run_recommend(config, args),
        Some(Commands::Serve(args)) => run_serve(config, args).await,
    }
}

fn run_recommend(mut config: RecommenderConfig, args: RecommendArgs) -> Result<()> {
    if let Some(path) = args.dataset {
        config = config.with_dataset_path(path);
    }
    if let Some(top_k) = args.top_k {
        config = config.with_top_k(clamp_top_k(top_k));
    }

    let store = build_store(&config).context("Failed to build vector store")?;

    let query = match args.query {
        Some(raw) => parse_vector(&raw).context("Invalid query vector")?,
        None => SAMPLE_PREFERENCES.to_vec(),
    };
    debug!("Query vector: {:?}", query);

    let results = store
        .recommend(&query, config.top_k)
        .context("Recommendation failed")?;

    let stdout = std::io::stdout();
    print_recommendations(&mut stdout.lock(), &results)?;
    Ok(())
}

async fn run_serve(mut config: RecommenderConfig, args: ServeArgs) -> Result<()> {
    if let Some(path) = args.dataset {
        config = config.with_dataset_path(path);
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let store = build_store(&config).context("Failed to build vector store")?;
    let service = RecommenderService::new(store, config.top_k);

    info!("Starting recommender API...");
    let server = ApiServer::new(ApiConfig::from(&config.server), service);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("API server failed")
}
