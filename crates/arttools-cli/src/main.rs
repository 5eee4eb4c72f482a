use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arttools_core::catalog::CatalogSource;
use arttools_core::filter::{brand_facets, filter_art_tools, ALL_BRANDS};
use arttools_core::models::ArtTool;
use arttools_core::providers::RemoteCatalog;
use arttools_core::{Config, FavoritesProvider, FavoritesService};
use arttools_store::FileBackend;

#[derive(Parser)]
#[command(name = "arttools")]
#[command(version, about = "Terminal storefront browser for art tools", long_about = None)]
struct Cli {
    /// Base URL of the remote catalog (overrides the config file)
    #[arg(long, env = "ARTTOOLS_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List art tools, optionally narrowed by search text and brand
    List {
        /// Case-insensitive text matched against name, brand and description
        #[arg(long, default_value = "")]
        search: String,

        /// Exact brand to keep; "All" disables brand filtering
        #[arg(long, default_value = ALL_BRANDS)]
        brand: String,
    },
    /// List the brands available for filtering
    Brands,
    /// Show one art tool in detail
    Show {
        /// Catalog id of the art tool
        id: String,
    },
    /// Manage the locally persisted favorite set
    #[command(subcommand)]
    Fav(FavCommand),
}

#[derive(clap::Subcommand)]
enum FavCommand {
    /// Print the favorite art tools
    List,
    /// Mark an art tool as favorite by id
    Add { id: String },
    /// Unmark an art tool by id
    Remove { id: String },
    /// Empty the favorite set
    Clear,
    /// Delete the favorites storage entry entirely
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arttools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let base_url = cli.api_url.unwrap_or_else(|| config.catalog.base_url.clone());
    let catalog = RemoteCatalog::new(base_url);

    let data_dir = config.storage.resolve_data_dir()?;
    let provider = FavoritesProvider::initialize(Arc::new(FileBackend::new(data_dir))).await;
    let favorites = provider.handle();

    match cli.command {
        Commands::List { search, brand } => {
            let Some(items) = fetch_catalog(&catalog).await else {
                return Ok(());
            };

            let visible = filter_art_tools(&items, &search, &brand);
            if visible.is_empty() {
                println!("No art tools found. Try adjusting your filters.");
            }
            for tool in &visible {
                print_row(tool, &favorites);
            }
        }
        Commands::Brands => {
            let Some(items) = fetch_catalog(&catalog).await else {
                return Ok(());
            };

            for brand in brand_facets(&items) {
                println!("{}", brand);
            }
        }
        Commands::Show { id } => match catalog.get_art_tool(&id).await {
            Ok(tool) => print_detail(&tool, &favorites),
            Err(e) => {
                tracing::error!("Failed to fetch art tool {}: {}", id, e);
                println!("Could not load art tool {}.", id);
            }
        },
        Commands::Fav(command) => run_fav_command(command, &catalog, &favorites).await?,
    }

    Ok(())
}

async fn run_fav_command(
    command: FavCommand,
    catalog: &RemoteCatalog,
    favorites: &FavoritesService,
) -> anyhow::Result<()> {
    match command {
        FavCommand::List => {
            let saved = favorites.favorites();
            if saved.is_empty() {
                println!("No favorites yet.");
            }
            for tool in &saved {
                print_row(tool, favorites);
            }
        }
        FavCommand::Add { id } => {
            let tool = match catalog.get_art_tool(&id).await {
                Ok(tool) => tool,
                Err(e) => {
                    tracing::error!("Failed to fetch art tool {}: {}", id, e);
                    println!("Could not load art tool {}; nothing was saved.", id);
                    return Ok(());
                }
            };

            if favorites.add_favorite(tool).await? {
                println!("Added {} to favorites.", id);
            } else {
                println!("{} is already a favorite.", id);
            }
        }
        FavCommand::Remove { id } => {
            if favorites.remove_favorite(&id).await? {
                println!("Removed {} from favorites.", id);
            } else {
                println!("{} was not a favorite.", id);
            }
        }
        FavCommand::Clear => {
            favorites.clear_all_favorites().await?;
            println!("Favorites cleared.");
        }
        FavCommand::Reset => {
            favorites.reset_favorites().await?;
            println!("Favorites storage reset.");
        }
    }

    Ok(())
}

/// Fetch the catalog, degrading to an empty display on failure.
async fn fetch_catalog(catalog: &RemoteCatalog) -> Option<Vec<ArtTool>> {
    match catalog.list_art_tools().await {
        Ok(items) => Some(items),
        Err(e) => {
            tracing::error!("Failed to fetch the catalog: {}", e);
            println!("Could not reach the catalog; nothing to show.");
            None
        }
    }
}

fn print_row(tool: &ArtTool, favorites: &FavoritesService) {
    let heart = if favorites.is_favorite(&tool.id) { "*" } else { " " };
    let deal = tool
        .limited_time_deal
        .map(|rate| format!("  -{:.0}%", rate * 100.0))
        .unwrap_or_default();
    println!(
        "{} {:>4}  {:<28} {:<14} ${:.2}{}",
        heart, tool.id, tool.art_name, tool.brand, tool.price, deal
    );
}

fn print_detail(tool: &ArtTool, favorites: &FavoritesService) {
    println!("{} ({})", tool.art_name, tool.brand);
    println!("Price: ${:.2}", tool.price);
    if let Some(rate) = tool.limited_time_deal {
        println!("Limited time deal: -{:.0}%", rate * 100.0);
    }
    if tool.glass_surface {
        println!("Suitable for glass surfaces");
    }
    println!(
        "Favorite: {}",
        if favorites.is_favorite(&tool.id) { "yes" } else { "no" }
    );
    if !tool.description.is_empty() {
        println!("\n{}", tool.description);
    }
    if let Some(avg) = tool.average_rating() {
        println!(
            "\nRating: {:.1}/5 from {} feedback(s)",
            avg,
            tool.feedbacks.len()
        );
        for feedback in &tool.feedbacks {
            println!(
                "  [{}/5] {} - {} ({})",
                feedback.rating, feedback.comment, feedback.author, feedback.date
            );
        }
    }
}
