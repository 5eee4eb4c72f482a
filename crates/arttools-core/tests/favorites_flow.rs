use std::sync::Arc;

use arttools_core::favorites::{FavoritesService, FavoritesStore};
use arttools_core::filter::{filter_art_tools, ALL_BRANDS};
use arttools_core::models::ArtTool;
use arttools_core::provider::FavoritesProvider;
use arttools_store::FileBackend;
use tempfile::TempDir;

fn sample_tool(id: &str, name: &str, brand: &str) -> ArtTool {
    ArtTool {
        id: id.to_string(),
        art_name: name.to_string(),
        description: format!("{} by {}", name, brand),
        price: 4.5,
        glass_surface: false,
        image: format!("https://example.com/{}.png", id),
        brand: brand.to_string(),
        limited_time_deal: Some(0.2),
        feedbacks: Vec::new(),
    }
}

#[tokio::test]
async fn browse_filter_and_favorite_flow() {
    let dir = TempDir::new().unwrap();
    let provider = FavoritesProvider::initialize(Arc::new(FileBackend::new(dir.path()))).await;
    let favorites = provider.handle();

    let catalog = vec![
        sample_tool("1", "Pencil", "Faber"),
        sample_tool("2", "Crayon", "Conte"),
    ];

    // Search narrows the catalog down to the crayon
    let hits = filter_art_tools(&catalog, "cray", ALL_BRANDS);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");

    // Heart the pencil from the "detail screen"
    assert!(favorites.add_favorite(catalog[0].clone()).await.unwrap());
    assert!(favorites.is_favorite("1"));
    assert!(!favorites.is_favorite("2"));

    // Unheart it again
    assert!(favorites.remove_favorite("1").await.unwrap());
    assert!(!favorites.is_favorite("1"));
}

#[tokio::test]
async fn favorites_survive_a_process_restart() {
    let dir = TempDir::new().unwrap();

    {
        let provider =
            FavoritesProvider::initialize(Arc::new(FileBackend::new(dir.path()))).await;
        provider
            .handle()
            .add_favorite(sample_tool("1", "Pencil", "Faber"))
            .await
            .unwrap();
    }

    // A fresh provider over the same directory sees the same set
    let provider = FavoritesProvider::initialize(Arc::new(FileBackend::new(dir.path()))).await;
    let favorites = provider.handle().favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].art_name, "Pencil");
    assert_eq!(favorites[0].limited_time_deal, Some(0.2));
}

#[tokio::test]
async fn reset_looks_never_initialized_on_disk() {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(FileBackend::new(dir.path()));
    let service = FavoritesService::new(FavoritesStore::new(backend));

    service
        .add_favorite(sample_tool("1", "Pencil", "Faber"))
        .await
        .unwrap();
    assert!(service.store().is_initialized().await.unwrap());

    service.clear_all_favorites().await.unwrap();
    assert!(service.store().is_initialized().await.unwrap());
    assert!(service.favorites().is_empty());

    service.reset_favorites().await.unwrap();
    assert!(!service.store().is_initialized().await.unwrap());
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
