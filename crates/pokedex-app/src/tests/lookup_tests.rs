use std::sync::Arc;

use pokedex_core::error::CatalogError;

use super::{FakeCatalog, test_state};
use crate::lookup::{DisplayName, LookupError};

#[tokio::test]
async fn test_direct_hit_skips_resolver() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog.clone());

    let entry = state.lookup.find(" Pikachu ").await.unwrap();

    assert_eq!(entry.id, 25);
    assert_eq!(catalog.calls(), (1, 0, 0));
}

#[tokio::test]
async fn test_lookup_by_id() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    let entry = state.lookup.find("133").await.unwrap();
    assert_eq!(entry.name, "eevee");
}

#[tokio::test]
async fn test_french_name_falls_back_to_resolver() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, store) = test_state(catalog.clone());

    let entry = state.lookup.find("Évoli").await.unwrap();

    assert_eq!(entry.name, "eevee");
    // Direct miss, then refetch by resolved key
    assert_eq!(catalog.calls(), (2, 1, 5));
    assert!(store.get("poke_fr_name_map_v1").unwrap().contains("\"evoli\":\"eevee\""));

    // Second lookup is answered from the name cache
    let entry = state.lookup.find("evoli").await.unwrap();
    assert_eq!(entry.id, 133);
    assert_eq!(catalog.calls(), (4, 1, 5));
}

#[tokio::test]
async fn test_unknown_name_is_not_found() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    let err = state.lookup.find("Zorglub").await.unwrap_err();

    assert!(matches!(&err, LookupError::NotFound { query } if query == "Zorglub"));
    assert_eq!(err.to_string(), "Pokémon non trouvé : Zorglub");
}

#[tokio::test]
async fn test_missing_query() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog.clone());

    let err = state.lookup.find("   ").await.unwrap_err();

    assert!(matches!(err, LookupError::MissingQuery));
    assert_eq!(err.to_string(), "Veuillez entrer un nom ou un ID.");
    assert_eq!(catalog.calls(), (0, 0, 0));
}

#[tokio::test]
async fn test_index_failure_surfaces_original_error() {
    let catalog = Arc::new(FakeCatalog {
        index_error: Some(CatalogError::Transport("timed out".into())),
        ..FakeCatalog::new()
    });
    let (state, store) = test_state(catalog.clone());

    let err = state.lookup.find("Évoli").await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound { .. }));
    assert!(store.get("poke_fr_name_map_v1").is_none());
}

#[tokio::test]
async fn test_transport_error_is_reported() {
    let catalog = Arc::new(FakeCatalog {
        entry_error: Some(CatalogError::Transport("connection refused".into())),
        ..FakeCatalog::new()
    });
    let (state, _) = test_state(catalog);

    let err = state.lookup.find("zorglub").await.unwrap_err();
    assert!(matches!(err, LookupError::Catalog(CatalogError::Transport(_))));
}

#[tokio::test]
async fn test_find_pair() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    let (a, b) = state.lookup.find_pair("pikachu", "Salamèche").await.unwrap();
    assert_eq!(a.name, "pikachu");
    assert_eq!(b.name, "charmander");
}

#[tokio::test]
async fn test_find_pair_requires_both() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog.clone());

    let err = state.lookup.find_pair("pikachu", " ").await.unwrap_err();

    assert!(matches!(err, LookupError::MissingPair));
    assert_eq!(err.to_string(), "Veuillez entrer deux noms ou IDs.");
    assert_eq!(catalog.calls(), (0, 0, 0));
}

#[tokio::test]
async fn test_find_pair_fails_when_either_fails() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    let err = state.lookup.find_pair("pikachu", "Zorglub").await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound { .. }));
}

#[tokio::test]
async fn test_display_name_prefers_french() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    let entry = state.lookup.find("charmander").await.unwrap();
    let name = state.lookup.display_name(&entry).await;

    assert_eq!(
        name,
        DisplayName {
            name: "Salamèche".into(),
            id: 4
        }
    );
    assert_eq!(name.to_string(), "Salamèche #4");
}

#[tokio::test]
async fn test_display_name_falls_back_to_entry_name() {
    let catalog = Arc::new(FakeCatalog::new());
    let (state, _) = test_state(catalog);

    // No French name on record
    let ditto = state.lookup.find("ditto").await.unwrap();
    assert_eq!(state.lookup.display_name(&ditto).await.to_string(), "ditto #132");

    // Species record unavailable
    let mut orphan = state.lookup.find("pikachu").await.unwrap();
    orphan.species.url = "https://pokeapi.co/api/v2/pokemon-species/99999/".into();
    assert_eq!(state.lookup.display_name(&orphan).await.to_string(), "pikachu #25");
}
