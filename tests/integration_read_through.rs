//! Read-through cache behaviour over the real SQLite store.

mod common;

use std::sync::Arc;

use common::fixtures::pokemon;
use common::remote::ScriptedApi;
use pokedex_core::{CoreError, ListOrder, PokeApiError, Pokemon, PokemonService};
use pokedex_db::TestDb;

async fn service_with(api: ScriptedApi) -> (PokemonService, Arc<ScriptedApi>, TestDb) {
    let db = TestDb::new().await.unwrap();
    let api = Arc::new(api);
    let service = db.service(api.clone());
    (service, api, db)
}

#[tokio::test]
async fn test_second_get_is_served_locally() {
    let (service, api, _db) =
        service_with(ScriptedApi::default().with_pokemon(pokemon(25, "pikachu", &["electric"])))
            .await;

    let first = service.get("pikachu").await.unwrap();
    let second = service.get("pikachu").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.pokemon_calls(), 1);
}

#[tokio::test]
async fn test_empty_store_caches_bulbasaur() {
    let (service, api, _db) =
        service_with(ScriptedApi::default().with_pokemon(pokemon(1, "bulbasaur", &["grass", "poison"])))
            .await;

    let record = service.get("bulbasaur").await.unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(service.local_count().await.unwrap(), 1);
    assert_eq!(api.pokemon_calls(), 1);

    service.get("bulbasaur").await.unwrap();
    assert_eq!(api.pokemon_calls(), 1);
}

#[tokio::test]
async fn test_name_case_resolves_to_one_row() {
    let (service, api, _db) =
        service_with(ScriptedApi::default().with_pokemon(pokemon(25, "pikachu", &["electric"])))
            .await;

    let upper = service.get("PIKACHU").await.unwrap();
    let lower = service.get("pikachu").await.unwrap();
    let padded = service.get("  Pikachu ").await.unwrap();

    assert_eq!(upper.id, 25);
    assert_eq!(upper, lower);
    assert_eq!(lower, padded);
    assert_eq!(api.pokemon_requests(), vec!["pikachu"]);
    assert_eq!(service.local_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_fetch_many_skips_failures_in_order() {
    let api = ScriptedApi::default()
        .with_pokemon(pokemon(4, "charmander", &["fire"]))
        .with_pokemon(pokemon(1, "bulbasaur", &["grass"]));
    let (service, api, _db) = service_with(api).await;

    let saved = service
        .fetch_many(&["charmander", "bad-name", "bulbasaur"])
        .await;

    let names: Vec<_> = saved.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "bulbasaur"]);
    assert_eq!(api.pokemon_calls(), 3);
    assert_eq!(service.cached_ids().await.unwrap(), vec![1, 4]);
}

#[tokio::test]
async fn test_fetch_many_refreshes_cached_rows() {
    let (service, api, _db) =
        service_with(ScriptedApi::default().with_pokemon(pokemon(7, "squirtle", &["water"])))
            .await;

    service.get("squirtle").await.unwrap();
    service.fetch_many(&["squirtle"]).await;

    assert_eq!(api.pokemon_calls(), 2);
    assert_eq!(service.local_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_name_is_fetch_error_and_not_cached() {
    let (service, _api, _db) = service_with(ScriptedApi::default()).await;

    let err = service.get("missingno").await.unwrap_err();

    assert!(matches!(err, CoreError::Fetch { ref name, .. } if name == "missingno"));
    assert!(err.remote_cause().is_some());
    assert_eq!(service.local_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_blank_name_never_reaches_remote() {
    let (service, api, _db) = service_with(ScriptedApi::default()).await;

    let err = service.get("   ").await.unwrap_err();

    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(api.pokemon_calls(), 0);
}

#[tokio::test]
async fn test_list_orders() {
    let api = ScriptedApi::default()
        .with_pokemon(pokemon(7, "squirtle", &["water"]))
        .with_pokemon(pokemon(1, "bulbasaur", &["grass"]))
        .with_pokemon(pokemon(4, "charmander", &["fire"]));
    let (service, _api, _db) = service_with(api).await;
    service
        .fetch_many(&["squirtle", "bulbasaur", "charmander"])
        .await;

    let by_id: Vec<_> = service
        .list_local(ListOrder::ById)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(by_id, vec![1, 4, 7]);

    let by_name: Vec<_> = service
        .list_local(ListOrder::ByName)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(by_name, vec!["bulbasaur", "charmander", "squirtle"]);
}

#[tokio::test]
async fn test_record_without_identity_leaves_store_empty() {
    let (service, api, _db) = service_with(
        ScriptedApi::default()
            .with_pokemon_at("missingno", Pokemon::default())
            .with_pokemon_at("glitch", Pokemon { id: 151, ..Pokemon::default() }),
    )
    .await;

    for name in ["missingno", "glitch"] {
        let err = service.get(name).await.unwrap_err();
        assert!(matches!(
            err.remote_cause(),
            Some(PokeApiError::InvalidResponse { .. })
        ));
    }
    assert!(service.get("missingno").await.is_err());

    assert_eq!(service.local_count().await.unwrap(), 0);
    assert!(service.list_local(ListOrder::ById).await.unwrap().is_empty());
    assert_eq!(api.pokemon_calls(), 3);
}

#[test]
fn test_payload_without_id_or_name_does_not_decode() {
    for body in ["{}", r#"{"detail":"Not found."}"#, "[]"] {
        assert!(serde_json::from_str::<Pokemon>(body).is_err(), "decoded {body}");
    }
}
