//! End-to-end tests for the `/api/v1/pokemon` endpoints. The upstream
//! hands out absolute URLs for detail and species records, so the stub
//! bodies point those back at the mockito server.

mod common;

use axum::http::StatusCode;
use mockito::Matcher;
use sqlx::PgPool;

fn pokemon_json(server_url: &str, id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
        "abilities": [{"ability": {"name": "static", "url": ""}, "is_hidden": false}],
        "stats": [{"stat": {"name": "speed", "url": ""}, "base_stat": 90, "effort": 2}],
        "moves": [{"move": {"name": "thunder-shock", "url": ""}}],
        "sprites": {
            "front_default": "http://s.example/front.png",
            "other": {
                "official-artwork": {"front_default": "http://s.example/art.png"},
            },
        },
        "species": {"name": name, "url": format!("{server_url}/pokemon-species/{id}")},
    })
}

fn species_json(gender_rate: i64) -> serde_json::Value {
    serde_json::json!({
        "name": "pikachu",
        "is_legendary": false,
        "is_mythical": false,
        "habitat": {"name": "forest", "url": ""},
        "gender_rate": gender_rate,
        "flavor_text_entries": [
            {"flavor_text": "Stores\nelectricity in\u{c}its cheeks.", "language": {"name": "en"}},
        ],
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_composes_record_and_species(pool: PgPool) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_body(pokemon_json(&server.url(), 25, "pikachu").to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/pokemon-species/25")
        .with_status(200)
        .with_body(species_json(4).to_string())
        .create_async()
        .await;

    let app = common::build_test_app(pool, &server.url());
    let response = common::get(app, "/api/v1/pokemon/pikachu").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["id"], 25);
    assert_eq!(body["height"], 0.4);
    assert_eq!(body["weight"], 6.0);
    assert_eq!(body["types"][0], "electric");
    assert_eq!(body["images"]["official_artwork"], "http://s.example/art.png");
    assert_eq!(body["species"]["habitat"], "forest");
    assert_eq!(body["species"]["flavor_text"], "Stores electricity in its cheeks.");
    assert_eq!(body["species"]["gender_rate"]["female_percent"], 50.0);
    assert_eq!(body["species"]["gender_rate"]["genderless"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn genderless_species_has_null_percentages(pool: PgPool) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/pokemon/magnemite")
        .with_status(200)
        .with_body(pokemon_json(&server.url(), 81, "magnemite").to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/pokemon-species/81")
        .with_status(200)
        .with_body(species_json(-1).to_string())
        .create_async()
        .await;

    let app = common::build_test_app(pool, &server.url());
    let response = common::get(app, "/api/v1/pokemon/magnemite").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["species"]["gender_rate"]["genderless"], true);
    assert!(body["species"]["gender_rate"]["female_percent"].is_null());
    assert!(body["species"]["gender_rate"]["male_percent"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_skips_entries_whose_detail_fetch_fails(pool: PgPool) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/pokemon")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            serde_json::json!({
                "count": 1302,
                "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
                "previous": null,
                "results": [
                    {"name": "pikachu", "url": format!("{}/pokemon/25", server.url())},
                    {"name": "missingno", "url": format!("{}/pokemon/0", server.url())},
                ],
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/pokemon/25")
        .with_status(200)
        .with_body(pokemon_json(&server.url(), 25, "pikachu").to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/pokemon/0")
        .with_status(500)
        .with_body("oops")
        .create_async()
        .await;

    let app = common::build_test_app(pool, &server.url());
    let response = common::get(app, "/api/v1/pokemon?limit=20").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 1302);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "pikachu");
    assert_eq!(results[0]["image"], "http://s.example/art.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_pokemon_maps_to_404(pool: PgPool) {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/pokemon/missingno")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let app = common::build_test_app(pool, &server.url());
    let response = common::get(app, "/api/v1/pokemon/missingno").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}
