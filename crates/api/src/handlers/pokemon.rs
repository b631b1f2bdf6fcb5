//! Handlers for `/pokemon`. Read-through only: nothing is persisted;
//! upstream records are reshaped (unit conversions, gender split,
//! flavor text) and relayed.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use multiverse_core::pagination::{clamp_limit, clamp_offset};
use multiverse_remote::pokeapi::types::{
    decimetres_to_metres, hectograms_to_kilograms, GenderSplit, PokemonRecord, SpeciesRecord,
};

use crate::error::AppResult;
use crate::state::AppState;

/// Moves are capped to keep the detail payload bounded.
const MOVE_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// List page relaying the upstream count and page cursors.
#[derive(Debug, Serialize)]
pub struct PokemonPage {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<PokemonSummary>,
}

#[derive(Debug, Serialize)]
pub struct PokemonSummary {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    /// Metres (upstream delivers decimetres).
    pub height: f64,
    /// Kilograms (upstream delivers hectograms).
    pub weight: f64,
    pub base_experience: Option<i64>,
    pub types: Vec<String>,
    pub abilities: Vec<AbilityPayload>,
    pub stats: Vec<StatPayload>,
    pub moves: Vec<String>,
    pub images: ImageSet,
    pub species: SpeciesPayload,
}

#[derive(Debug, Serialize)]
pub struct AbilityPayload {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Serialize)]
pub struct StatPayload {
    pub name: String,
    pub base_stat: i64,
    pub effort: i64,
}

#[derive(Debug, Serialize)]
pub struct ImageSet {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
    pub dream_world: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeciesPayload {
    pub name: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub habitat: Option<String>,
    pub flavor_text: String,
    pub gender_rate: GenderSplit,
}

/// GET /api/v1/pokemon
///
/// Fetches the upstream page, then one detail record per entry
/// (sequentially, as the upstream list carries only name/URL pairs). An
/// entry whose detail fetch fails is logged and skipped rather than
/// failing the page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PokemonPage>> {
    let limit = clamp_limit(params.limit);
    let offset = clamp_offset(params.offset);

    let page = state.pokeapi.list(limit, offset).await?;

    let mut results = Vec::with_capacity(page.results.len());
    for entry in &page.results {
        match state.pokeapi.get_pokemon_by_url(&entry.url).await {
            Ok(record) => results.push(summarize(&record)),
            Err(err) => {
                tracing::warn!(pokemon = %entry.name, error = %err, "Skipping pokemon detail");
            }
        }
    }

    Ok(Json(PokemonPage {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    }))
}

/// GET /api/v1/pokemon/{id_or_name}
///
/// Composes the pokémon record with its species record into one payload.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id_or_name): Path<String>,
) -> AppResult<Json<PokemonDetail>> {
    let record = state.pokeapi.get_pokemon(&id_or_name).await?;
    let species = state.pokeapi.get_species(&record.species.url).await?;
    Ok(Json(compose_detail(record, species)))
}

fn summarize(record: &PokemonRecord) -> PokemonSummary {
    PokemonSummary {
        id: record.id,
        name: record.name.clone(),
        image: record.sprites.summary_image().map(str::to_string),
        types: record.types.iter().map(|t| t.kind.name.clone()).collect(),
    }
}

fn compose_detail(record: PokemonRecord, species: SpeciesRecord) -> PokemonDetail {
    PokemonDetail {
        id: record.id,
        name: record.name,
        height: decimetres_to_metres(record.height),
        weight: hectograms_to_kilograms(record.weight),
        base_experience: record.base_experience,
        types: record.types.into_iter().map(|t| t.kind.name).collect(),
        abilities: record
            .abilities
            .into_iter()
            .map(|a| AbilityPayload {
                name: a.ability.name,
                is_hidden: a.is_hidden,
            })
            .collect(),
        stats: record
            .stats
            .into_iter()
            .map(|s| StatPayload {
                name: s.stat.name,
                base_stat: s.base_stat,
                effort: s.effort,
            })
            .collect(),
        moves: record
            .moves
            .into_iter()
            .take(MOVE_LIMIT)
            .map(|m| m.move_info.name)
            .collect(),
        images: ImageSet {
            official_artwork: record.sprites.official_artwork().map(str::to_string),
            dream_world: record.sprites.dream_world().map(str::to_string),
            front_default: record.sprites.front_default,
            front_shiny: record.sprites.front_shiny,
            back_default: record.sprites.back_default,
            back_shiny: record.sprites.back_shiny,
        },
        species: SpeciesPayload {
            name: species.name.clone(),
            is_legendary: species.is_legendary,
            is_mythical: species.is_mythical,
            habitat: species.habitat_name().map(str::to_string),
            flavor_text: species.english_flavor_text(),
            gender_rate: species.gender_split(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> PokemonRecord {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}],
            "abilities": [
                {"ability": {"name": "static", "url": ""}, "is_hidden": false},
                {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true},
            ],
            "stats": [{"stat": {"name": "speed", "url": ""}, "base_stat": 90, "effort": 2}],
            "moves": (0..15).map(|i| serde_json::json!({
                "move": {"name": format!("move-{i}"), "url": ""}
            })).collect::<Vec<_>>(),
            "sprites": {"front_default": "http://s.example/25.png"},
            "species": {"name": "pikachu", "url": "http://api.example/pokemon-species/25/"},
        }))
        .unwrap()
    }

    fn pikachu_species() -> SpeciesRecord {
        serde_json::from_value(serde_json::json!({
            "name": "pikachu",
            "is_legendary": false,
            "is_mythical": false,
            "habitat": {"name": "forest", "url": ""},
            "gender_rate": 4,
            "flavor_text_entries": [
                {"flavor_text": "It keeps its tail raised.", "language": {"name": "en"}},
            ],
        }))
        .unwrap()
    }

    #[test]
    fn detail_converts_units() {
        let detail = compose_detail(pikachu(), pikachu_species());
        assert_eq!(detail.height, 0.4);
        assert_eq!(detail.weight, 6.0);
    }

    #[test]
    fn detail_truncates_moves() {
        let detail = compose_detail(pikachu(), pikachu_species());
        assert_eq!(detail.moves.len(), 10);
        assert_eq!(detail.moves[0], "move-0");
    }

    #[test]
    fn detail_embeds_species_and_gender() {
        let detail = compose_detail(pikachu(), pikachu_species());
        assert_eq!(detail.species.habitat.as_deref(), Some("forest"));
        assert_eq!(detail.species.flavor_text, "It keeps its tail raised.");
        assert_eq!(detail.species.gender_rate.female_percent, Some(50.0));
        assert!(!detail.species.gender_rate.genderless);
    }

    #[test]
    fn summary_uses_front_default_when_no_artwork() {
        let summary = summarize(&pikachu());
        assert_eq!(summary.image.as_deref(), Some("http://s.example/25.png"));
        assert_eq!(summary.types, vec!["electric"]);
    }
}
