//! Serde schemas for PokéAPI payloads, plus pure derivations (unit
//! conversions, gender split, flavor-text extraction).

use serde::{Deserialize, Serialize};

/// A `{name, url}` reference, ubiquitous across PokéAPI payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of `GET /pokemon?limit=&offset=`.
#[derive(Debug, Deserialize)]
pub struct PokemonListResponse {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Response of `GET /pokemon/{id_or_name}`.
#[derive(Debug, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    /// Decimetres as delivered; convert with [`decimetres_to_metres`].
    pub height: i64,
    /// Hectograms as delivered; convert with [`hectograms_to_kilograms`].
    pub weight: i64,
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    pub sprites: Sprites,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_info: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprite>,
    #[serde(default)]
    pub dream_world: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// The official artwork URL, when present.
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
    }

    /// The dream-world sprite URL, when present.
    pub fn dream_world(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|a| a.front_default.as_deref())
    }

    /// Preferred list image: official artwork, falling back to the
    /// default front sprite.
    pub fn summary_image(&self) -> Option<&str> {
        self.official_artwork().or(self.front_default.as_deref())
    }
}

/// Response of `GET /pokemon-species/{id}`.
#[derive(Debug, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    /// Female eighths out of 8; `-1` means genderless.
    #[serde(default = "genderless_rate")]
    pub gender_rate: i64,
}

fn genderless_rate() -> i64 {
    -1
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    #[serde(default)]
    pub flavor_text: String,
    pub language: NamedResource,
}

impl SpeciesRecord {
    /// First English flavor text with control characters flattened to
    /// spaces, or empty when none exists.
    pub fn english_flavor_text(&self) -> String {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.name == "en")
            .map(|e| e.flavor_text.replace(['\n', '\u{c}'], " "))
            .unwrap_or_default()
    }

    /// Habitat name, when the species has one.
    pub fn habitat_name(&self) -> Option<&str> {
        self.habitat.as_ref().map(|h| h.name.as_str())
    }

    pub fn gender_split(&self) -> GenderSplit {
        gender_split(self.gender_rate)
    }
}

/// Female/male percentages derived from the raw gender rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderSplit {
    pub female_percent: Option<f64>,
    pub male_percent: Option<f64>,
    pub genderless: bool,
}

/// Convert the raw rate (female eighths out of 8, `-1` = genderless)
/// into percentages. Genderless species have both percentages null.
pub fn gender_split(gender_rate: i64) -> GenderSplit {
    if gender_rate < 0 {
        return GenderSplit {
            female_percent: None,
            male_percent: None,
            genderless: true,
        };
    }
    let female = gender_rate as f64 / 8.0 * 100.0;
    GenderSplit {
        female_percent: Some(female),
        male_percent: Some(100.0 - female),
        genderless: false,
    }
}

/// PokéAPI heights are in decimetres.
pub fn decimetres_to_metres(height: i64) -> f64 {
    height as f64 / 10.0
}

/// PokéAPI weights are in hectograms.
pub fn hectograms_to_kilograms(weight: i64) -> f64 {
    weight as f64 / 10.0
}
