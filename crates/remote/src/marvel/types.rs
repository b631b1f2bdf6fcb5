//! Serde schemas for Marvel API payloads, plus the pure extraction
//! helpers the sync layer maps through.
//!
//! Optional upstream fields are modeled as `Option` or defaulted so that
//! absence is type-checked rather than exception-caught; a record with a
//! missing thumbnail or empty URL list still maps cleanly.

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level wrapper every Marvel endpoint returns: `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: DataContainer<T>,
}

/// The paged `data` object: total hit count plus the page of results.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataContainer<T> {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub results: Vec<T>,
}

/// A character record as returned by `/characters`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub comics: ResourceCount,
    #[serde(default)]
    pub series: ResourceCount,
    #[serde(default)]
    pub stories: ResourceCount,
    #[serde(default)]
    pub events: ResourceCount,
    #[serde(default)]
    pub urls: Vec<UrlEntry>,
}

/// A comic record as returned by `/comics`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComicRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default, rename = "pageCount")]
    pub page_count: i32,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
    #[serde(default)]
    pub series: Option<SeriesSummary>,
    #[serde(default)]
    pub dates: Vec<DateEntry>,
    #[serde(default)]
    pub urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceCount {
    #[serde(default)]
    pub available: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlEntry {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceEntry {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateEntry {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesSummary {
    #[serde(default)]
    pub name: String,
}

/// `"{path}.{extension}"`, or empty when the thumbnail object is absent.
fn thumbnail_url(thumbnail: Option<&Thumbnail>) -> String {
    match thumbnail {
        Some(t) => format!("{}.{}", t.path, t.extension),
        None => String::new(),
    }
}

/// First entry of the URL list, or empty when the list is empty.
fn first_url(urls: &[UrlEntry]) -> String {
    urls.first().map(|u| u.url.clone()).unwrap_or_default()
}

impl CharacterRecord {
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(self.thumbnail.as_ref())
    }

    pub fn detail_url(&self) -> String {
        first_url(&self.urls)
    }
}

impl ComicRecord {
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(self.thumbnail.as_ref())
    }

    pub fn detail_url(&self) -> String {
        first_url(&self.urls)
    }

    /// Publication date from the first `onsaleDate` entry in list order.
    ///
    /// Only the date portion (before any `T`) is parsed, with a fixed
    /// `%Y-%m-%d` pattern. A value that fails to parse yields `None`
    /// rather than an error, and later entries are not consulted.
    pub fn onsale_date(&self) -> Option<NaiveDate> {
        let entry = self.dates.iter().find(|d| d.kind == "onsaleDate")?;
        let day = entry.date.split('T').next().unwrap_or("");
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Price from the first `printPrice` entry, defaulting to 0.00.
    pub fn print_price(&self) -> f64 {
        self.prices
            .iter()
            .find(|p| p.kind == "printPrice")
            .map(|p| p.price)
            .unwrap_or(0.0)
    }

    /// Series name, or empty when the series sub-object is absent.
    pub fn series_name(&self) -> String {
        self.series
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comic_json(dates: serde_json::Value) -> ComicRecord {
        serde_json::from_value(serde_json::json!({
            "id": 428,
            "title": "Amazing Fantasy #15",
            "dates": dates,
        }))
        .unwrap()
    }

    #[test]
    fn thumbnail_concatenates_path_and_extension() {
        let record: CharacterRecord = serde_json::from_value(serde_json::json!({
            "id": 1009610,
            "name": "Spider-Man",
            "thumbnail": {"path": "http://i.example/spidey", "extension": "jpg"},
        }))
        .unwrap();
        assert_eq!(record.thumbnail_url(), "http://i.example/spidey.jpg");
    }

    #[test]
    fn missing_thumbnail_maps_to_empty_string() {
        let record: CharacterRecord = serde_json::from_value(serde_json::json!({
            "id": 1009610,
            "name": "Spider-Man",
        }))
        .unwrap();
        assert_eq!(record.thumbnail_url(), "");
    }

    #[test]
    fn detail_url_takes_first_entry_or_empty() {
        let record: CharacterRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "X",
            "urls": [{"type": "detail", "url": "http://a"}, {"type": "wiki", "url": "http://b"}],
        }))
        .unwrap();
        assert_eq!(record.detail_url(), "http://a");

        let empty: CharacterRecord =
            serde_json::from_value(serde_json::json!({"id": 1, "name": "X"})).unwrap();
        assert_eq!(empty.detail_url(), "");
    }

    #[test]
    fn onsale_date_parses_date_portion_only() {
        let comic = comic_json(serde_json::json!([
            {"type": "focDate", "date": "1962-07-01T00:00:00-0400"},
            {"type": "onsaleDate", "date": "1962-08-01T00:00:00-0400"},
        ]));
        assert_eq!(comic.onsale_date(), NaiveDate::from_ymd_opt(1962, 8, 1));
    }

    #[test]
    fn malformed_onsale_date_yields_none_without_error() {
        let comic = comic_json(serde_json::json!([
            {"type": "onsaleDate", "date": "-0001-11-30T00:00:00-0500"},
        ]));
        assert_eq!(comic.onsale_date(), None);
    }

    #[test]
    fn first_onsale_entry_wins_in_list_order() {
        let comic = comic_json(serde_json::json!([
            {"type": "onsaleDate", "date": "not-a-date"},
            {"type": "onsaleDate", "date": "1999-01-01T00:00:00-0500"},
        ]));
        // The scan takes the first onsaleDate entry; its parse failure
        // leaves the date unset rather than falling through.
        assert_eq!(comic.onsale_date(), None);
    }

    #[test]
    fn print_price_defaults_to_zero() {
        let comic = comic_json(serde_json::json!([]));
        assert_eq!(comic.print_price(), 0.0);

        let priced: ComicRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "prices": [
                {"type": "digitalPurchasePrice", "price": 1.99},
                {"type": "printPrice", "price": 3.99},
            ],
        }))
        .unwrap();
        assert_eq!(priced.print_price(), 3.99);
    }

    #[test]
    fn series_name_defaults_to_empty() {
        let comic = comic_json(serde_json::json!([]));
        assert_eq!(comic.series_name(), "");
    }
}
