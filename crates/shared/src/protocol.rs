//! TMDb list wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{MovieCollection, MovieId, MovieItem};

/// One page of a TMDb movie list (`/movie/popular`, `/movie/top_rated`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieRecord>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl MoviesPage {
    pub fn into_collection(self) -> MovieCollection {
        self.results.into_iter().map(MovieItem::from).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
}

impl From<MovieRecord> for MovieItem {
    fn from(record: MovieRecord) -> Self {
        let mut item = MovieItem::new(MovieId(record.id), record.title)
            .with_overview(record.overview)
            .with_vote_average(record.vote_average);
        if let Some(poster_path) = record.poster_path {
            item = item.with_poster_path(poster_path);
        }
        if let Some(release_date) = record.release_date {
            item = item.with_release_date(release_date);
        }
        item
    }
}

/// Error body TMDb returns alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub status_code: i64,
    pub status_message: String,
}

// TMDb sends `""` for unknown release dates.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
