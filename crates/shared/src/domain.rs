use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(MovieId);

/// A single movie as shown in the grid and the detail overlay.
///
/// Fields are only set while building the record; afterwards it is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieItem {
    id: MovieId,
    title: String,
    poster_path: Option<String>,
    overview: String,
    release_date: Option<NaiveDate>,
    vote_average: f64,
}

impl MovieItem {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            overview: String::new(),
            release_date: None,
            vote_average: 0.0,
        }
    }

    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    pub fn vote_average(&self) -> f64 {
        self.vote_average
    }

    /// Absolute poster URL, e.g. `https://image.tmdb.org/t/p` + `w500` + `/abc.jpg`.
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        let path = self.poster_path.as_deref()?;
        let base = image_base.trim_end_matches('/');
        let size = size.trim_matches('/');
        let path = path.trim_start_matches('/');
        Some(format!("{base}/{size}/{path}"))
    }
}

/// Movies in server order. Display order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieCollection(Vec<MovieItem>);

impl MovieCollection {
    pub fn new(items: Vec<MovieItem>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieItem> {
        self.0.iter()
    }
}

impl FromIterator<MovieItem> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = MovieItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a MovieItem;
    type IntoIter = std::slice::Iter<'a, MovieItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
