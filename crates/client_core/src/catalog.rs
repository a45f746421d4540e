use async_trait::async_trait;
use shared::{domain::MovieCollection, error::FetchError, protocol::MoviesPage};
use url::Url;

use crate::{
    config::{ClientSettings, SettingsError},
    transport::{HttpTransport, Transport},
};

/// Anything that can produce the movie list once. This is what a
/// [`crate::FetchController`] runs in the background.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn load(&self) -> Result<MovieCollection, FetchError>;
}

pub fn decode_movies(bytes: &[u8]) -> Result<MovieCollection, FetchError> {
    let page: MoviesPage = serde_json::from_slice(bytes)?;
    Ok(page.into_collection())
}

pub struct TmdbCatalog<T: Transport = HttpTransport> {
    transport: T,
    endpoint: Url,
}

impl TmdbCatalog<HttpTransport> {
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(HttpTransport::new(), settings.list_endpoint()?))
    }
}

impl<T: Transport> TmdbCatalog<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }
}

#[async_trait]
impl<T: Transport> MovieSource for TmdbCatalog<T> {
    async fn load(&self) -> Result<MovieCollection, FetchError> {
        tracing::debug!(path = self.endpoint.path(), "requesting movie list");
        let bytes = self.transport.fetch(&self.endpoint).await?;
        let movies = decode_movies(&bytes)?;
        tracing::debug!(count = movies.len(), "decoded movie list");
        Ok(movies)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
