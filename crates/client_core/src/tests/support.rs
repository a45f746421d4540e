use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use shared::{
    domain::{MovieCollection, MovieId, MovieItem},
    error::FetchError,
};
use tokio::{runtime::Runtime, sync::Notify};

use crate::{catalog::MovieSource, fetch_controller::FetchController};

pub(crate) fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("runtime")
}

pub(crate) fn movies(titles: &[&str]) -> MovieCollection {
    titles
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            MovieItem::new(MovieId(idx as i64 + 1), *title)
                .with_poster_path(format!("/{}.jpg", title.to_lowercase()))
        })
        .collect()
}

pub(crate) fn controller_for(
    source: impl MovieSource + 'static,
    runtime: &Runtime,
) -> FetchController {
    FetchController::new(Arc::new(source), runtime.handle().clone())
}

pub(crate) struct StubSource {
    outcome: Result<MovieCollection, FetchError>,
    gate: Option<Arc<Notify>>,
    loads: Arc<AtomicUsize>,
}

impl StubSource {
    pub(crate) fn ok(movies: MovieCollection) -> Self {
        Self {
            outcome: Ok(movies),
            gate: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing(err: FetchError) -> Self {
        Self {
            outcome: Err(err),
            gate: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Holds the load until `gate` is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn load_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.loads)
    }
}

#[async_trait]
impl MovieSource for StubSource {
    async fn load(&self) -> Result<MovieCollection, FetchError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcome.clone()
    }
}

pub(crate) struct PanickingSource;

#[async_trait]
impl MovieSource for PanickingSource {
    async fn load(&self) -> Result<MovieCollection, FetchError> {
        panic!("movie source crashed");
    }
}
