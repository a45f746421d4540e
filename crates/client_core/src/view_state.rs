use std::time::Duration;

use shared::domain::{MovieCollection, MovieItem};
use tracing::{debug, warn};

use crate::{
    error::ControllerError,
    fetch_controller::{FetchController, FetchResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(usize),
}

/// Display-ready view over a [`FetchController`] plus the detail overlay.
///
/// Opening a different item while one is open is expected to go through
/// [`close_overlay`](Self::close_overlay) first. `open_overlay` does not guard
/// against it.
pub struct ListViewState {
    controller: FetchController,
    overlay: OverlayState,
}

impl ListViewState {
    pub fn new(controller: FetchController) -> Self {
        Self {
            controller,
            overlay: OverlayState::Closed,
        }
    }

    pub fn start(&mut self) -> Result<(), ControllerError> {
        self.controller.start()
    }

    pub fn poll(&mut self) -> bool {
        let changed = self.controller.poll();
        if changed {
            self.reconcile_overlay();
        }
        changed
    }

    pub fn wait(&mut self, timeout: Duration) -> bool {
        let changed = self.controller.wait(timeout);
        if changed {
            self.reconcile_overlay();
        }
        changed
    }

    pub fn on_result_changed(&mut self, listener: impl FnOnce(&FetchResult) + 'static) {
        self.controller.on_result_changed(listener);
    }

    pub fn current_result(&self) -> &FetchResult {
        self.controller.current_result()
    }

    pub fn item_count(&self) -> usize {
        self.movies().map_or(0, MovieCollection::len)
    }

    pub fn item_at(&self, index: usize) -> Result<&MovieItem, ControllerError> {
        self.movies()
            .and_then(|movies| movies.get(index))
            .ok_or(ControllerError::IndexOutOfRange {
                index,
                len: self.item_count(),
            })
    }

    /// Leaves the overlay untouched when `index` is out of range.
    pub fn open_overlay(&mut self, index: usize) -> Result<(), ControllerError> {
        self.item_at(index)?;
        self.overlay = OverlayState::Open(index);
        debug!(index, "overlay opened");
        Ok(())
    }

    pub fn close_overlay(&mut self) {
        if self.overlay != OverlayState::Closed {
            debug!("overlay closed");
        }
        self.overlay = OverlayState::Closed;
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay
    }

    pub fn overlay_item(&self) -> Option<&MovieItem> {
        match self.overlay {
            OverlayState::Open(index) => self.item_at(index).ok(),
            OverlayState::Closed => None,
        }
    }

    /// Short user-facing summary of the fetch.
    pub fn status_line(&self) -> String {
        match self.current_result() {
            FetchResult::Pending if self.controller.has_started() => "Loading movies...".into(),
            FetchResult::Pending => "Not loaded".into(),
            FetchResult::Success(movies) => match movies.len() {
                0 => "No movies found".into(),
                1 => "1 movie".into(),
                n => format!("{n} movies"),
            },
            FetchResult::Failure(err) => {
                format!("Could not load movies ({}): {}", err.kind(), err.message())
            }
        }
    }

    fn movies(&self) -> Option<&MovieCollection> {
        self.controller.current_result().movies()
    }

    fn reconcile_overlay(&mut self) {
        if let OverlayState::Open(index) = self.overlay {
            let len = self.item_count();
            if index >= len {
                warn!(index, len, "closing overlay for item no longer in the list");
                self.overlay = OverlayState::Closed;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
