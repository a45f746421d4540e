//! Movie list core: fetching the list in the background and the view state a
//! display layer renders from.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch_controller;
pub mod transport;
pub mod view_state;

pub use catalog::{decode_movies, MovieSource, TmdbCatalog};
pub use config::{load_settings, ClientSettings, SettingsError, DEFAULT_CONFIG_FILE};
pub use error::ControllerError;
pub use fetch_controller::{FetchController, FetchResult};
pub use transport::{HttpTransport, Transport};
pub use view_state::{ListViewState, OverlayState};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
