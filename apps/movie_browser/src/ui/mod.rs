//! Text display layer: renders the list view state for a terminal.

pub mod render;

pub use render::{render_screen, RenderOptions};
