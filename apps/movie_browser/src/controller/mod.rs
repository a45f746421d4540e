//! Controller layer: input parsing and actions applied to the list view state.

pub mod events;
pub mod orchestration;
