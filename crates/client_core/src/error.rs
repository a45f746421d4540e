use thiserror::Error;

/// Contract violations by callers of the controller and view state.
///
/// These are returned as `Err` rather than panicking; fetch failures are not
/// reported here, they live in [`crate::FetchResult::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
