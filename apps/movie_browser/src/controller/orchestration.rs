//! Applies user actions to the view state and forwards navigation requests.

use client_core::ListViewState;
use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::{BrowserAction, NavigationRequest};

pub fn apply_action(
    state: &mut ListViewState,
    action: BrowserAction,
    nav_tx: &Sender<NavigationRequest>,
    notice: &mut String,
) {
    match action {
        BrowserAction::Select(index) => {
            if let Err(err) = state.item_at(index) {
                *notice = format!("Cannot open movie {}: {err}", index + 1);
                return;
            }
            // The overlay is always closed before a different item is opened.
            state.close_overlay();
            if let Err(err) = state.open_overlay(index) {
                *notice = format!("Cannot open movie {}: {err}", index + 1);
            }
        }
        BrowserAction::Dismiss => state.close_overlay(),
        BrowserAction::OpenSearch => forward_navigation(nav_tx, NavigationRequest::Search, notice),
        BrowserAction::OpenProfile => {
            forward_navigation(nav_tx, NavigationRequest::Profile, notice)
        }
    }
}

fn forward_navigation(
    nav_tx: &Sender<NavigationRequest>,
    request: NavigationRequest,
    notice: &mut String,
) {
    match nav_tx.try_send(request) {
        Ok(()) => tracing::debug!(request = request.label(), "queued navigation request"),
        Err(TrySendError::Full(_)) => {
            *notice = "Navigation queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *notice = format!("{} is not reachable from this screen", request.label());
        }
    }
}
