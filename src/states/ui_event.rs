//! UI Events
//!
//! Events emitted from the desk state to the view layer for side effects the
//! state itself must not perform.

use std::sync::Arc;

/// Desk events for the view layer
#[derive(Clone, Debug, PartialEq)]
pub enum UIEvent {
    /// Open the external map for a tracked request
    OpenMap {
        /// Request being tracked
        request_id: Arc<str>,
        /// Map URL centred on the request's coordinates
        url: Arc<str>,
    },
}
