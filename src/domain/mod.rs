//! Domain - Pure Desk Data and Transforms
//!
//! These types don't depend on GPUI. Every desk mutation is a total function
//! over the collections defined here, so the state layer only has to route
//! user actions and notify views.

pub mod appointment;
pub mod beds;
pub mod emergency;
pub mod seed;

pub use appointment::*;
pub use beds::*;
pub use emergency::*;

/// Visual tone of a status badge, mapped to theme colors by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Needs attention (pending, scheduled)
    Warning,
    /// Under way (dispatched, in progress)
    Info,
    /// Finished
    Success,
}
