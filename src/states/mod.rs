//! State Management Layer
//!
//! Application state using GPUI's Entity system, split into UI preferences
//! ([`ReceptionAppState`]) and desk data ([`DeskState`]) so that switching tabs
//! can never touch desk data:
//!
//! ```text
//! UI Action → State Method → Domain Transform → notify → UI Refresh
//! ```

mod activity;
mod app;
mod desk;
mod i18n;
mod ui_event;

pub use activity::*;
pub use app::*;
pub use desk::*;
pub use i18n::*;
pub use ui_event::*;
