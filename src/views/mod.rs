//! View Components
//!
//! UI components for the reception desk.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │  Header (title + subtitle)                          │
//! │ Side   ├────────────────────────────────────────────────────┤
//! │ bar    │                                                     │
//! │ (88px) │     Emergency | Appointments | Beds                 │
//! │        │                                                     │
//! ├────────┴────────────────────────────────────────────────────┤
//! │                       StatusBar                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod appointments_view;
mod beds_view;
mod content;
mod emergency_view;
mod sidebar;
mod status_badge;
mod status_bar;
mod title_bar;

pub use appointments_view::*;
pub use beds_view::*;
pub use content::*;
pub use emergency_view::*;
pub use sidebar::*;
pub use status_badge::*;
pub use status_bar::*;
pub use title_bar::*;
