//! Application Layer
//!
//! App initialization, window management and the workspace shell.

pub mod application;
pub mod workspace;

pub use application::run_app;
