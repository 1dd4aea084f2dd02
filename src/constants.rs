//! UI Constants
//!
//! Centralized layout and sizing constants for the dashboard.

use std::time::Duration;

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 88.0;

/// Status bar height
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Quiet period after the last resize or move before bounds are saved
pub const BOUNDS_SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Number of desk changes kept for the status bar
pub const ACTIVITY_LOG_CAPACITY: usize = 200;

/// Base URL for the external map opened by "Track Location"
pub const MAP_BASE_URL: &str = "https://www.google.com/maps";

/// Application identity used for platform directories
pub const APP_QUALIFIER: &str = "org";
pub const APP_ORGANIZATION: &str = "reception-desk";
pub const APP_NAME: &str = "reception-desk";

/// Preferences file name inside the config directory
pub const PREFERENCES_FILE: &str = "reception-desk.toml";

/// Rolling log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "reception-desk.log";
