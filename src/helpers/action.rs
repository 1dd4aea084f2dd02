//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use crate::states::Tab;
use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Tab navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go to emergency requests
    Emergency,
    /// Go to appointments
    Appointments,
    /// Go to bed status
    Beds,
}

impl NavAction {
    pub fn tab(self) -> Tab {
        match self {
            NavAction::Emergency => Tab::Emergency,
            NavAction::Appointments => Tab::Appointments,
            NavAction::Beds => Tab::Beds,
        }
    }
}

/// Keystroke bound to a tab, as registered in [`new_key_bindings`]
pub fn tab_keystroke(tab: Tab) -> &'static str {
    match tab {
        Tab::Emergency => "secondary-1",
        Tab::Appointments => "secondary-2",
        Tab::Beds => "secondary-3",
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new(tab_keystroke(Tab::Emergency), NavAction::Emergency, None),
        KeyBinding::new(tab_keystroke(Tab::Appointments), NavAction::Appointments, None),
        KeyBinding::new(tab_keystroke(Tab::Beds), NavAction::Beds, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_actions_cover_every_tab() {
        let tabs: Vec<_> = [NavAction::Emergency, NavAction::Appointments, NavAction::Beds]
            .into_iter()
            .map(NavAction::tab)
            .collect();
        assert_eq!(tabs, Tab::all());
    }

    #[test]
    fn tab_keystrokes_are_distinct() {
        let mut keys: Vec<_> = Tab::all().iter().map(|t| tab_keystroke(*t)).collect();
        keys.dedup();
        assert_eq!(keys.len(), Tab::all().len());
    }
}
