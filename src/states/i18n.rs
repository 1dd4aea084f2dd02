//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::ReceptionGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

fn locale(cx: &App) -> &str {
    cx.global::<ReceptionGlobalStore>().read(cx).locale()
}

/// Get translated string from "common" namespace
pub fn i18n_common(cx: &App, key: &str) -> SharedString {
    t!(format!("common.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "sidebar" namespace
pub fn i18n_sidebar(cx: &App, key: &str) -> SharedString {
    t!(format!("sidebar.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "emergency" namespace
pub fn i18n_emergency(cx: &App, key: &str) -> SharedString {
    t!(format!("emergency.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "appointments" namespace
pub fn i18n_appointments(cx: &App, key: &str) -> SharedString {
    t!(format!("appointments.{key}"), locale = locale(cx)).into()
}

/// Get translated string from "beds" namespace
pub fn i18n_beds(cx: &App, key: &str) -> SharedString {
    t!(format!("beds.{key}"), locale = locale(cx)).into()
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation total = "Total: {count}"
/// i18n_format(cx, "beds.total", &[("count", "20")])
/// // Returns "Total: 20"
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t!(key, locale = locale(cx)).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}
