//! Application State
//!
//! Active tab plus the persisted UI preferences (locale, theme, font size,
//! window bounds). Desk data lives in [`DeskState`] and is never persisted.

use crate::constants::PREFERENCES_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::states::DeskState;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

/// The three mutually exclusive desk views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    /// Ambulance requests
    #[default]
    Emergency,
    /// Today's appointments
    Appointments,
    /// Bed availability
    Beds,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Emergency, Tab::Appointments, Tab::Beds]
    }

    /// Translation key under the `sidebar` namespace
    pub fn label_key(&self) -> &'static str {
        match self {
            Tab::Emergency => "emergency",
            Tab::Appointments => "appointments",
            Tab::Beds => "beds",
        }
    }
}

/// Font size options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Convert to pixel size (returns None for default/Medium)
    pub fn to_pixels(self) -> Option<f32> {
        match self {
            FontSize::Small => Some(14.0),
            FontSize::Medium => None,
            FontSize::Large => Some(18.0),
        }
    }
}

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

/// Font size action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum FontSizeAction {
    Large,
    Medium,
    Small,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const SUPPORTED_LOCALES: &[&str] = &["en", "zh"];

fn get_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(PREFERENCES_FILE))
}

/// Language prefix of the system locale, if the desk has translations for it
fn system_locale() -> Option<String> {
    let current = Locale::current().to_string();
    let lang = current.split(['-', '_']).next()?.to_lowercase();
    SUPPORTED_LOCALES.contains(&lang.as_str()).then_some(lang)
}

/// Application state; everything except the active tab is persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceptionAppState {
    #[serde(skip)]
    tab: Tab,
    locale: Option<String>,
    bounds: Option<Bounds<Pixels>>,
    theme: Option<String>,
    font_size: Option<FontSize>,
}

impl ReceptionAppState {
    /// Load preferences from the config file
    pub fn try_load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load preferences from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading preferences file");
        let value = match std::fs::read_to_string(path) {
            Ok(value) => value,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut state = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str::<Self>(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse preferences file");
                e
            })?
        };

        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            state.locale = system_locale();
        }

        Ok(state)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size.unwrap_or(FontSize::Medium)
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    // ==================== Setters ====================

    /// Switch the active tab; returns whether it changed
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    pub fn select_tab(&mut self, tab: Tab, cx: &mut Context<Self>) {
        if self.set_tab(tab) {
            info!(tab = ?tab, "Switched tab");
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_font_size(&mut self, font_size: Option<FontSize>) {
        self.font_size = font_size;
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<ReceptionGlobalStore>()`
#[derive(Clone)]
pub struct ReceptionGlobalStore {
    app_state: Entity<ReceptionAppState>,
    desk_state: Entity<DeskState>,
}

impl ReceptionGlobalStore {
    pub fn new(app_state: Entity<ReceptionAppState>, desk_state: Entity<DeskState>) -> Self {
        Self {
            app_state,
            desk_state,
        }
    }

    pub fn app_state(&self) -> Entity<ReceptionAppState> {
        self.app_state.clone()
    }

    pub fn desk_state(&self) -> Entity<DeskState> {
        self.desk_state.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a ReceptionAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut ReceptionAppState, &mut Context<ReceptionAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

}

impl Global for ReceptionGlobalStore {}

// ==================== Persistence ====================

/// Serializes writers so the last save wins
static SAVE_LOCK: Mutex<()> = Mutex::new(());
static SAVE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Save preferences to disk
pub fn save_app_state(state: &ReceptionAppState) -> Result<()> {
    save_app_state_to(&get_config_path()?, state)
}

/// Write preferences to a sibling temp file, then rename it over `path`.
///
/// Readers see either the old file or the new one, never a partial write.
pub fn save_app_state_to(path: &Path, state: &ReceptionAppState) -> Result<()> {
    let value = toml::to_string(state)?;
    let sequence = SAVE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let tmp_path = path.with_extension(format!("toml.{}.{sequence}.tmp", std::process::id()));

    let _guard = SAVE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let result = std::fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(value.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(&tmp_path, path));

    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut ReceptionAppState, &App) + Send + 'static + Clone,
{
    let store = cx.global::<ReceptionGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save preferences");
                    } else {
                        info!(action = action_name, "Preferences saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_emergency_tab() {
        assert_eq!(ReceptionAppState::new().tab(), Tab::Emergency);
    }

    #[test]
    fn set_tab_reports_changes() {
        let mut state = ReceptionAppState::new();
        assert!(!state.set_tab(Tab::Emergency));
        assert!(state.set_tab(Tab::Beds));
        assert_eq!(state.tab(), Tab::Beds);
        assert!(state.set_tab(Tab::Appointments));
        assert_eq!(state.tab(), Tab::Appointments);
    }

    #[test]
    fn tab_is_not_persisted() {
        let mut state = ReceptionAppState::new();
        state.set_tab(Tab::Beds);
        state.set_locale("zh".to_string());
        state.set_theme(Some(ThemeMode::Dark));

        let text = toml::to_string(&state).expect("serialize preferences");
        let restored: ReceptionAppState = toml::from_str(&text).expect("parse preferences");

        assert_eq!(restored.tab(), Tab::Emergency);
        assert_eq!(restored.locale(), "zh");
        assert_eq!(restored.theme(), Some(ThemeMode::Dark));
        assert_eq!(restored.font_size(), FontSize::Medium);
    }

    #[test]
    fn system_theme_is_stored_as_none() {
        let mut state = ReceptionAppState::new();
        state.set_theme(Some(ThemeMode::Light));
        assert_eq!(state.theme(), Some(ThemeMode::Light));
        state.set_theme(None);
        assert_eq!(state.theme(), None);
    }

    #[test]
    fn missing_preferences_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = ReceptionAppState::load_from(&dir.path().join(PREFERENCES_FILE))
            .expect("defaults for a missing file");
        assert_eq!(state.tab(), Tab::Emergency);
        assert_eq!(state.font_size(), FontSize::Medium);
    }

    #[test]
    fn concurrent_saves_leave_a_parseable_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(PREFERENCES_FILE);

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let path = path.clone();
                std::thread::spawn(move || {
                    for round in 0..25 {
                        let mut state = ReceptionAppState::new();
                        // Alternate body lengths so a torn write would leave trailing bytes
                        if (i + round) % 2 == 0 {
                            state.set_locale("zh".to_string());
                            state.set_theme(Some(ThemeMode::Dark));
                            state.set_font_size(Some(FontSize::Large));
                        }
                        state.set_bounds(Bounds::new(
                            gpui::point(gpui::px(i as f32), gpui::px(round as f32)),
                            gpui::size(gpui::px(1280.0), gpui::px(800.0)),
                        ));
                        save_app_state_to(&path, &state).expect("save preferences");
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().expect("writer thread");
        }

        let restored = ReceptionAppState::load_from(&path).expect("parse preferences");
        assert!(restored.bounds().is_some());

        let leftovers = std::fs::read_dir(dir.path())
            .expect("list temp dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn locale_defaults_to_english() {
        assert_eq!(ReceptionAppState::new().locale(), "en");
    }
}
