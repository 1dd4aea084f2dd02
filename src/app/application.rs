//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::app::workspace::DeskWorkspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::{MenuAction, NavAction, new_key_bindings};
use crate::states::{
    DeskState, FontSize, FontSizeAction, LocaleAction, ReceptionAppState, ReceptionGlobalStore,
    ThemeAction, i18n_common, update_app_state_and_save,
};
use crate::views::{SetAppointmentStatus, handle_set_appointment_status};
use gpui::{
    App, AppContext, Application, Bounds, SharedString, WindowBounds, WindowOptions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use tracing::{error, info};

/// Apply a theme preference; `None` follows the system appearance
fn apply_theme(mode: Option<ThemeMode>, cx: &mut App) {
    match mode {
        Some(mode) => Theme::change(mode, None, cx),
        None => Theme::sync_system_appearance(None, cx),
    }
    cx.refresh_windows();
}

/// Switch tabs through the global store; desk data is never touched
fn navigate(action: &NavAction, cx: &mut App) {
    let tab = action.tab();
    let app_state = cx.global::<ReceptionGlobalStore>().app_state();
    app_state.update(cx, |state, cx| state.select_tab(tab, cx));
}

fn register_actions(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => {
            info!("Quit requested");
            cx.quit();
        }
    });

    cx.on_action(navigate);

    cx.on_action(|action: &SetAppointmentStatus, cx: &mut App| {
        let desk_state = cx.global::<ReceptionGlobalStore>().desk_state();
        handle_set_appointment_status(action, &desk_state, cx);
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(mode, cx);
        update_app_state_and_save(cx, "set_theme", move |state, _cx| {
            state.set_theme(mode);
        });
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_app_state_and_save(cx, "set_locale", move |state, _cx| {
            state.set_locale(locale.to_string());
        });
    });

    cx.on_action(|action: &FontSizeAction, cx: &mut App| {
        let font_size = match action {
            FontSizeAction::Large => FontSize::Large,
            FontSizeAction::Medium => FontSize::Medium,
            FontSizeAction::Small => FontSize::Small,
        };
        update_app_state_and_save(cx, "set_font_size", move |state, _cx| {
            state.set_font_size(Some(font_size));
        });
    });
}

/// Run the reception desk application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        register_actions(cx);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = ReceptionAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load preferences, using defaults");
            ReceptionAppState::new()
        });
        let saved_bounds = app_state.bounds().cloned();
        let theme = app_state.theme();

        let app_state = cx.new(|_| app_state);
        let desk_state = cx.new(|_| DeskState::seeded());
        cx.set_global(ReceptionGlobalStore::new(app_state, desk_state));
        apply_theme(theme, cx);

        let bounds = saved_bounds.unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let title: SharedString = i18n_common(cx, "app_name");
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(gpui::TitlebarOptions {
                title: Some(title),
                ..TitleBar::title_bar_options()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| DeskWorkspace::new(window, cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });

        match opened {
            Ok(_) => {
                info!("Reception desk window opened");
                cx.activate(true);
            }
            Err(e) => {
                error!(error = %e, "Failed to open the main window");
                cx.quit();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, BedCategory};
    use crate::states::Tab;
    use gpui::TestAppContext;

    fn install_store(cx: &mut TestAppContext) -> ReceptionGlobalStore {
        let app_state = cx.new(|_| ReceptionAppState::new());
        let desk_state = cx.new(|_| DeskState::seeded());
        let store = ReceptionGlobalStore::new(app_state, desk_state);
        cx.update(|cx| cx.set_global(store.clone()));
        store
    }

    #[gpui::test]
    fn navigation_never_touches_desk_data(cx: &mut TestAppContext) {
        let store = install_store(cx);
        let desk_state = store.desk_state();

        // Move the desk away from its seed so a reset would also be caught
        desk_state.update(cx, |desk, cx| {
            desk.dispatch("1", cx);
            desk.set_appointment_status("2", AppointmentStatus::Completed, cx);
            desk.adjust_beds(BedCategory::Icu, -2, cx);
        });
        let before = desk_state.read_with(cx, |desk, _| desk.clone());

        for action in [
            NavAction::Beds,
            NavAction::Appointments,
            NavAction::Emergency,
            NavAction::Beds,
        ] {
            cx.update(|cx| navigate(&action, cx));

            let tab = store.app_state().read_with(cx, |state, _| state.tab());
            assert_eq!(tab, action.tab());
            desk_state.read_with(cx, |desk, _| {
                assert_eq!(desk.requests(), before.requests());
                assert_eq!(desk.appointments(), before.appointments());
                assert_eq!(desk.beds(), before.beds());
                assert_eq!(desk.activity().len(), before.activity().len());
            });
        }
    }

    #[gpui::test]
    fn navigating_to_the_current_tab_is_a_no_op(cx: &mut TestAppContext) {
        let store = install_store(cx);
        cx.update(|cx| navigate(&NavAction::Emergency, cx));
        assert_eq!(
            store.app_state().read_with(cx, |state, _| state.tab()),
            Tab::Emergency
        );
    }
}
