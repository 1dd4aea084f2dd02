//! Title Bar Component
//!
//! App name with a live desk summary, plus the preferences menu.

use crate::domain::{RequestStatus, StatusTone};
use crate::states::{
    DeskState, FontSize, FontSizeAction, LocaleAction, ReceptionAppState, ReceptionGlobalStore,
    ThemeAction, i18n_common, i18n_format, i18n_sidebar,
};
use crate::views::StatusBadge;
use gpui::{Action, App, Context, Corner, Entity, SharedString, Subscription, Window, prelude::*};
use gpui_component::{
    ActiveTheme, IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// One checkable menu entry
type CheckItem = (SharedString, bool, Box<dyn Action>);

/// Append a labelled group of check items
fn check_section(menu: PopupMenu, label: SharedString, items: Vec<CheckItem>) -> PopupMenu {
    items
        .into_iter()
        .fold(menu.label(label), |menu, (text, checked, action)| {
            menu.menu_with_check(text, checked, action)
        })
}

fn font_size_items(state: &ReceptionAppState, cx: &App) -> Vec<CheckItem> {
    [
        (FontSize::Large, "font_size_large", FontSizeAction::Large),
        (FontSize::Medium, "font_size_medium", FontSizeAction::Medium),
        (FontSize::Small, "font_size_small", FontSizeAction::Small),
    ]
    .into_iter()
    .map(|(size, key, action)| {
        (i18n_sidebar(cx, key), state.font_size() == size, Box::new(action) as Box<dyn Action>)
    })
    .collect()
}

fn locale_items(state: &ReceptionAppState) -> Vec<CheckItem> {
    // Language names stay in their own script
    [("中文", "zh", LocaleAction::Zh), ("English", "en", LocaleAction::En)]
        .into_iter()
        .map(|(name, code, action)| {
            (SharedString::from(name), state.locale() == code, Box::new(action) as Box<dyn Action>)
        })
        .collect()
}

fn theme_items(state: &ReceptionAppState, cx: &App) -> Vec<CheckItem> {
    [
        (Some(ThemeMode::Light), "light", ThemeAction::Light),
        (Some(ThemeMode::Dark), "dark", ThemeAction::Dark),
        (None, "system", ThemeAction::System),
    ]
    .into_iter()
    .map(|(mode, key, action)| {
        (i18n_sidebar(cx, key), state.theme() == mode, Box::new(action) as Box<dyn Action>)
    })
    .collect()
}

pub struct DeskTitleBar {
    desk_state: Entity<DeskState>,
    _subscriptions: Vec<Subscription>,
}

impl DeskTitleBar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let desk_state = cx.global::<ReceptionGlobalStore>().desk_state();
        let subscriptions = vec![cx.observe(&desk_state, |_this, _model, cx| cx.notify())];

        Self {
            desk_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_settings_menu(menu: PopupMenu, cx: &App) -> PopupMenu {
        let state = cx.global::<ReceptionGlobalStore>().read(cx);

        let menu = check_section(menu, i18n_sidebar(cx, "font_size"), font_size_items(state, cx));
        let menu = check_section(menu.separator(), i18n_sidebar(cx, "language"), locale_items(state));
        check_section(menu.separator(), i18n_sidebar(cx, "theme"), theme_items(state, cx))
    }

    /// Pending dispatches and free beds, next to the app name
    fn render_summary(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let desk = self.desk_state.read(cx);
        let pending_count = desk.requests().count_with(RequestStatus::Pending);
        let pending = pending_count.to_string();
        let (available, total) = (desk.beds().available().to_string(), desk.beds().total().to_string());

        let beds = i18n_format(
            cx,
            "beds.summary",
            &[("available", available.as_str()), ("total", total.as_str())],
        );
        let pending_label = i18n_format(cx, "common.pending_requests", &[("count", pending.as_str())]);

        h_flex()
            .gap_3()
            .items_center()
            .when(pending_count > 0, |this| {
                this.child(StatusBadge::new(pending_label, StatusTone::Warning))
            })
            .child(
                Label::new(beds)
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
    }
}

impl Render for DeskTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .gap_4()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_common(cx, "app_name")).text_sm())
                    .child(self.render_summary(cx)),
            )
            .child(
                Button::new("settings")
                    .mr_2()
                    .tooltip(i18n_sidebar(cx, "settings"))
                    .icon(IconName::Settings2)
                    .small()
                    .ghost()
                    .dropdown_menu(|menu, _window, cx| Self::render_settings_menu(menu, cx))
                    .anchor(Corner::TopRight),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_locale_is_checked() {
        let mut state = ReceptionAppState::new();
        state.set_locale("zh".to_string());

        let checked: Vec<_> = locale_items(&state)
            .into_iter()
            .map(|(name, checked, _)| (name.to_string(), checked))
            .collect();
        assert_eq!(
            checked,
            vec![("中文".to_string(), true), ("English".to_string(), false)]
        );
    }
}
