//! Sidebar Navigation Component
//!
//! Fixed-width navigation sidebar acting as the desk's view selector.

use crate::assets::CustomIconName;
use crate::constants::SIDEBAR_WIDTH;
use crate::states::{ReceptionAppState, ReceptionGlobalStore, Tab, i18n_sidebar};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Icon,
    button::{Button, ButtonVariants},
    label::Label,
    tooltip::Tooltip,
    v_flex,
};

fn tab_icon(tab: Tab) -> CustomIconName {
    match tab {
        Tab::Emergency => CustomIconName::Ambulance,
        Tab::Appointments => CustomIconName::Calendar,
        Tab::Beds => CustomIconName::Bed,
    }
}

/// Sidebar navigation component
pub struct DeskSidebar {
    /// Current tab for highlighting
    current_tab: Tab,
    app_state: Entity<ReceptionAppState>,
    _subscriptions: Vec<Subscription>,
}

impl DeskSidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ReceptionGlobalStore>();
        let app_state = store.app_state();
        let current_tab = store.read(cx).tab();

        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            this.current_tab = model.read(cx).tab();
            // Locale changes also arrive through the app state
            cx.notify();
        })];

        Self {
            current_tab,
            app_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_nav_button(&self, index: usize, tab: Tab, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let is_active = self.current_tab == tab;
        let label = i18n_sidebar(cx, tab.label_key());
        let tooltip_label = label.clone();
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;
        let app_state = self.app_state.clone();

        let btn = Button::new(("nav", index))
            .ghost()
            .w_full()
            .h(px(64.0))
            .child(
                v_flex()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .child(Icon::from(tab_icon(tab)))
                    .child(Label::new(label).text_xs()),
            )
            .on_click(move |_, _, cx| {
                app_state.update(cx, |state, cx| {
                    state.select_tab(tab, cx);
                });
            });

        div()
            .id(("nav-item", index))
            .tooltip(move |window, cx| Tooltip::new(tooltip_label.clone()).build(window, cx))
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }
}

impl Render for DeskSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;

        let items: Vec<_> = Tab::all()
            .iter()
            .enumerate()
            .map(|(index, tab)| self.render_nav_button(index, *tab, cx))
            .collect();

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .pt_2()
            .gap_1()
            .children(items)
    }
}
