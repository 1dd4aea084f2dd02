//! Main Content Area
//!
//! Dashboard header plus the view for the active tab.

use crate::states::{DeskState, ReceptionGlobalStore, Tab, UIEvent, i18n_common};
use crate::views::{AppointmentsView, BedsView, EmergencyView};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*};
use gpui_component::{ActiveTheme, label::Label, v_flex};
use tracing::info;

/// Main content container component
pub struct DeskContent {
    /// Current tab
    current_tab: Tab,
    emergency_view: Entity<EmergencyView>,
    appointments_view: Entity<AppointmentsView>,
    beds_view: Entity<BedsView>,
    _subscriptions: Vec<Subscription>,
}

impl DeskContent {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<ReceptionGlobalStore>();
        let current_tab = store.read(cx).tab();
        let app_state = store.app_state();
        let desk_state: Entity<DeskState> = store.desk_state();

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&app_state, |this, model, cx| {
            this.current_tab = model.read(cx).tab();
            cx.notify();
        }));

        subscriptions.push(cx.subscribe(&desk_state, |_this, _state, event, cx| match event {
            UIEvent::OpenMap { request_id, url } => {
                info!(request_id = %request_id, url = %url, "Opening map");
                cx.open_url(url);
            }
        }));

        let emergency_view = cx.new(|cx| EmergencyView::new(desk_state.clone(), window, cx));
        let appointments_view = cx.new(|cx| AppointmentsView::new(desk_state.clone(), window, cx));
        let beds_view = cx.new(|cx| BedsView::new(desk_state.clone(), window, cx));

        Self {
            current_tab,
            emergency_view,
            appointments_view,
            beds_view,
            _subscriptions: subscriptions,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .w_full()
            .px_6()
            .pt_6()
            .gap_1()
            .child(
                Label::new(i18n_common(cx, "title"))
                    .text_3xl()
                    .font_weight(gpui::FontWeight::BOLD),
            )
            .child(Label::new(i18n_common(cx, "subtitle")).text_color(cx.theme().muted_foreground))
    }
}

impl Render for DeskContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = match self.current_tab {
            Tab::Emergency => self.emergency_view.clone().into_any_element(),
            Tab::Appointments => self.appointments_view.clone().into_any_element(),
            Tab::Beds => self.beds_view.clone().into_any_element(),
        };

        v_flex()
            .size_full()
            .flex_1()
            .overflow_hidden()
            .child(self.render_header(cx))
            .child(div().flex_1().overflow_hidden().child(view))
    }
}
