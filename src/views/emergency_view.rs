//! Emergency Requests View
//!
//! One card per ambulance request. Pending requests offer "Dispatch
//! Ambulance", dispatched ones offer "Track Location".

use crate::assets::CustomIconName;
use crate::domain::{EmergencyRequest, RequestStatus};
use crate::states::{DeskState, i18n_emergency, i18n_format};
use crate::views::StatusBadge;
use gpui::{Context, Entity, SharedString, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Icon,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

pub struct EmergencyView {
    desk_state: Entity<DeskState>,
    _subscriptions: Vec<Subscription>,
}

impl EmergencyView {
    pub fn new(desk_state: Entity<DeskState>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&desk_state, |_this, _model, cx| cx.notify())];

        Self {
            desk_state,
            _subscriptions: subscriptions,
        }
    }

    fn render_detail(icon: CustomIconName, text: String, cx: &Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        h_flex()
            .gap_2()
            .items_center()
            .child(Icon::from(icon).size_4().text_color(muted))
            .child(Label::new(text).text_sm().text_color(muted))
    }

    fn render_actions(&self, request: &EmergencyRequest, cx: &mut Context<Self>) -> impl IntoElement {
        let id = request.id.clone();
        let actions = h_flex().gap_3().flex_none();

        if request.can_dispatch() {
            actions.child(
                Button::new(SharedString::from(format!("dispatch-{id}")))
                    .danger()
                    .icon(CustomIconName::Ambulance)
                    .label(i18n_emergency(cx, "dispatch"))
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.desk_state.update(cx, |desk, cx| desk.dispatch(&id, cx));
                    })),
            )
        } else if request.can_track() {
            actions.child(
                Button::new(SharedString::from(format!("track-{id}")))
                    .primary()
                    .label(i18n_emergency(cx, "track"))
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.desk_state.update(cx, |desk, cx| desk.track(&id, cx));
                    })),
            )
        } else {
            actions
        }
    }

    fn render_request(&self, request: &EmergencyRequest, cx: &mut Context<Self>) -> impl IntoElement {
        let status_label = i18n_emergency(cx, request.status.label_key());

        h_flex()
            .w_full()
            .p_5()
            .gap_6()
            .items_center()
            .justify_between()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                v_flex()
                    .flex_1()
                    .gap_3()
                    .child(
                        h_flex()
                            .gap_4()
                            .items_center()
                            .child(
                                Label::new(request.patient_name.clone())
                                    .text_lg()
                                    .font_weight(gpui::FontWeight::SEMIBOLD),
                            )
                            .child(StatusBadge::new(status_label, request.status.tone())),
                    )
                    .child(
                        h_flex()
                            .flex_wrap()
                            .gap_x_8()
                            .gap_y_2()
                            .child(Self::render_detail(CustomIconName::MapPin, request.location.clone(), cx))
                            .child(Self::render_detail(CustomIconName::Clock, request.timestamp.clone(), cx))
                            .child(Self::render_detail(
                                CustomIconName::Phone,
                                request.contact_number.clone(),
                                cx,
                            ))
                            .child(Self::render_detail(CustomIconName::Ambulance, request.distance.clone(), cx)),
                    ),
            )
            .child(self.render_actions(request, cx))
    }
}

impl Render for EmergencyView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let board = self.desk_state.read(cx).requests();
        let pending = board.count_with(RequestStatus::Pending);
        let requests: Vec<EmergencyRequest> = board.requests().to_vec();
        let (pending, total) = (pending.to_string(), requests.len().to_string());
        let summary = i18n_format(
            cx,
            "emergency.summary",
            &[("pending", pending.as_str()), ("total", total.as_str())],
        );

        let body = if requests.is_empty() {
            div()
                .p_4()
                .child(Label::new(i18n_emergency(cx, "empty")).text_color(cx.theme().muted_foreground))
                .into_any_element()
        } else {
            let cards: Vec<_> = requests
                .iter()
                .map(|request| self.render_request(request, cx).into_any_element())
                .collect();
            v_flex().gap_4().children(cards).into_any_element()
        };

        v_flex()
            .id("emergency-view")
            .size_full()
            .p_6()
            .gap_6()
            .overflow_y_scroll()
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        Label::new(i18n_emergency(cx, "title"))
                            .text_2xl()
                            .font_weight(gpui::FontWeight::BOLD),
                    )
                    .child(
                        Label::new(summary)
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    ),
            )
            .child(body)
    }
}
