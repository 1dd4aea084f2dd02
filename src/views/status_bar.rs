//! Status Bar
//!
//! Latest desk activity on the left, facility bed summary on the right.

use crate::constants::STATUS_BAR_HEIGHT;
use crate::states::{
    ActivityEntry, ActivityKind, DeskState, ReceptionGlobalStore, i18n_appointments, i18n_beds,
    i18n_format,
};
use gpui::{App, Context, Entity, SharedString, Subscription, Window, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, label::Label, tooltip::Tooltip};

/// Entries listed in the activity tooltip
const RECENT_ACTIVITY: usize = 5;

/// Human-readable line for one activity entry
fn describe(entry: &ActivityEntry, cx: &App) -> SharedString {
    let message = match &entry.kind {
        ActivityKind::Dispatched { patient } => {
            i18n_format(cx, "activity.dispatched", &[("patient", patient.as_str())])
        }
        ActivityKind::AppointmentStatusChanged { patient, from, to } => {
            let from = i18n_appointments(cx, from.label_key());
            let to = i18n_appointments(cx, to.label_key());
            i18n_format(
                cx,
                "activity.appointment",
                &[("patient", patient.as_str()), ("from", &*from), ("to", &*to)],
            )
        }
        ActivityKind::BedsAdjusted {
            category,
            available,
            total,
        } => {
            let category = i18n_beds(cx, category.label_key());
            let (available, total) = (available.to_string(), total.to_string());
            i18n_format(
                cx,
                "activity.beds",
                &[
                    ("category", &*category),
                    ("available", available.as_str()),
                    ("total", total.as_str()),
                ],
            )
        }
    };

    format!("{}  {}", entry.timestamp.format("%H:%M:%S"), message).into()
}

pub struct DeskStatusBar {
    desk_state: Entity<DeskState>,
    _subscriptions: Vec<Subscription>,
}

impl DeskStatusBar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let desk_state = cx.global::<ReceptionGlobalStore>().desk_state();
        let subscriptions = vec![cx.observe(&desk_state, |_this, _model, cx| cx.notify())];

        Self {
            desk_state,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for DeskStatusBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let desk = self.desk_state.read(cx);
        let message = match desk.activity().latest() {
            Some(entry) => describe(entry, cx),
            None => i18n_format(cx, "activity.none", &[]),
        };
        let recent: SharedString = desk
            .activity()
            .entries()
            .iter()
            .rev()
            .take(RECENT_ACTIVITY)
            .map(|entry| describe(entry, cx).to_string())
            .collect::<Vec<_>>()
            .join("\n")
            .into();
        let beds = desk.beds();
        let (available, total) = (beds.available().to_string(), beds.total().to_string());
        let summary = i18n_format(
            cx,
            "beds.summary",
            &[("available", available.as_str()), ("total", total.as_str())],
        );
        let muted = cx.theme().muted_foreground;

        h_flex()
            .id("status-bar")
            .w_full()
            .h(px(STATUS_BAR_HEIGHT))
            .flex_none()
            .px_4()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().sidebar)
            .child(
                h_flex()
                    .id("status-activity")
                    .when(!recent.is_empty(), |this| {
                        this.tooltip(move |window, cx| Tooltip::new(recent.clone()).build(window, cx))
                    })
                    .child(Label::new(message).text_xs().text_color(muted)),
            )
            .child(Label::new(summary).text_xs().text_color(muted))
    }
}
