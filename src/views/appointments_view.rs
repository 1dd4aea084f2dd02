//! Appointments View
//!
//! Today's schedule as a table. The status selector on each row accepts any
//! status, including moving back to "Scheduled".

use crate::domain::{Appointment, AppointmentStatus};
use crate::states::{DeskState, i18n_appointments};
use crate::views::StatusBadge;
use gpui::{Action, App, Context, Corner, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme, Sizable,
    button::Button,
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
    v_flex,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Set the status of one appointment, dispatched from the row selector
#[derive(Clone, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub struct SetAppointmentStatus {
    pub appointment_id: String,
    pub status: AppointmentStatus,
}

/// Column widths (patient, doctor, department, time, status); actions take the rest
const COLUMN_WIDTHS: [f32; 5] = [200.0, 160.0, 160.0, 110.0, 140.0];
const COLUMN_KEYS: [&str; 6] = [
    "col_patient",
    "col_doctor",
    "col_department",
    "col_time",
    "col_status",
    "col_actions",
];

pub struct AppointmentsView {
    desk_state: Entity<DeskState>,
    _subscriptions: Vec<Subscription>,
}

impl AppointmentsView {
    pub fn new(desk_state: Entity<DeskState>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&desk_state, |_this, _model, cx| cx.notify())];

        Self {
            desk_state,
            _subscriptions: subscriptions,
        }
    }

    fn cell(index: usize) -> gpui::Div {
        let cell = div().px_4().py_3().overflow_hidden();
        match COLUMN_WIDTHS.get(index) {
            Some(width) => cell.w(px(*width)).flex_none(),
            None => cell.flex_1(),
        }
    }

    fn render_status_menu(
        menu: PopupMenu,
        appointment_id: &str,
        current: AppointmentStatus,
        cx: &App,
    ) -> PopupMenu {
        AppointmentStatus::all().iter().fold(menu, |menu, status| {
            menu.menu_with_check(
                i18n_appointments(cx, status.label_key()),
                *status == current,
                Box::new(SetAppointmentStatus {
                    appointment_id: appointment_id.to_string(),
                    status: *status,
                }),
            )
        })
    }

    fn render_row(&self, index: usize, appointment: &Appointment, cx: &mut Context<Self>) -> impl IntoElement {
        let status = appointment.status;
        let status_label = i18n_appointments(cx, status.label_key());
        let appointment_id = appointment.id.clone();

        let selector = Button::new(SharedString::from(format!("status-{}", appointment.id)))
            .outline()
            .small()
            .label(status_label.clone())
            .dropdown_menu(move |menu, _window, cx| {
                Self::render_status_menu(menu, &appointment_id, status, cx)
            })
            .anchor(Corner::TopLeft);

        let text_cell = |index: usize, text: &str| Self::cell(index).child(Label::new(text.to_string()));

        h_flex()
            .id(("appointment-row", index))
            .w_full()
            .items_center()
            .border_t_1()
            .border_color(cx.theme().border)
            .hover(|s| s.bg(cx.theme().secondary))
            .child(text_cell(0, &appointment.patient_name))
            .child(text_cell(1, &appointment.doctor_name))
            .child(text_cell(2, &appointment.department))
            .child(text_cell(3, &appointment.time))
            .child(Self::cell(4).child(StatusBadge::new(status_label, status.tone())))
            .child(Self::cell(5).child(selector))
    }
}

impl Render for AppointmentsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let appointments: Vec<Appointment> = self.desk_state.read(cx).appointments().appointments().to_vec();
        let muted = cx.theme().muted_foreground;

        let header = h_flex()
            .w_full()
            .bg(cx.theme().secondary)
            .children(COLUMN_KEYS.iter().enumerate().map(|(index, key)| {
                Self::cell(index).child(
                    Label::new(i18n_appointments(cx, key))
                        .text_sm()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(muted),
                )
            }));

        let body = if appointments.is_empty() {
            div()
                .p_4()
                .child(Label::new(i18n_appointments(cx, "empty")).text_color(muted))
                .into_any_element()
        } else {
            let rows: Vec<_> = appointments
                .iter()
                .enumerate()
                .map(|(index, appointment)| self.render_row(index, appointment, cx).into_any_element())
                .collect();
            v_flex().children(rows).into_any_element()
        };

        v_flex()
            .id("appointments-view")
            .size_full()
            .p_6()
            .gap_6()
            .overflow_y_scroll()
            .child(
                Label::new(i18n_appointments(cx, "title"))
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD),
            )
            .child(
                v_flex()
                    .w_full()
                    .rounded_lg()
                    .border_1()
                    .border_color(cx.theme().border)
                    .overflow_hidden()
                    .child(header)
                    .child(body),
            )
    }
}

/// Route row selector actions to the desk state
pub fn handle_set_appointment_status(action: &SetAppointmentStatus, desk_state: &Entity<DeskState>, cx: &mut App) {
    desk_state.update(cx, |desk, cx| {
        desk.set_appointment_status(&action.appointment_id, action.status, cx);
    });
}
