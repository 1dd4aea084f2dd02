//! Bed Availability View
//!
//! Facility total, one card per category with -/+ controls, and an
//! occupancy bar across all pools.

use crate::assets::CustomIconName;
use crate::domain::{BedCategory, BedPool, BedStatus};
use crate::states::{DeskState, i18n_beds, i18n_format};
use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px, relative};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::Button,
    h_flex,
    label::Label,
    v_flex,
};

pub struct BedsView {
    desk_state: Entity<DeskState>,
    _subscriptions: Vec<Subscription>,
}

impl BedsView {
    pub fn new(desk_state: Entity<DeskState>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let subscriptions = vec![cx.observe(&desk_state, |_this, _model, cx| cx.notify())];

        Self {
            desk_state,
            _subscriptions: subscriptions,
        }
    }

    fn card() -> gpui::Div {
        v_flex().flex_1().p_5().gap_3().rounded_lg().border_1()
    }

    fn render_total(&self, beds: &BedStatus, cx: &mut Context<Self>) -> impl IntoElement {
        let available = beds.available().to_string();

        Self::card()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(Icon::from(CustomIconName::Bed).size_5().text_color(cx.theme().primary))
                    .child(Label::new(i18n_beds(cx, "total_beds")).font_weight(gpui::FontWeight::MEDIUM)),
            )
            .child(
                Label::new(beds.total().to_string())
                    .text_3xl()
                    .font_weight(gpui::FontWeight::BOLD),
            )
            .child(
                Label::new(i18n_format(cx, "beds.currently_available", &[("count", available.as_str())]))
                    .text_sm()
                    .text_color(cx.theme().success),
            )
    }

    fn render_category(&self, index: usize, category: BedCategory, pool: BedPool, cx: &mut Context<Self>) -> impl IntoElement {
        let total = pool.total.to_string();

        let stepper = h_flex()
            .gap_3()
            .items_center()
            .child(
                Button::new(("beds-minus", index))
                    .outline()
                    .small()
                    .icon(IconName::Minus)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.desk_state.update(cx, |desk, cx| desk.adjust_beds(category, -1, cx));
                    })),
            )
            .child(
                Label::new(pool.available.to_string())
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD),
            )
            .child(
                Button::new(("beds-plus", index))
                    .outline()
                    .small()
                    .icon(IconName::Plus)
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.desk_state.update(cx, |desk, cx| desk.adjust_beds(category, 1, cx));
                    })),
            );

        Self::card()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(Label::new(i18n_beds(cx, category.label_key())).font_weight(gpui::FontWeight::MEDIUM))
            .child(stepper)
            .child(
                Label::new(i18n_format(cx, "beds.total", &[("count", total.as_str())]))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_overview(&self, beds: &BedStatus, cx: &mut Context<Self>) -> impl IntoElement {
        let occupied = beds.occupied().to_string();
        let available = beds.available().to_string();
        let muted = cx.theme().muted_foreground;

        v_flex()
            .w_full()
            .p_5()
            .gap_3()
            .rounded_lg()
            .border_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().background)
            .child(Label::new(i18n_beds(cx, "overview")).font_weight(gpui::FontWeight::SEMIBOLD))
            .child(
                div()
                    .w_full()
                    .h(px(12.0))
                    .rounded_full()
                    .bg(cx.theme().secondary)
                    .overflow_hidden()
                    .child(
                        div()
                            .h_full()
                            .w(relative(beds.occupancy_ratio()))
                            .rounded_full()
                            .bg(cx.theme().primary),
                    ),
            )
            .child(
                h_flex()
                    .justify_between()
                    .child(
                        Label::new(i18n_format(cx, "beds.occupied", &[("count", occupied.as_str())]))
                            .text_sm()
                            .text_color(muted),
                    )
                    .child(
                        Label::new(i18n_format(cx, "beds.available", &[("count", available.as_str())]))
                            .text_sm()
                            .text_color(muted),
                    ),
            )
    }
}

impl Render for BedsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let beds = self.desk_state.read(cx).beds().clone();

        let categories: Vec<_> = BedCategory::all()
            .iter()
            .enumerate()
            .map(|(index, category)| {
                self.render_category(index, *category, beds.pool(*category), cx)
                    .into_any_element()
            })
            .collect();

        v_flex()
            .id("beds-view")
            .size_full()
            .p_6()
            .gap_6()
            .overflow_y_scroll()
            .child(
                Label::new(i18n_beds(cx, "title"))
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD),
            )
            .child(h_flex().w_full().child(self.render_total(&beds, cx)))
            .child(h_flex().w_full().gap_4().children(categories))
            .child(self.render_overview(&beds, cx))
    }
}
