//! Status Badge
//!
//! Rounded pill used for request and appointment statuses.

use crate::domain::StatusTone;
use gpui::{App, Hsla, SharedString, Window, div, prelude::*};
use gpui_component::ActiveTheme;

pub fn tone_color(tone: StatusTone, cx: &App) -> Hsla {
    match tone {
        StatusTone::Warning => cx.theme().warning,
        StatusTone::Info => cx.theme().info,
        StatusTone::Success => cx.theme().success,
    }
}

#[derive(IntoElement)]
pub struct StatusBadge {
    label: SharedString,
    tone: StatusTone,
}

impl StatusBadge {
    pub fn new(label: impl Into<SharedString>, tone: StatusTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

impl RenderOnce for StatusBadge {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let color = tone_color(self.tone, cx);

        div()
            .px_3()
            .py_0p5()
            .rounded_full()
            .bg(color.opacity(0.15))
            .text_color(color)
            .text_sm()
            .font_weight(gpui::FontWeight::MEDIUM)
            .child(self.label)
    }
}
