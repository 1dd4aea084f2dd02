//! Workspace - Main Shell with Layout
//!
//! Holds the title bar, sidebar, content area and status bar, applies the
//! font size preference and remembers the window bounds.

use crate::constants::BOUNDS_SAVE_DEBOUNCE;
use crate::states::{ReceptionGlobalStore, update_app_state_and_save};
use crate::views::{DeskContent, DeskSidebar, DeskStatusBar, DeskTitleBar};
use gpui::{Bounds, Context, Entity, Pixels, Subscription, Task, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, v_flex};

/// Main workspace containing the application layout
pub struct DeskWorkspace {
    title_bar: Entity<DeskTitleBar>,
    sidebar: Entity<DeskSidebar>,
    content: Entity<DeskContent>,
    status_bar: Entity<DeskStatusBar>,
    /// Pending bounds save; replacing it cancels the previous one
    save_bounds_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl DeskWorkspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let app_state = cx.global::<ReceptionGlobalStore>().app_state();

        let title_bar = cx.new(|cx| DeskTitleBar::new(window, cx));
        let sidebar = cx.new(|cx| DeskSidebar::new(window, cx));
        let content = cx.new(|cx| DeskContent::new(window, cx));
        let status_bar = cx.new(|cx| DeskStatusBar::new(window, cx));

        let subscriptions = vec![
            // Font size lives on the app state
            cx.observe(&app_state, |_this, _model, cx| cx.notify()),
            cx.observe_window_bounds(window, |this, window, cx| {
                this.schedule_bounds_save(window.bounds(), cx);
            }),
        ];

        Self {
            title_bar,
            sidebar,
            content,
            status_bar,
            save_bounds_task: None,
            _subscriptions: subscriptions,
        }
    }

    /// Save the bounds once resizing settles
    fn schedule_bounds_save(&mut self, bounds: Bounds<Pixels>, cx: &mut Context<Self>) {
        self.save_bounds_task = Some(cx.spawn(async move |_this, cx| {
            cx.background_executor().timer(BOUNDS_SAVE_DEBOUNCE).await;
            cx.update(|cx| {
                update_app_state_and_save(cx, "save_bounds", move |state, _cx| {
                    state.set_bounds(bounds);
                });
            })
            .ok();
        }));
    }
}

impl Render for DeskWorkspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let font_size = cx.global::<ReceptionGlobalStore>().read(cx).font_size();

        v_flex()
            .id("workspace")
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .when_some(font_size.to_pixels(), |this, size| this.text_size(px(size)))
            .child(self.title_bar.clone())
            .child(
                h_flex()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(div().flex_1().h_full().overflow_hidden().child(self.content.clone())),
            )
            .child(self.status_bar.clone())
    }
}
