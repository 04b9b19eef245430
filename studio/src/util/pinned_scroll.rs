//! Binds an [`AutoScroll`] controller to a scroll container in the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! The container holds an items element whose last child is the newest entry,
//! and optionally a trailing spacer sized so the newest entry can reach the
//! top of the viewport. Measurements are taken only under `hydrate`; during
//! SSR effects never run, and a command whose target cannot be measured is
//! released immediately so the guard never sticks.

use leptos::html;
use leptos::prelude::*;

use crate::util::auto_scroll::{AutoScroll, Anchor, GUARD_FALLBACK_MS, ScrollCommand, ScrollMetrics, ScrollPhase};
use crate::util::delay::DelaySlot;

#[cfg(test)]
#[path = "pinned_scroll_test.rs"]
mod pinned_scroll_test;

/// Bottom padding of the card stack. It sits between the newest card and the
/// spacer, so it counts toward the height below the card.
pub const STACK_BOTTOM_PADDING_PX: f64 = 16.0;

#[derive(Clone, Copy)]
pub struct PinnedScroll {
    controller: StoredValue<AutoScroll>,
    guard: StoredValue<DelaySlot>,
    container: NodeRef<html::Div>,
    items: NodeRef<html::Div>,
    spacer: Option<NodeRef<html::Div>>,
}

impl PinnedScroll {
    pub fn new(anchor: Anchor, container: NodeRef<html::Div>, items: NodeRef<html::Div>) -> Self {
        let guard = DelaySlot::default();
        let cleanup = guard.clone();
        on_cleanup(move || cleanup.cancel());
        Self {
            controller: StoredValue::new(AutoScroll::new(anchor)),
            guard: StoredValue::new(guard),
            container,
            items,
            spacer: None,
        }
    }

    /// Keep a trailing spacer sized for the newest entry.
    #[must_use]
    pub fn with_spacer(mut self, spacer: NodeRef<html::Div>) -> Self {
        self.spacer = Some(spacer);
        self
    }

    /// Re-run on every change of `len` and scroll when the controller asks to.
    pub fn track(self, len: impl Fn() -> usize + Send + Sync + 'static) {
        Effect::new(move |_| {
            let len = len();
            self.resize_spacer();
            let command = self.controller.try_update_value(|c| c.on_len_change(len)).flatten();
            if let Some(command) = command {
                self.run(command);
            }
        });
    }

    /// `scroll` event handler.
    pub fn on_scroll(self) {
        if let Some(metrics) = self.metrics() {
            self.controller.update_value(|c| c.on_scroll(&metrics));
        }
    }

    /// `scrollend` event handler. Releases the guard ahead of the fallback timer.
    pub fn on_scroll_end(self) {
        let phase = self.controller.with_value(AutoScroll::phase);
        if let ScrollPhase::AutoScrolling { seq } = phase {
            self.guard.with_value(DelaySlot::cancel);
            self.finish(seq);
        }
    }

    fn run(self, command: ScrollCommand) {
        let target = self.metrics().and_then(|m| command.target(&m));
        let Some(target) = target else {
            self.finish(command.seq);
            return;
        };
        self.scroll_to(target);
        let seq = command.seq;
        self.guard.with_value(|g| g.schedule(GUARD_FALLBACK_MS, move || self.finish(seq)));
    }

    fn finish(self, seq: u64) {
        let follow_up = self.controller.try_update_value(|c| c.finish(seq)).flatten();
        if let Some(command) = follow_up {
            self.run(command);
        }
    }

    fn metrics(self) -> Option<ScrollMetrics> {
        #[cfg(feature = "hydrate")]
        {
            let el = self.container.get_untracked()?;
            let scroll_top = f64::from(el.scroll_top());
            let container_top = el.get_bounding_client_rect().top();
            let latest_top = self
                .items
                .get_untracked()
                .and_then(|items| items.last_element_child())
                .map(|last| last.get_bounding_client_rect().top() - container_top + scroll_top);
            Some(ScrollMetrics {
                scroll_top,
                scroll_height: f64::from(el.scroll_height()),
                client_height: f64::from(el.client_height()),
                latest_top,
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn scroll_to(self, top: f64) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.container.get_untracked() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_to_with_scroll_to_options(&options);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = top;
        }
    }

    fn resize_spacer(self) {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::auto_scroll::trailing_spacer;

            let Some(spacer) = self.spacer.and_then(|s| s.get_untracked()) else {
                return;
            };
            let Some(el) = self.container.get_untracked() else {
                return;
            };
            let Some(latest) = self.items.get_untracked().and_then(|items| items.last_element_child()) else {
                return;
            };
            let height = trailing_spacer(
                f64::from(el.client_height()),
                latest.get_bounding_client_rect().height(),
                STACK_BOTTOM_PADDING_PX,
            );
            if let Err(e) = spacer.style().set_property("height", &format!("{height}px")) {
                leptos::logging::warn!("pinned scroll: failed to size spacer: {e:?}");
            }
        }
    }
}
