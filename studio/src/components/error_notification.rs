//! Error banner docked above the input box.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted only while the notification state is visible. A quick report logs
//! a synthetic report and schedules the auto-dismiss; the pending dismissal
//! is cancelled when a new error replaces the banner and when the banner
//! unmounts.

use leptos::prelude::*;

use crate::state::feedback_form::FeedbackForm;
use crate::state::notification::{AUTO_DISMISS_MS, BannerPhase, NotificationState};
use crate::util::delay::DelaySlot;
use crate::util::report::{self, Channel};

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let notification = expect_context::<RwSignal<NotificationState>>();
    let form = expect_context::<RwSignal<FeedbackForm>>();

    let dismiss = DelaySlot::default();
    let cleanup = dismiss.clone();
    on_cleanup(move || cleanup.cancel());

    let replaced = dismiss.clone();
    Effect::new(move |_| {
        if notification.with(NotificationState::phase) == BannerPhase::Showing {
            replaced.cancel();
        }
    });

    let title = move || notification.with(|n| n.error().map(|e| e.title.clone()));
    let message = move || notification.with(|n| n.error().map(|e| e.message.clone()));
    let reported = move || notification.with(NotificationState::phase) == BannerPhase::Reported;

    let on_quick_report = move |_| {
        let Some((quick, token)) = notification.try_update(NotificationState::quick_report).flatten() else {
            return;
        };
        report::emit(Channel::QuickReport, &quick);
        dismiss.schedule(AUTO_DISMISS_MS, move || {
            notification.update(|n| {
                n.auto_dismiss(token);
            });
        });
    };

    let on_add_details = move |_| {
        if let Some(error) = notification.with_untracked(|n| n.error().cloned()) {
            form.update(|f| f.open_for_error(&error));
        }
    };

    let on_close = move |_| notification.update(NotificationState::close);

    view! {
        <div class="error-banner" role="alert">
            <div class="error-banner__body">
                <span class="error-banner__icon">"!"</span>
                <div class="error-banner__text">
                    <h3 class="error-banner__title">{title}</h3>
                    <p class="error-banner__message">{message}</p>
                </div>
                <button class="error-banner__close" title="Close error notification" on:click=on_close>
                    "✕"
                </button>
            </div>
            <div class="error-banner__actions">
                <Show
                    when=reported
                    fallback=move || {
                        view! {
                            <button class="btn error-banner__quick" on:click=on_quick_report.clone()>
                                "Quick report"
                            </button>
                            <button class="btn error-banner__details" on:click=on_add_details>
                                "Add details"
                            </button>
                            <span class="error-banner__hint">"Help us improve by reporting this issue"</span>
                        }
                    }
                >
                    <span class="error-banner__sent">"Report sent. Thank you!"</span>
                </Show>
            </div>
        </div>
    }
}
