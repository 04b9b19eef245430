//! General feedback / error report modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits the shared [`FeedbackForm`]. Submission is simulated: after
//! [`SUBMIT_DELAY_MS`] the report is logged and the form resets and closes.
//! Closing the modal cancels a pending submission, both through the delay
//! handle and through the form's submit ticket.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::state::feedback_form::{FeedbackForm, FeedbackKind, MAX_SCREENSHOTS, SUBMIT_DELAY_MS};
#[cfg(feature = "hydrate")]
use crate::state::feedback_form::Screenshot;
use crate::util::delay::DelaySlot;
use crate::util::report::{self, Channel};

#[component]
pub fn FeedbackModal() -> impl IntoView {
    let form = expect_context::<RwSignal<FeedbackForm>>();

    let pending = DelaySlot::default();
    let cleanup = pending.clone();
    on_cleanup(move || cleanup.cancel());

    let is_error_report = move || form.with(|f| f.error.is_some());
    let submitting = move || form.with(FeedbackForm::is_submitting);

    let close = {
        let pending = pending.clone();
        move || {
            pending.cancel();
            form.update(FeedbackForm::close);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(FeedbackForm::begin_submit) {
            Some(Ok(ticket)) => pending.schedule(SUBMIT_DELAY_MS, move || {
                if let Some(report) = form.try_update(|f| f.complete_submit(ticket)).flatten() {
                    report::emit(Channel::FeedbackForm, &report);
                }
            }),
            Some(Err(e)) => warn!("feedback form: {e}"),
            None => {}
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(list) = input.files() else {
                return;
            };
            let picked: Vec<Screenshot> = (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|file| Screenshot::new(file.name(), file.type_()))
                .collect();
            form.update(|f| {
                f.add_screenshots(picked);
            });
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let escape = {
        let close = close.clone();
        window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                close();
            }
        })
    };
    on_cleanup(move || escape.remove());
    let on_backdrop = {
        let close = close.clone();
        move |_| close()
    };
    let on_cancel = {
        let close = close.clone();
        move |_| close()
    };
    let on_close_click = move |_| close();

    view! {
        <div class="feedback-modal__backdrop" on:click=on_backdrop>
            <div class="feedback-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="feedback-modal__header">
                    <h2>{move || if is_error_report() { "Report Error" } else { "Send Feedback" }}</h2>
                    <button class="feedback-modal__close" title="Close" on:click=on_close_click>
                        "✕"
                    </button>
                </div>
                <form class="feedback-modal__form" on:submit=on_submit>
                    <Show
                        when=is_error_report
                        fallback=move || view! { <KindPicker form=form/> }
                    >
                        <div class="feedback-modal__notice">
                            <strong>"Error Report"</strong>
                            " - You're reporting an error that occurred in the application."
                        </div>
                    </Show>

                    <label class="feedback-modal__label" for="feedback-subject">"Subject"</label>
                    <input
                        id="feedback-subject"
                        class="feedback-modal__input"
                        type="text"
                        placeholder="Brief description of your feedback..."
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.subject = value);
                        }
                    />

                    <TagPicker form=form/>

                    <label class="feedback-modal__label" for="feedback-description">
                        "Description " <span class="feedback-modal__required">"*"</span>
                    </label>
                    <textarea
                        id="feedback-description"
                        class="feedback-modal__textarea"
                        rows="4"
                        placeholder="Please describe your feedback in detail..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.description = value);
                        }
                    ></textarea>

                    <label class="feedback-modal__label" for="feedback-email">"Email (optional)"</label>
                    <input
                        id="feedback-email"
                        class="feedback-modal__input"
                        type="email"
                        placeholder="your@email.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />

                    <div class="feedback-modal__checkbox">
                        <input
                            id="feedback-session"
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.include_session)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.include_session = checked);
                            }
                        />
                        <label for="feedback-session">"Include session information to help us debug"</label>
                    </div>

                    <label class="feedback-modal__label">
                        {format!("Screenshots (optional, max {MAX_SCREENSHOTS})")}
                    </label>
                    <Show when=move || form.with(|f| f.screenshots.len() < MAX_SCREENSHOTS)>
                        <input
                            class="feedback-modal__file"
                            type="file"
                            accept="image/*"
                            multiple=true
                            on:change=on_files
                        />
                    </Show>
                    <ScreenshotList form=form/>

                    <div class="feedback-modal__footer">
                        <button type="button" class="btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || !form.with(FeedbackForm::can_submit)
                        >
                            {move || if submitting() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn KindPicker(form: RwSignal<FeedbackForm>) -> impl IntoView {
    view! {
        <div class="feedback-modal__kinds">
            <span class="feedback-modal__label">"Feedback Type"</span>
            {FeedbackKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <button
                            type="button"
                            class="feedback-modal__kind"
                            class:feedback-modal__kind--active=move || form.with(|f| f.kind == kind)
                            on:click=move |_| form.update(|f| f.set_kind(kind))
                        >
                            {kind.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TagPicker(form: RwSignal<FeedbackForm>) -> impl IntoView {
    view! {
        <div class="feedback-modal__tags">
            <span class="feedback-modal__label">"Tags"</span>
            {move || {
                form.with(|f| f.kind.tag_options())
                    .iter()
                    .map(|&tag| {
                        view! {
                            <button
                                type="button"
                                class="feedback-modal__tag"
                                class:feedback-modal__tag--selected=move || form.with(|f| f.tags.iter().any(|t| t == tag))
                                on:click=move |_| form.update(|f| f.toggle_tag(tag))
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ScreenshotList(form: RwSignal<FeedbackForm>) -> impl IntoView {
    view! {
        <div class="feedback-modal__screenshots">
            {move || {
                form.with(|f| f.screenshots.iter().map(|s| s.short_name()).collect::<Vec<_>>())
                    .into_iter()
                    .enumerate()
                    .map(|(index, name)| {
                        view! {
                            <div class="feedback-modal__screenshot">
                                <span>{name}</span>
                                <button
                                    type="button"
                                    title="Remove screenshot"
                                    on:click=move |_| form.update(|f| f.remove_screenshot(index))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
