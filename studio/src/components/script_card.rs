//! Screenplay card. Scene type, location, time of day and action are editable.

use leptos::prelude::*;
use plans::{Script, ScriptScene, SceneType, TimeOfDay};

use crate::components::scene_actions::{SceneActions, apply_edit};
use crate::state::edit_session::SceneEditor;

#[component]
pub fn ScriptCard(plan: Script) -> impl IntoView {
    let editor = RwSignal::new(SceneEditor::new(&plan.scenes));

    view! {
        <div class="plan-card plan-card--script" class:plan-card--editing=move || editor.with(|e| e.editing().is_some())>
            <div class="plan-card__header">
                <div class="plan-card__icon">"📝"</div>
                <div>
                    <h3 class="plan-card__title">{plan.title.clone()}</h3>
                    <p class="plan-card__subtitle">{format!("{} scenes", plan.total_scenes)}</p>
                </div>
            </div>
            <div class="plan-card__scenes">
                {plan
                    .scenes
                    .into_iter()
                    .map(|scene| view! { <ScriptSceneRow editor=editor scene=scene/> })
                    .collect_view()}
            </div>
            <div class="plan-card__footer">"Full narrative script ready"</div>
        </div>
    }
}

#[component]
fn ScriptSceneRow(editor: RwSignal<SceneEditor<ScriptScene>>, scene: ScriptScene) -> impl IntoView {
    let n = scene.scene_number;
    let editing = move || editor.with(|e| e.is_editing(n));
    let working = move || editor.with(|e| e.working(n).cloned());

    let heading = move || working().map(|s| s.display_heading()).unwrap_or_default();
    let scene_type = move || working().and_then(|s| s.scene_type).unwrap_or_default();
    let time_of_day = move || working().and_then(|s| s.time_of_day).unwrap_or_default();
    let location = move || working().and_then(|s| s.location).unwrap_or_default();
    let action = move || working().and_then(|s| s.action);

    view! {
        <div class="scene scene--script" class:scene--editing=editing>
            <div class="scene__header">
                <span class="scene__number">{n}</span>
                <Show
                    when=editing
                    fallback=move || view! { <h4 class="scene__heading">{heading}</h4> }
                >
                    <div class="scene__slug-editor">
                        <select
                            class="scene__select"
                            prop:value=move || scene_type().key()
                            on:change=move |ev| {
                                let picked = SceneType::from_key(&event_target_value(&ev));
                                apply_edit(editor, n, |s| s.scene_type = picked);
                            }
                        >
                            {SceneType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.key()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                        <input
                            class="scene__input"
                            type="text"
                            placeholder="Location"
                            prop:value=location
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                apply_edit(editor, n, |s| s.location = Some(value).filter(|v| !v.is_empty()));
                            }
                        />
                        <select
                            class="scene__select"
                            prop:value=move || time_of_day().key()
                            on:change=move |ev| {
                                let picked = TimeOfDay::from_key(&event_target_value(&ev));
                                apply_edit(editor, n, |s| s.time_of_day = picked);
                            }
                        >
                            {TimeOfDay::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.key()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </Show>
                <SceneActions editor=editor scene_number=n/>
            </div>
            <Show
                when=editing
                fallback=move || action().map(|a| view! { <p class="scene__action">{a}</p> })
            >
                <textarea
                    class="scene__input"
                    rows="3"
                    placeholder="Action"
                    prop:value=move || action().unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        apply_edit(editor, n, |s| s.action = Some(value).filter(|v| !v.is_empty()));
                    }
                ></textarea>
            </Show>
            {(!scene.dialogue.is_empty())
                .then(|| {
                    view! {
                        <div class="scene__dialogue">
                            {scene
                                .dialogue
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <div class="scene__line">
                                            <p class="scene__character">{line.character}</p>
                                            <p class="scene__speech">{line.line}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}
