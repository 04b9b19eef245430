//! Video plan card. Scene descriptions and voiceovers are editable.

use leptos::prelude::*;
use plans::{VideoPlan, VideoScene};

use crate::components::scene_actions::{SceneActions, apply_edit};
use crate::state::edit_session::SceneEditor;

#[component]
pub fn VideoPlanningCard(plan: VideoPlan) -> impl IntoView {
    let editor = RwSignal::new(SceneEditor::new(&plan.scenes));

    view! {
        <div class="plan-card plan-card--video" class:plan-card--editing=move || editor.with(|e| e.editing().is_some())>
            <div class="plan-card__header">
                <div class="plan-card__icon">"🎬"</div>
                <div>
                    <h3 class="plan-card__title">{plan.title.clone()}</h3>
                    <p class="plan-card__subtitle">{format!("{} scenes", plan.total_scenes)}</p>
                </div>
            </div>
            <div class="plan-card__scenes">
                {plan
                    .scenes
                    .into_iter()
                    .map(|scene| view! { <VideoSceneRow editor=editor scene=scene/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn VideoSceneRow(editor: RwSignal<SceneEditor<VideoScene>>, scene: VideoScene) -> impl IntoView {
    let n = scene.scene_number;
    let editing = move || editor.with(|e| e.is_editing(n));
    let working = move || editor.with(|e| e.working(n).cloned());

    let description = move || working().map(|s| s.description).unwrap_or_default();
    let voiceover = move || working().and_then(|s| s.voiceover);

    view! {
        <div class="scene" class:scene--editing=editing>
            <div class="scene__number">{n}</div>
            <div class="scene__content">
                <div class="scene__header">
                    <h4 class="scene__title">{scene.title.clone()}</h4>
                    {scene.duration.clone().map(|d| view! { <span class="scene__duration">{d}</span> })}
                    <SceneActions editor=editor scene_number=n/>
                </div>
                <Show
                    when=editing
                    fallback=move || {
                        view! {
                            <p class="scene__description">{description}</p>
                            {move || {
                                voiceover()
                                    .map(|v| {
                                        view! {
                                            <p class="scene__voiceover">
                                                <span class="scene__label">"Voiceover: "</span>
                                                {v}
                                            </p>
                                        }
                                    })
                            }}
                        }
                    }
                >
                    <textarea
                        class="scene__input"
                        rows="3"
                        prop:value=description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            apply_edit(editor, n, |s| s.description = value);
                        }
                    ></textarea>
                    <label class="scene__label">"Voiceover"</label>
                    <textarea
                        class="scene__input"
                        rows="2"
                        placeholder="Narration for this scene"
                        prop:value=move || voiceover().unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            apply_edit(editor, n, |s| s.voiceover = Some(value).filter(|v| !v.is_empty()));
                        }
                    ></textarea>
                </Show>
            </div>
            {scene.image_url.map(|src| view! { <img class="scene__thumb" src=src alt=""/> })}
        </div>
    }
}
