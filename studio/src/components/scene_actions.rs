//! Edit / save / cancel controls shared by the scene-based planning cards.

use leptos::logging::warn;
use leptos::prelude::*;
use plans::Scene;
use serde::Serialize;

use crate::state::edit_session::SceneEditor;
use crate::util::report::{self, Channel};

/// Apply a field change to the open scene, logging rejected edits.
pub fn apply_edit<S>(editor: RwSignal<SceneEditor<S>>, scene_number: u32, edit: impl FnOnce(&mut S))
where
    S: Scene + Send + Sync + 'static,
{
    if let Some(Err(e)) = editor.try_update(|e| e.update(scene_number, edit)) {
        warn!("scene edit rejected: {e}");
    }
}

#[component]
pub fn SceneActions<S>(editor: RwSignal<SceneEditor<S>>, scene_number: u32) -> impl IntoView
where
    S: Scene + Serialize + Send + Sync + 'static,
{
    let editing = move || editor.with(|e| e.is_editing(scene_number));

    let on_edit = move |_| {
        if let Some(Err(e)) = editor.try_update(|e| e.begin(scene_number)) {
            warn!("scene edit: {e}");
        }
    };
    let on_save = move |_| {
        if let Some(saved) = editor.try_update(SceneEditor::commit).flatten() {
            report::emit(Channel::SceneEdit, &saved);
        }
    };
    let on_cancel = move |_| {
        editor.update(|e| {
            e.discard();
        });
    };

    view! {
        <div class="scene-actions">
            <Show
                when=editing
                fallback=move || {
                    view! {
                        <button class="scene-actions__edit" title="Edit scene" on:click=on_edit>
                            "✎"
                        </button>
                    }
                }
            >
                <button
                    class="scene-actions__save"
                    title="Save"
                    disabled=move || !editor.with(|e| e.is_dirty(scene_number))
                    on:click=on_save
                >
                    "✓"
                </button>
                <button class="scene-actions__cancel" title="Cancel" on:click=on_cancel>
                    "✕"
                </button>
            </Show>
        </div>
    }
}
