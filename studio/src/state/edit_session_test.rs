use plans::StoryboardScene;

use super::*;

fn scene(n: u32, description: &str) -> StoryboardScene {
    StoryboardScene {
        scene_number: n,
        title: format!("Scene {n}"),
        description: description.to_owned(),
        shot_type: Some("Close-up".to_owned()),
        duration: None,
        image_url: None,
    }
}

fn editor() -> SceneEditor<StoryboardScene> {
    SceneEditor::new(&[scene(1, "Sunrise over the bay"), scene(3, "Gulls take off")])
}

// =============================================================
// Edit mode
// =============================================================

#[test]
fn new_editor_has_no_open_scene() {
    let editor = editor();
    assert_eq!(editor.editing(), None);
    assert!(!editor.is_dirty(1));
}

#[test]
fn begin_unknown_scene_fails() {
    let mut editor = editor();
    assert_eq!(editor.begin(2), Err(EditError::UnknownScene(2)));
    assert_eq!(editor.editing(), None);
}

#[test]
fn update_requires_open_scene() {
    let mut editor = editor();
    let result = editor.update(1, |s| s.description = "x".to_owned());
    assert_eq!(result, Err(EditError::NotEditing(1)));
    editor.begin(3).expect("begin");
    let result = editor.update(1, |s| s.description = "x".to_owned());
    assert_eq!(result, Err(EditError::NotEditing(1)));
    assert_eq!(editor.working(1), editor.source(1));
}

// =============================================================
// Commit / discard
// =============================================================

#[test]
fn edit_then_cancel_restores_source() {
    let mut editor = editor();
    editor.begin(1).expect("begin");
    editor.update(1, |s| s.description = "Moonrise".to_owned()).expect("update");
    assert!(editor.is_dirty(1));
    assert_eq!(editor.discard(), Some(1));
    assert_eq!(editor.working(1), editor.source(1));
    assert_eq!(editor.editing(), None);
    assert!(editor.commit().is_none());
}

#[test]
fn edit_then_save_keeps_working_copy() {
    let mut editor = editor();
    editor.begin(3).expect("begin");
    editor.update(3, |s| s.description = "Gulls circle".to_owned()).expect("update");
    let saved = editor.commit().expect("saved");
    assert_eq!(saved.description, "Gulls circle");
    assert_eq!(editor.working(3).map(|s| s.description.as_str()), Some("Gulls circle"));
    assert_eq!(editor.source(3).map(|s| s.description.as_str()), Some("Gulls take off"));
    assert_eq!(editor.editing(), None);
}

#[test]
fn beginning_another_scene_discards_open_one() {
    let mut editor = editor();
    editor.begin(1).expect("begin");
    editor.update(1, |s| s.description = "draft".to_owned()).expect("update");
    editor.begin(3).expect("begin other");
    assert!(editor.is_editing(3));
    assert!(!editor.is_dirty(1));
}

#[test]
fn rebegin_same_scene_keeps_draft() {
    let mut editor = editor();
    editor.begin(1).expect("begin");
    editor.update(1, |s| s.description = "draft".to_owned()).expect("update");
    editor.begin(1).expect("begin again");
    assert_eq!(editor.working(1).map(|s| s.description.as_str()), Some("draft"));
}

#[test]
fn discard_only_touches_open_scene() {
    let mut editor = editor();
    editor.begin(3).expect("begin");
    editor.update(3, |s| s.description = "saved".to_owned()).expect("update");
    editor.commit();
    editor.begin(1).expect("begin");
    editor.discard();
    assert_eq!(editor.working(3).map(|s| s.description.as_str()), Some("saved"));
}

#[test]
fn discard_without_session_is_none() {
    let mut editor = editor();
    assert_eq!(editor.discard(), None);
}
