use super::*;

fn storyboard_json() -> &'static str {
    r#"{
        "kind": "storyboard",
        "data": {
            "title": "Coffee shop opening",
            "totalScenes": 2,
            "scenes": [
                { "sceneNumber": 1, "title": "Exterior", "description": "Morning light on the sign", "shotType": "Wide" },
                { "sceneNumber": 2, "title": "Counter", "description": "Barista pours latte art", "duration": "3s" }
            ]
        }
    }"#
}

fn script_scene() -> ScriptScene {
    ScriptScene {
        scene_number: 1,
        heading: "INT. CAFE - DAY".to_owned(),
        scene_type: None,
        location: None,
        time_of_day: None,
        action: Some("The door chimes.".to_owned()),
        dialogue: vec![DialogueLine { character: "MIA".to_owned(), line: "Morning!".to_owned() }],
    }
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_storyboard_reads_camel_case_fields() {
    let payload = decode_payload(storyboard_json()).expect("decode");
    let Payload::Storyboard(board) = payload else {
        panic!("expected storyboard");
    };
    assert_eq!(board.total_scenes, 2);
    assert_eq!(board.scenes[0].shot_type.as_deref(), Some("Wide"));
    assert_eq!(board.scenes[1].duration.as_deref(), Some("3s"));
    assert_eq!(board.scenes[1].image_url, None);
}

#[test]
fn decode_task_plan_defaults_optional_fields() {
    let raw = r#"{"kind":"taskPlanning","data":{"title":"Card","steps":[{"title":"Pick layout","description":"two columns"}]}}"#;
    let payload = decode_payload(raw).expect("decode");
    let Payload::TaskPlanning(plan) = payload else {
        panic!("expected task plan");
    };
    assert!(plan.steps[0].substeps.is_empty());
    assert_eq!(plan.steps[0].completed, None);
}

#[test]
fn decode_rejects_unknown_kind() {
    let raw = r#"{"kind":"moodboard","data":{"title":"x"}}"#;
    let err = decode_payload(raw).expect_err("unknown kind");
    assert!(matches!(err, PlanError::Decode(_)));
}

#[test]
fn decode_rejects_duplicate_scene_numbers() {
    let raw = r#"{"kind":"videoPlanning","data":{"title":"Promo","totalScenes":2,"scenes":[
        {"sceneNumber":4,"title":"A","description":"a"},
        {"sceneNumber":4,"title":"B","description":"b"}
    ]}}"#;
    let err = decode_payload(raw).expect_err("duplicate");
    assert!(matches!(err, PlanError::DuplicateScene(4)));
}

#[test]
fn decode_payloads_reads_array() {
    let raw = format!("[{}]", storyboard_json());
    let payloads = decode_payloads(&raw).expect("decode");
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].kind(), "storyboard");
    assert_eq!(payloads[0].title(), "Coffee shop opening");
}

#[test]
fn payload_serializes_with_kind_envelope() {
    let payload = Payload::TaskPlanning(TaskPlan { title: "t".to_owned(), steps: Vec::new() });
    let value = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(value["kind"], "taskPlanning");
    assert_eq!(value["data"]["title"], "t");
}

#[test]
fn script_enums_use_lowercase_names() {
    let mut scene = script_scene();
    scene.scene_type = Some(SceneType::Exterior);
    scene.time_of_day = Some(TimeOfDay::Dusk);
    let value = serde_json::to_value(&scene).expect("serialize");
    assert_eq!(value["sceneType"], "exterior");
    assert_eq!(value["timeOfDay"], "dusk");
}

#[test]
fn completed_steps_counts_only_explicit_true() {
    let step = |completed| TaskStep {
        title: "s".to_owned(),
        description: String::new(),
        substeps: Vec::new(),
        completed,
    };
    let plan = TaskPlan { title: "p".to_owned(), steps: vec![step(Some(true)), step(Some(false)), step(None)] };
    assert_eq!(plan.completed_steps(), 1);
}

// =============================================================
// Script headings
// =============================================================

#[test]
fn display_heading_falls_back_to_authored_heading() {
    assert_eq!(script_scene().display_heading(), "INT. CAFE - DAY");
}

#[test]
fn display_heading_composes_structured_fields() {
    let mut scene = script_scene();
    scene.scene_type = Some(SceneType::Exterior);
    scene.location = Some("rooftop".to_owned());
    scene.time_of_day = Some(TimeOfDay::Night);
    assert_eq!(scene.display_heading(), "EXT. ROOFTOP - NIGHT");
}

#[test]
fn display_heading_defaults_missing_type_and_time() {
    let mut scene = script_scene();
    scene.location = Some("street".to_owned());
    assert_eq!(scene.display_heading(), "INT. STREET - DAY");
}

#[test]
fn enum_keys_round_trip() {
    for t in SceneType::ALL {
        assert_eq!(SceneType::from_key(t.key()), Some(t));
    }
    for t in TimeOfDay::ALL {
        assert_eq!(TimeOfDay::from_key(t.key()), Some(t));
    }
    assert_eq!(TimeOfDay::from_key("noon"), None);
}
